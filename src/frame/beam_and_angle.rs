//! Combined `(s', phi') <-> (c1, c2, c3)` transforms
//!
//! Profile modelling works on the full local coordinate of a point near the
//! reflection. These transforms pair the beam-vector maps with one variant of
//! the rotation-angle maps, chosen by the caller through the type parameter.

use crate::errors::Result;
use crate::frame::beam_vector::{FromBeamVector, ToBeamVector};
use crate::frame::rotation_angle::{
    FromRotationAngleAccurate, FromRotationAngleFast, RotationAngleForward, RotationAngleInverse,
    ToRotationAngleAccurate, ToRotationAngleFast,
};
use crate::frame::CoordinateSystem;
use crate::geometry::Vec3;

/// Beam vector and rotation angle to local `(c1, c2, c3)`
#[derive(Debug, Clone, Copy)]
pub struct FromBeamVectorAndRotationAngle<'a, R> {
    from_beam_vector: FromBeamVector<'a>,
    from_rotation_angle: R,
}

impl<'a, R: RotationAngleForward> FromBeamVectorAndRotationAngle<'a, R> {
    pub fn with_variant(cs: &'a CoordinateSystem, from_rotation_angle: R) -> Self {
        Self {
            from_beam_vector: FromBeamVector::new(cs),
            from_rotation_angle,
        }
    }

    pub fn apply(&self, s_dash: impl Into<Vec3>, phi_dash: f64) -> (f64, f64, f64) {
        let (c1, c2) = self.from_beam_vector.apply(s_dash);
        (c1, c2, self.from_rotation_angle.apply(phi_dash))
    }
}

impl<'a> FromBeamVectorAndRotationAngle<'a, FromRotationAngleAccurate<'a>> {
    pub fn accurate(cs: &'a CoordinateSystem) -> Self {
        Self::with_variant(cs, FromRotationAngleAccurate::new(cs))
    }
}

impl<'a> FromBeamVectorAndRotationAngle<'a, FromRotationAngleFast<'a>> {
    pub fn fast(cs: &'a CoordinateSystem) -> Self {
        Self::with_variant(cs, FromRotationAngleFast::new(cs))
    }
}

/// Local `(c1, c2, c3)` to beam vector and rotation angle
#[derive(Debug, Clone, Copy)]
pub struct ToBeamVectorAndRotationAngle<'a, R> {
    to_beam_vector: ToBeamVector<'a>,
    to_rotation_angle: R,
}

impl<'a, R: RotationAngleInverse> ToBeamVectorAndRotationAngle<'a, R> {
    pub fn with_variant(cs: &'a CoordinateSystem, to_rotation_angle: R) -> Self {
        Self {
            to_beam_vector: ToBeamVector::new(cs),
            to_rotation_angle,
        }
    }

    /// # Errors
    ///
    /// Whichever domain error the beam-vector or rotation-angle inverse raises
    /// first.
    pub fn apply(&self, c: (f64, f64, f64)) -> Result<(Vec3, f64)> {
        let (c1, c2, c3) = c;
        let s_dash = self.to_beam_vector.apply((c1, c2))?;
        let phi_dash = self.to_rotation_angle.apply(c3)?;
        Ok((s_dash, phi_dash))
    }
}

impl<'a> ToBeamVectorAndRotationAngle<'a, ToRotationAngleAccurate<'a>> {
    pub fn accurate(cs: &'a CoordinateSystem) -> Self {
        Self::with_variant(cs, ToRotationAngleAccurate::new(cs))
    }
}

impl<'a> ToBeamVectorAndRotationAngle<'a, ToRotationAngleFast<'a>> {
    pub fn fast(cs: &'a CoordinateSystem) -> Self {
        Self::with_variant(cs, ToRotationAngleFast::new(cs))
    }
}
