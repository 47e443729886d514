//! Beam vector transforms
//!
//! Maps diffracted-beam directions to the `(c1, c2)` coordinates of the
//! tangent plane at `s1` and back. Coordinates are scaled by `|s1|`, so the
//! whole Ewald sphere hemisphere around `s1` fits inside the unit disc.

use crate::errors::{ReflexionBasisError, Result};
use crate::frame::CoordinateSystem;
use crate::geometry::Vec3;

/// Beam vector to local `(c1, c2)` coordinate
#[derive(Debug, Clone, Copy)]
pub struct FromBeamVector<'a> {
    cs: &'a CoordinateSystem,
}

impl<'a> FromBeamVector<'a> {
    pub fn new(cs: &'a CoordinateSystem) -> Self {
        Self { cs }
    }

    /// Local coordinate of the beam vector `s_dash`
    ///
    /// `s_dash` need not lie on the Ewald sphere; only its displacement from
    /// `s1` along `e1` and `e2` is measured.
    pub fn apply(&self, s_dash: impl Into<Vec3>) -> (f64, f64) {
        let scale = 1.0 / self.cs.s1_length();
        let shift = s_dash.into() - self.cs.s1();
        (
            scale * shift.dot(&self.cs.e1_axis()),
            scale * shift.dot(&self.cs.e2_axis()),
        )
    }
}

/// Local `(c1, c2)` coordinate to beam vector
#[derive(Debug, Clone, Copy)]
pub struct ToBeamVector<'a> {
    cs: &'a CoordinateSystem,
}

impl<'a> ToBeamVector<'a> {
    pub fn new(cs: &'a CoordinateSystem) -> Self {
        Self { cs }
    }

    /// Beam vector on the Ewald sphere with local coordinate `(c1, c2)`
    ///
    /// The result has length `|s1|` and lies in the hemisphere centred on `s1`.
    ///
    /// # Errors
    ///
    /// [`ReflexionBasisError::BeamVectorOutOfRange`] when `c1² + c2² > 1`.
    pub fn apply(&self, c: (f64, f64)) -> Result<Vec3> {
        let (c1, c2) = c;
        let radial = 1.0 - c1 * c1 - c2 * c2;
        if radial.is_nan() || radial < 0.0 {
            log::trace!("({}, {}) is off the Ewald sphere", c1, c2);
            return Err(ReflexionBasisError::BeamVectorOutOfRange { c1, c2 });
        }

        let length = self.cs.s1_length();
        let s1_unit = self.cs.s1() / length;
        Ok((self.cs.e1_axis() * c1 + self.cs.e2_axis() * c2 + s1_unit * radial.sqrt()) * length)
    }
}

/// Local `(c1, c2)` coordinate of a beam vector
pub fn from_beam_vector(cs: &CoordinateSystem, s: impl Into<Vec3>) -> (f64, f64) {
    FromBeamVector::new(cs).apply(s)
}

/// Beam vector of a local `(c1, c2)` coordinate
pub fn to_beam_vector(cs: &CoordinateSystem, c: (f64, f64)) -> Result<Vec3> {
    ToBeamVector::new(cs).apply(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::coordinate_system::tests::reference_system;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    const EPS: f64 = 1e-7;

    #[test]
    fn test_coordinate_of_s1() {
        let cs = reference_system();
        let (c1, c2) = from_beam_vector(&cs, cs.s1());
        assert_abs_diff_eq!(c1, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(c2, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_unit_displacement_along_axes() {
        let cs = reference_system();
        let length = cs.s1_length();

        let (c1, c2) = from_beam_vector(&cs, cs.s1() + cs.e1_axis() * length);
        assert_abs_diff_eq!(c1, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c2, 0.0, epsilon = 1e-12);

        let (c1, c2) = from_beam_vector(&cs, cs.s1() - cs.e2_axis() * length);
        assert_abs_diff_eq!(c1, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c2, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_limit() {
        // A beam vector orthogonal to s1 sits on the unit circle
        let cs = reference_system();
        let mut rng = StdRng::seed_from_u64(11);
        let s_dash = cs.s1().cross(&cs.s0()).normalize().unwrap() * cs.s1_length();

        for _ in 0..100 {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let rotated = s_dash.rotate_around(&cs.s1(), angle).unwrap();
            let (c1, c2) = from_beam_vector(&cs, rotated);
            assert_abs_diff_eq!((c1 * c1 + c2 * c2).sqrt(), cs.limits().1, epsilon = EPS);
        }
    }

    #[test]
    fn test_origin_maps_to_s1() {
        let cs = reference_system();
        let s_dash = to_beam_vector(&cs, (0.0, 0.0)).unwrap();
        assert!((s_dash - cs.s1()).length() <= EPS);
    }

    #[rstest]
    #[case((1.0 - EPS, 0.0), true)]
    #[case((1.0 + EPS, 0.0), false)]
    #[case((0.0, 1.0 - EPS), true)]
    #[case((0.0, 1.0 + EPS), false)]
    #[case((-1.0 + EPS, 0.0), true)]
    #[case((0.0, -1.0 - EPS), false)]
    #[case((0.6, 0.6), true)]
    #[case((0.8, 0.61), false)]
    fn test_far_out_coordinates(#[case] c: (f64, f64), #[case] valid: bool) {
        let cs = reference_system();
        match to_beam_vector(&cs, c) {
            Ok(s_dash) => {
                assert!(valid, "{:?} should be off the sphere", c);
                assert_abs_diff_eq!(s_dash.length(), cs.s1_length(), epsilon = 1e-12);
            }
            Err(err) => {
                assert!(!valid, "{:?} should be on the sphere", c);
                assert!(matches!(err, ReflexionBasisError::BeamVectorOutOfRange { .. }));
                assert!(err.is_domain_error());
            }
        }
    }

    #[test]
    fn test_nan_coordinate_is_rejected() {
        let cs = reference_system();
        assert!(to_beam_vector(&cs, (f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_forward_and_reverse_transform() {
        let cs = reference_system();
        let from = FromBeamVector::new(&cs);
        let to = ToBeamVector::new(&cs);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let shift = Vec3::new(
                rng.gen_range(-0.5..0.5),
                rng.gen_range(-0.5..0.5),
                rng.gen_range(-0.5..0.5),
            );
            let s_dash = (cs.s1() + shift).normalize().unwrap() * cs.s1_length();

            let c = from.apply(s_dash);
            let s_dash_2 = to.apply(c).unwrap();

            assert!(
                (s_dash - s_dash_2).length() <= EPS,
                "round trip of {:?} gave {:?}",
                s_dash,
                s_dash_2
            );
        }
    }
}
