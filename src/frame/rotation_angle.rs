//! # Rotation Angle Transforms
//!
//! Maps the rotation angle `phi'` to the third local coordinate `c3` and back.
//!
//! ## Geometry
//!
//! As the crystal turns about `m2`, the unit scattering vector `p̂ = p*/|p*|`
//! sweeps a circle about `m2`. With `Δφ = φ' − φ`, Rodrigues' formula gives
//!
//! ```text
//! R(Δφ) p̂ = p̂ cos Δφ + (m2 × p̂) sin Δφ + m2 (m2·p̂)(1 − cos Δφ)
//! ```
//!
//! The accurate coordinate is the `e3` component of that vector. `e3·p̂ = 0`,
//! and `e3·(m2 × p̂) = m2·(p̂ × e3) = m2·e1 = ζ` because `p̂ × e3` is a
//! positive multiple of `s1 × s0`. With `b = (m2·e3)(m2·p̂)` the
//! [axial offset](CoordinateSystem::axial_offset):
//!
//! ```text
//! accurate:  c3 = ζ sin Δφ + b (1 − cos Δφ)           fast:  c3 = ζ Δφ
//! ```
//!
//! The two differ by `b Δφ² / 2` to leading order, so the error of the fast
//! form grows with the square of the distance from `phi`. It stays below
//! `1e-4` within a degree for any axis; outside a few degrees the fast form
//! must not be used in place of the accurate one.
//!
//! ## Inverse
//!
//! Writing `σ = sign(ζ)`, `R = √(ζ² + b²)` and `δ = atan2(σb, |ζ|)`,
//!
//! ```text
//! σ (c3 − b) = R sin(Δφ − δ)
//! ```
//!
//! The accurate inverse takes the root on the branch `|Δφ − δ| ≤ π/2`, which
//! contains `Δφ = 0` and over which `c3` is monotonic. It accepts `c3`
//! between the two [limits](CoordinateSystem::limits), the coordinate at
//! `phi ∓ π/2`. A limit value given exactly maps back to `phi ∓ π/2`. When
//! `b ≠ 0` one of those angles lies off the branch and its limit value has a
//! second root on the branch, `2δ` nearer to `phi`; coordinates just inside
//! that limit resolve to the branch root.
//!
//! ## Choosing a variant
//!
//! Both variants implement [`RotationAngleForward`] / [`RotationAngleInverse`]
//! and are selected by concrete type. Nothing in this crate picks one for the
//! caller.

use crate::constants::{FRAC_PI_2, LIMIT_MATCH_TOLERANCE};
use crate::errors::{ReflexionBasisError, Result};
use crate::frame::CoordinateSystem;

/// Rotation angle to local `c3` coordinate
pub trait RotationAngleForward {
    /// Local coordinate of the rotation angle `phi_dash` (radians)
    fn apply(&self, phi_dash: f64) -> f64;
}

/// Local `c3` coordinate to rotation angle
pub trait RotationAngleInverse {
    /// Rotation angle (radians) of the local coordinate `c3`
    fn apply(&self, c3: f64) -> Result<f64>;
}

/// Exact forward map: `e3` component of the rotated unit scattering vector
#[derive(Debug, Clone, Copy)]
pub struct FromRotationAngleAccurate<'a> {
    cs: &'a CoordinateSystem,
}

impl<'a> FromRotationAngleAccurate<'a> {
    pub fn new(cs: &'a CoordinateSystem) -> Self {
        Self { cs }
    }
}

impl RotationAngleForward for FromRotationAngleAccurate<'_> {
    fn apply(&self, phi_dash: f64) -> f64 {
        let dphi = phi_dash - self.cs.phi();
        let half = (0.5 * dphi).sin();
        self.cs.zeta() * dphi.sin() + 2.0 * self.cs.axial_offset() * half * half
    }
}

/// Linearised forward map, valid within a few degrees of `phi`
#[derive(Debug, Clone, Copy)]
pub struct FromRotationAngleFast<'a> {
    cs: &'a CoordinateSystem,
}

impl<'a> FromRotationAngleFast<'a> {
    pub fn new(cs: &'a CoordinateSystem) -> Self {
        Self { cs }
    }
}

impl RotationAngleForward for FromRotationAngleFast<'_> {
    fn apply(&self, phi_dash: f64) -> f64 {
        self.cs.zeta() * (phi_dash - self.cs.phi())
    }
}

/// Exact inverse map on the branch through `phi`
#[derive(Debug, Clone, Copy)]
pub struct ToRotationAngleAccurate<'a> {
    cs: &'a CoordinateSystem,
}

impl<'a> ToRotationAngleAccurate<'a> {
    pub fn new(cs: &'a CoordinateSystem) -> Self {
        Self { cs }
    }
}

impl RotationAngleInverse for ToRotationAngleAccurate<'_> {
    /// # Errors
    ///
    /// [`ReflexionBasisError::RotationAngleOutOfRange`] when `c3` lies outside
    /// the rotation limits, [`ReflexionBasisError::ZeroZeta`] when they
    /// collapse onto the axial offset.
    fn apply(&self, c3: f64) -> Result<f64> {
        let (lower, upper) = self.cs.rotation_limits();
        if c3.is_nan() || c3 < lower || c3 > upper {
            log::trace!("c3 = {} outside ({}, {})", c3, lower, upper);
            return Err(ReflexionBasisError::RotationAngleOutOfRange { c3, lower, upper });
        }
        let zeta = self.cs.checked_zeta()?;
        let phi = self.cs.phi();

        let (_, _, at_minus, at_plus) = self.cs.limits();
        if matches_limit(c3, at_minus) {
            return Ok(phi - FRAC_PI_2);
        }
        if matches_limit(c3, at_plus) {
            return Ok(phi + FRAC_PI_2);
        }

        let offset = self.cs.axial_offset();
        let sign = zeta.signum();
        let amplitude = zeta.hypot(offset);
        let shift = (sign * offset).atan2(zeta.abs());

        // Rounding can leave the scaled coordinate an ulp past the amplitude
        let x = (sign * (c3 - offset)).clamp(-amplitude, amplitude);
        let across = ((amplitude - x) * (amplitude + x)).sqrt();
        Ok(phi + shift + x.atan2(across))
    }
}

fn matches_limit(c3: f64, limit: f64) -> bool {
    (c3 - limit).abs() <= LIMIT_MATCH_TOLERANCE * limit.abs().max(1.0)
}

/// Linearised inverse map
#[derive(Debug, Clone, Copy)]
pub struct ToRotationAngleFast<'a> {
    cs: &'a CoordinateSystem,
}

impl<'a> ToRotationAngleFast<'a> {
    pub fn new(cs: &'a CoordinateSystem) -> Self {
        Self { cs }
    }
}

impl RotationAngleInverse for ToRotationAngleFast<'_> {
    /// # Errors
    ///
    /// [`ReflexionBasisError::ZeroZeta`] when the rotation axis is orthogonal
    /// to `e1`.
    fn apply(&self, c3: f64) -> Result<f64> {
        let zeta = self.cs.checked_zeta().map_err(|err| {
            log::trace!("linearised inverse undefined: {}", err);
            err
        })?;
        Ok(self.cs.phi() + c3 / zeta)
    }
}

/// Exact `c3` coordinate of a rotation angle
pub fn from_rotation_angle_accurate(cs: &CoordinateSystem, phi: f64) -> f64 {
    FromRotationAngleAccurate::new(cs).apply(phi)
}

/// Linearised `c3` coordinate of a rotation angle
pub fn from_rotation_angle_fast(cs: &CoordinateSystem, phi: f64) -> f64 {
    FromRotationAngleFast::new(cs).apply(phi)
}

/// Exact rotation angle of a `c3` coordinate
pub fn to_rotation_angle_accurate(cs: &CoordinateSystem, c3: f64) -> Result<f64> {
    ToRotationAngleAccurate::new(cs).apply(c3)
}

/// Linearised rotation angle of a `c3` coordinate
pub fn to_rotation_angle_fast(cs: &CoordinateSystem, c3: f64) -> Result<f64> {
    ToRotationAngleFast::new(cs).apply(c3)
}
