//! # Reflection Coordinate System
//!
//! The local orthonormal frame of a single diffraction event, built from the
//! incident beam `s0`, the diffracted beam `s1`, the rotation axis `m2` and the
//! rotation angle `phi` at which `s1` was observed.
//!
//! ## Basis
//!
//! ```text
//! e1 = (s1 × s0) / |s1 × s0|      normal to the diffraction plane
//! e2 = (s1 × e1) / |s1|           in the diffraction plane, normal to s1
//! e3 = (s0 + s1) / |s0 + s1|      bisects the two beams, normal to p* = s1 - s0
//! ```
//!
//! `e1` and `e2` span the tangent plane of the Ewald sphere at `s1`; `e3`
//! measures motion of the scattering vector as the crystal rotates.
//!
//! Two projections of the rotation axis fix the rotation coordinate: `zeta =
//! m2·e1` and the axial offset `(m2·e3)(m2·p̂)` with `p̂ = p*/|p*|`.
//!
//! ## Examples
//!
//! ```rust
//! use reflexion_basis::CoordinateSystem;
//!
//! let cs = CoordinateSystem::new(
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//!     [0.0, 0.6, 0.8],
//!     0.0,
//! ).unwrap();
//!
//! assert!((cs.e1_axis().length() - 1.0).abs() < 1e-12);
//! assert_eq!(cs.limits().0, -1.0);
//! ```

use crate::config::GeometryTolerance;
use crate::constants::ELASTIC_WARN_TOLERANCE;
use crate::errors::{degenerate, ReflexionBasisError, Result};
use crate::geometry::Vec3;
use serde::Serialize;

/// Local coordinate system of one reflection
///
/// Immutable after construction. Every derived quantity is computed once in
/// [`CoordinateSystem::with_tolerance`] and read back through accessors, so an
/// instance can be shared across threads or copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateSystem {
    m2: Vec3,
    s0: Vec3,
    s1: Vec3,
    phi: f64,
    p_star: Vec3,
    e1: Vec3,
    e2: Vec3,
    e3: Vec3,
    zeta: f64,
    axial_offset: f64,
    s1_length: f64,
    tolerance: GeometryTolerance,
}

impl CoordinateSystem {
    /// Build the coordinate system with default tolerances
    ///
    /// # Arguments
    ///
    /// * `m2` - Rotation axis, normalized here
    /// * `s0` - Incident beam vector
    /// * `s1` - Diffracted beam vector, same length as `s0`
    /// * `phi` - Rotation angle at which `s1` was observed, in radians
    ///
    /// # Errors
    ///
    /// [`ReflexionBasisError::DegenerateGeometry`] when any vector is too short
    /// or `s0` and `s1` are collinear.
    pub fn new(
        m2: impl Into<Vec3>,
        s0: impl Into<Vec3>,
        s1: impl Into<Vec3>,
        phi: f64,
    ) -> Result<Self> {
        Self::with_tolerance(m2, s0, s1, phi, GeometryTolerance::default())
    }

    /// Build the coordinate system with explicit tolerances
    pub fn with_tolerance(
        m2: impl Into<Vec3>,
        s0: impl Into<Vec3>,
        s1: impl Into<Vec3>,
        phi: f64,
        tolerance: GeometryTolerance,
    ) -> Result<Self> {
        let (m2, s0, s1) = (m2.into(), s0.into(), s1.into());

        if !(m2.is_finite() && s0.is_finite() && s1.is_finite() && phi.is_finite()) {
            return Err(degenerate("input contains non-finite values"));
        }

        let s0_length = s0.length();
        let s1_length = s1.length();
        if s0_length <= tolerance.min_vector_length {
            return Err(degenerate(format!("s0 has length {s0_length}")));
        }
        if s1_length <= tolerance.min_vector_length {
            return Err(degenerate(format!("s1 has length {s1_length}")));
        }
        if m2.length() <= tolerance.min_vector_length {
            return Err(degenerate("rotation axis has zero length"));
        }
        let m2 = m2
            .normalize()
            .ok_or_else(|| degenerate("rotation axis cannot be normalized"))?;

        if ((s0_length - s1_length) / s1_length).abs() > ELASTIC_WARN_TOLERANCE {
            log::warn!(
                "|s0| = {} and |s1| = {} differ; coordinates assume elastic scattering",
                s0_length,
                s1_length
            );
        }

        let normal = s1.cross(&s0);
        let sin_two_theta = normal.length() / (s0_length * s1_length);
        if sin_two_theta <= tolerance.min_cross_length {
            return Err(degenerate(format!(
                "s0 and s1 are collinear (|ŝ1 × ŝ0| = {sin_two_theta})"
            )));
        }
        let e1 = normal / normal.length();
        let e2 = s1.cross(&e1) / s1_length;
        let e3 = (s0 + s1)
            .normalize()
            .ok_or_else(|| degenerate("s0 and s1 are antiparallel"))?;
        let zeta = m2.dot(&e1);
        let p_star = s1 - s0;
        let p_unit = p_star
            .normalize()
            .ok_or_else(|| degenerate("scattering vector has zero length"))?;
        let axial_offset = m2.dot(&e3) * m2.dot(&p_unit);

        let cs = CoordinateSystem {
            m2,
            s0,
            s1,
            phi,
            p_star,
            e1,
            e2,
            e3,
            zeta,
            axial_offset,
            s1_length,
            tolerance,
        };

        log::debug!(
            "Coordinate system at phi = {:.6}: zeta = {:.6}, limits = {:?}",
            phi,
            zeta,
            cs.limits()
        );

        Ok(cs)
    }

    /// Incident beam vector
    pub fn s0(&self) -> Vec3 {
        self.s0
    }

    /// Diffracted beam vector
    pub fn s1(&self) -> Vec3 {
        self.s1
    }

    /// Unit rotation axis
    pub fn m2(&self) -> Vec3 {
        self.m2
    }

    /// Rotation angle of the event in radians
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Scattering vector `s1 - s0`
    pub fn p_star(&self) -> Vec3 {
        self.p_star
    }

    /// Unit vector normal to the diffraction plane
    pub fn e1_axis(&self) -> Vec3 {
        self.e1
    }

    /// Unit vector in the diffraction plane, normal to `s1`
    pub fn e2_axis(&self) -> Vec3 {
        self.e2
    }

    /// Unit vector bisecting `s0` and `s1`
    pub fn e3_axis(&self) -> Vec3 {
        self.e3
    }

    /// Radius of the Ewald sphere, `|s1|`
    pub fn s1_length(&self) -> f64 {
        self.s1_length
    }

    /// Component of the rotation axis along `e1`
    pub fn zeta(&self) -> f64 {
        self.zeta
    }

    /// Product `(m2·e3)(m2·p̂)` of the axis projections on `e3` and the unit
    /// scattering vector
    ///
    /// The rotated scattering vector leaves the `e1`/`e2` plane by
    /// `axial_offset * (1 - cos Δφ)` on top of `zeta * sin Δφ`.
    pub fn axial_offset(&self) -> f64 {
        self.axial_offset
    }

    /// Inverse Lorentz factor; identical to [`zeta`](Self::zeta)
    pub fn lorentz_inv(&self) -> f64 {
        self.zeta
    }

    /// Lorentz factor `1 / zeta`
    ///
    /// # Errors
    ///
    /// [`ReflexionBasisError::ZeroZeta`] when the rotation axis lies in the
    /// `e2`/`e3` plane.
    pub fn lorentz(&self) -> Result<f64> {
        self.checked_zeta().map(|zeta| 1.0 / zeta)
    }

    /// Increase in path length along `s1` per unit displacement along `e3`
    ///
    /// `e3` makes the Bragg angle with `s1`, so this is the secant of that angle.
    pub fn path_length_increase(&self) -> f64 {
        1.0 / (self.e3.dot(&self.s1) / self.s1_length).abs()
    }

    /// Tolerances this instance was built with
    pub fn tolerance(&self) -> &GeometryTolerance {
        &self.tolerance
    }

    /// Bounds on the local coordinates
    ///
    /// Returns `(c1_min, c1_max, c3_at_minus, c3_at_plus)`. The beam-vector
    /// coordinates are normalized by `|s1|` so the first pair is always
    /// `(-1, 1)`. The second pair is the accurate rotation coordinate at
    /// `phi - π/2` and `phi + π/2`, which is `axial_offset ∓ zeta`; it is
    /// descending when `zeta < 0`.
    pub fn limits(&self) -> (f64, f64, f64, f64) {
        (
            -1.0,
            1.0,
            self.axial_offset - self.zeta,
            self.axial_offset + self.zeta,
        )
    }

    /// The rotation coordinate limits ordered as `(lower, upper)`
    pub fn rotation_limits(&self) -> (f64, f64) {
        let (_, _, a, b) = self.limits();
        (a.min(b), a.max(b))
    }

    /// Zeta, or an error when it is too small to divide by
    pub(crate) fn checked_zeta(&self) -> Result<f64> {
        if self.zeta.abs() <= self.tolerance.min_zeta.max(0.0) {
            Err(ReflexionBasisError::ZeroZeta { zeta: self.zeta })
        } else {
            Ok(self.zeta)
        }
    }
}
