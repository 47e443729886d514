//! # Vector Algebra Kernel
//!
//! This module provides the 3-component vector type used for beam vectors,
//! rotation axes and basis vectors throughout the crate.
//!
//! ## Frame Convention
//!
//! Components are expressed in the laboratory frame in which the incident
//! beam `s0`, diffracted beam `s1` and rotation axis `m2` are given. The frame
//! is right-handed; rotations follow the right-hand rule about their axis.
//!
//! ## Reciprocal-Space Units
//!
//! Beam vectors carry their wavenumber as length (`|s| = 1/λ`), so the kernel
//! never normalizes implicitly. Callers ask for a unit vector through
//! [`Vec3::normalize`], which reports a zero-length input as `None` instead of
//! producing NaNs.
//!
//! ## Examples
//!
//! ```rust
//! use reflexion_basis::geometry::Vec3;
//!
//! let s0 = Vec3::new(0.0, 0.0, 1.0);
//! let s1 = Vec3::new(0.0, 0.6, 0.8);
//!
//! // Scattering vector
//! let p_star = s1 - s0;
//! assert!((p_star.y - 0.6).abs() < 1e-15);
//!
//! // Elastic scattering: both beams on the same sphere
//! assert!((s0.length() - s1.length()).abs() < 1e-15);
//! ```

use nalgebra::{Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Three-component real vector in the laboratory frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reflexion_basis::geometry::Vec3;
    ///
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Vec3::new(0.0, 0.0, 0.0)
    }

    /// Squared Euclidean length
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length
    ///
    /// For a beam vector this is the wavenumber `1/λ`.
    ///
    /// ```rust
    /// use reflexion_basis::geometry::Vec3;
    ///
    /// assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` if the length is zero or not finite.
    ///
    /// ```rust
    /// use reflexion_basis::geometry::Vec3;
    ///
    /// let unit = Vec3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.length() - 1.0).abs() < 1e-15);
    /// assert!(Vec3::zero().normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Vec3> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            None
        } else {
            Some(*self / len)
        }
    }

    /// Dot product
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed)
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// ```rust
    /// use reflexion_basis::geometry::Vec3;
    ///
    /// let x = Vec3::new(1.0, 0.0, 0.0);
    /// let y = Vec3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vec3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// Zero-length inputs give 0.
    pub fn angle_between(&self, other: &Vec3) -> f64 {
        let mag_product = self.length() * other.length();
        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = self.dot(other) / mag_product;

        // Rounding can push the cosine just outside [-1, 1]
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }

    /// Rotates this vector by `angle` radians about `axis`
    ///
    /// The axis need not be unit length. Returns `None` for a zero axis.
    /// Positive angles rotate anticlockwise when looking down the axis
    /// towards the origin.
    ///
    /// ```rust
    /// use reflexion_basis::geometry::Vec3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let x = Vec3::new(1.0, 0.0, 0.0);
    /// let z_axis = Vec3::new(0.0, 0.0, 2.0);
    /// let rotated = x.rotate_around(&z_axis, FRAC_PI_2).unwrap();
    /// assert!((rotated.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate_around(&self, axis: &Vec3, angle: f64) -> Option<Vec3> {
        let axis = Unit::try_new(axis.to_vector3(), 0.0)?;
        let rotation = Rotation3::from_axis_angle(&axis, angle);
        Some(Vec3::from_vector3(rotation * self.to_vector3()))
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vec3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from(v: (f64, f64, f64)) -> Self {
        Vec3::new(v.0, v.1, v.2)
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(v: Vector3<f64>) -> Self {
        Vec3::from_vector3(v)
    }
}

impl From<Vec3> for Vector3<f64> {
    fn from(v: Vec3) -> Self {
        v.to_vector3()
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f64) -> Vec3 {
        Vec3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f64) -> Vec3 {
        Vec3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
