//! Constants module for reflection geometry

use std::f64::consts::PI;

// Angles
/// Quarter turn; the rotation coordinate limits sit this far either side of phi
pub use std::f64::consts::FRAC_PI_2;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Default tolerances
/// Shortest beam or axis vector accepted at construction
pub const MIN_VECTOR_LENGTH: f64 = 1e-12;
/// Smallest sine of the angle between s0 and s1 accepted at construction
pub const MIN_CROSS_LENGTH: f64 = 1e-12;
/// Relative |s0| / |s1| mismatch above which construction logs a warning
pub const ELASTIC_WARN_TOLERANCE: f64 = 1e-6;
/// Relative distance from a rotation limit at which `c3` counts as the limit
pub const LIMIT_MATCH_TOLERANCE: f64 = 4.0 * f64::EPSILON;
