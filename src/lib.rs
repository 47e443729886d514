//! Reflexion basis: local coordinate system of a rotation-method diffraction event
//!
//! For one predicted reflection the crate builds an orthonormal frame centred on
//! the diffracted beam and maps nearby beam vectors and rotation angles to small
//! dimensionless coordinates and back.
//!
//! ```rust
//! use reflexion_basis::{CoordinateSystem, from_beam_vector, to_rotation_angle_accurate};
//!
//! let cs = CoordinateSystem::new(
//!     [1.0, 0.0, 0.0],   // rotation axis m2
//!     [0.0, 0.0, 1.0],   // incident beam s0
//!     [0.0, 0.6, 0.8],   // diffracted beam s1
//!     0.1,               // phi
//! )?;
//!
//! assert_eq!(from_beam_vector(&cs, cs.s1()), (0.0, 0.0));
//! assert!(to_rotation_angle_accurate(&cs, 2.0).is_err());
//! # Ok::<(), reflexion_basis::ReflexionBasisError>(())
//! ```

pub mod batch;
pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod geometry;

// Re-export commonly used types
pub use batch::{build_coordinate_systems, EventGeometry};
pub use config::GeometryTolerance;
pub use errors::{ReflexionBasisError, Result};
pub use frame::*;
pub use geometry::Vec3;
