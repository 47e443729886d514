//! Local reflection coordinate system and its transforms
//!
//! # Main Components
//!
//! - `coordinate_system`: the per-event orthonormal basis and derived scalars
//! - `beam_vector`: `s' <-> (c1, c2)` on the Ewald sphere
//! - `rotation_angle`: `phi' <-> c3`, accurate and fast variants
//! - `beam_and_angle`: the two combined into `(s', phi') <-> (c1, c2, c3)`

pub mod beam_and_angle;
pub mod beam_vector;
pub mod coordinate_system;
pub mod rotation_angle;

// Re-export primary types for convenience
pub use self::beam_and_angle::{FromBeamVectorAndRotationAngle, ToBeamVectorAndRotationAngle};
pub use self::beam_vector::{from_beam_vector, to_beam_vector, FromBeamVector, ToBeamVector};
pub use self::coordinate_system::CoordinateSystem;
pub use self::rotation_angle::{
    from_rotation_angle_accurate, from_rotation_angle_fast, to_rotation_angle_accurate,
    to_rotation_angle_fast, FromRotationAngleAccurate, FromRotationAngleFast, RotationAngleForward,
    RotationAngleInverse, ToRotationAngleAccurate, ToRotationAngleFast,
};
