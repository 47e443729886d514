//! Error types for the reflection coordinate system
//!
//! Construction failures are fatal for the event that produced them. The
//! out-of-range variants are expected during prediction: most candidate
//! coordinates fall outside the valid region and callers skip them.

use thiserror::Error;

/// Main error type for reflexion basis operations
#[derive(Debug, Error)]
pub enum ReflexionBasisError {
    /// The input vectors cannot define an orthonormal basis
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A local beam-vector coordinate does not map onto the Ewald sphere
    #[error("Coordinate ({c1}, {c2}) lies outside the Ewald sphere (c1² + c2² > 1)")]
    BeamVectorOutOfRange {
        /// First local coordinate
        c1: f64,
        /// Second local coordinate
        c2: f64,
    },

    /// A rotation coordinate does not intersect the rotation circle
    #[error("Rotation coordinate {c3} is outside the valid range ({lower}..{upper})")]
    RotationAngleOutOfRange {
        /// The requested rotation coordinate
        c3: f64,
        /// Smallest reachable rotation coordinate
        lower: f64,
        /// Largest reachable rotation coordinate
        upper: f64,
    },

    /// The rotation axis has no component along e1
    #[error("Rotation axis is orthogonal to e1 (zeta = {zeta})")]
    ZeroZeta {
        /// The offending zeta factor
        zeta: f64,
    },

    /// Tolerance configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ReflexionBasisError {
    /// True for the recoverable per-candidate outcomes of the inverse transforms
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            ReflexionBasisError::BeamVectorOutOfRange { .. }
                | ReflexionBasisError::RotationAngleOutOfRange { .. }
                | ReflexionBasisError::ZeroZeta { .. }
        )
    }
}

/// Result type for reflexion basis operations
pub type Result<T> = std::result::Result<T, ReflexionBasisError>;

/// Helper to build a degenerate-geometry error from anything displayable
pub fn degenerate(reason: impl Into<String>) -> ReflexionBasisError {
    ReflexionBasisError::DegenerateGeometry(reason.into())
}
