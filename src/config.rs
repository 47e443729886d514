//! Construction tolerances
//!
//! Degenerate input detection is the only tunable behaviour of the coordinate
//! system. Values are carried by each [`CoordinateSystem`](crate::CoordinateSystem)
//! instead of living in process-wide state.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_CROSS_LENGTH, MIN_VECTOR_LENGTH};
use crate::errors::Result;

/// Thresholds used to reject degenerate geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryTolerance {
    /// Shortest accepted length for s0, s1 and m2
    pub min_vector_length: f64,
    /// Smallest accepted sine of the angle between s0 and s1
    pub min_cross_length: f64,
    /// Zeta values with magnitude at or below this make the linearised inverse undefined
    pub min_zeta: f64,
}

impl Default for GeometryTolerance {
    fn default() -> Self {
        Self {
            min_vector_length: MIN_VECTOR_LENGTH,
            min_cross_length: MIN_CROSS_LENGTH,
            min_zeta: 0.0,
        }
    }
}

impl GeometryTolerance {
    /// Parse tolerances from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the zeta threshold of the linearised inverse
    pub fn with_min_zeta(mut self, min_zeta: f64) -> Self {
        self.min_zeta = min_zeta;
        self
    }
}
