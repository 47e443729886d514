//! Data-parallel construction of coordinate systems
//!
//! Prediction builds one coordinate system per reflection. Each is independent
//! and immutable, so a batch is built across the rayon thread pool without
//! synchronisation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GeometryTolerance;
use crate::errors::Result;
use crate::frame::CoordinateSystem;
use crate::geometry::Vec3;

/// Raw geometry of one diffraction event, as supplied by upstream prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventGeometry {
    /// Rotation axis
    pub m2: Vec3,
    /// Incident beam vector
    pub s0: Vec3,
    /// Diffracted beam vector
    pub s1: Vec3,
    /// Rotation angle in radians
    pub phi: f64,
}

impl EventGeometry {
    /// Build the coordinate system of this event
    pub fn coordinate_system(&self, tolerance: GeometryTolerance) -> Result<CoordinateSystem> {
        CoordinateSystem::with_tolerance(self.m2, self.s0, self.s1, self.phi, tolerance)
    }
}

/// Build one coordinate system per event, in input order
///
/// Degenerate events yield an `Err` in their slot; the rest of the batch is
/// unaffected.
pub fn build_coordinate_systems(
    events: &[EventGeometry],
    tolerance: &GeometryTolerance,
) -> Vec<Result<CoordinateSystem>> {
    let tolerance = *tolerance;
    let systems: Vec<_> = events
        .par_iter()
        .map(|event| event.coordinate_system(tolerance))
        .collect();

    let rejected = systems.iter().filter(|cs| cs.is_err()).count();
    if rejected > 0 {
        log::debug!(
            "{} of {} events have degenerate geometry",
            rejected,
            events.len()
        );
    }
    systems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEG2RAD;
    use crate::errors::ReflexionBasisError;
    use crate::frame::coordinate_system::tests::{M2, S0, S1};

    fn events(n: usize) -> Vec<EventGeometry> {
        (0..n)
            .map(|i| {
                let phi = i as f64 * 0.1 * DEG2RAD;
                let s1 = Vec3::from(S1)
                    .rotate_around(&Vec3::from(S0), i as f64 * 0.01)
                    .unwrap();
                EventGeometry {
                    m2: M2.into(),
                    s0: S0.into(),
                    s1,
                    phi,
                }
            })
            .collect()
    }

    #[test]
    fn test_order_is_preserved() {
        let batch = events(500);
        let systems = build_coordinate_systems(&batch, &GeometryTolerance::default());
        assert_eq!(systems.len(), batch.len());

        for (event, cs) in batch.iter().zip(&systems) {
            let cs = cs.as_ref().unwrap();
            assert_eq!(cs.phi(), event.phi);
            assert_eq!(cs.s1(), event.s1);
            assert_eq!(*cs, event.coordinate_system(GeometryTolerance::default()).unwrap());
        }
    }

    #[test]
    fn test_degenerate_events_are_isolated() {
        let mut batch = events(10);
        batch[4].s1 = batch[4].s0;
        let systems = build_coordinate_systems(&batch, &GeometryTolerance::default());

        for (i, cs) in systems.iter().enumerate() {
            if i == 4 {
                assert!(matches!(cs, Err(ReflexionBasisError::DegenerateGeometry(_))));
            } else {
                assert!(cs.is_ok());
            }
        }
    }

    #[test]
    fn test_events_from_json() {
        let json = r#"[{"m2": {"x": 1.0, "y": 0.0, "z": 0.0},
                        "s0": {"x": 0.0, "y": 0.0, "z": 1.0},
                        "s1": {"x": 0.0, "y": 0.6, "z": 0.8},
                        "phi": 0.25}]"#;
        let batch: Vec<EventGeometry> = serde_json::from_str(json).unwrap();
        let systems = build_coordinate_systems(&batch, &GeometryTolerance::default());
        let cs = systems[0].as_ref().unwrap();
        assert_eq!(cs.phi(), 0.25);
        assert!((cs.zeta().abs() - 1.0).abs() < 1e-12);
    }
}
