//! City-wide emergency monitoring

use std::fmt;

use log::warn;

use super::controller::SignalStrategy;
use super::intersection::SimIntersection;
use super::types::IntersectionId;

/// Raised when an intersection holds an emergency vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenWaveAlert {
    pub intersection: IntersectionId,
}

impl fmt::Display for GreenWaveAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Emergency detected at intersection {} -> GREEN WAVE ACTIVATED",
            self.intersection
        )
    }
}

/// Polls intersections for emergencies before each round of cycles
///
/// Purely observational: alerts are broadcast outward and nothing is fed
/// back into the signal decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralServer;

impl CentralServer {
    pub fn new() -> Self {
        Self
    }

    pub fn monitor<S: SignalStrategy>(
        &self,
        intersections: &[SimIntersection<S>],
    ) -> Vec<GreenWaveAlert> {
        intersections
            .iter()
            .filter(|intersection| intersection.has_emergency_vehicle())
            .map(|intersection| {
                let alert = GreenWaveAlert {
                    intersection: intersection.id,
                };
                warn!("{alert}");
                alert
            })
            .collect()
    }
}
