//! Signal decision logic
//!
//! Scores every usable road of an intersection and picks the one that gets
//! the next green, along with how long it should stay green.

use log::debug;
use ordered_float::OrderedFloat;

use super::road::SimRoad;

/// Score added per queued vehicle
pub const DENSITY_WEIGHT: f64 = 0.4;

/// Score added per cycle spent waiting
pub const WAIT_WEIGHT: f64 = 0.3;

/// Flat score bonus for a road holding an emergency vehicle
pub const EMERGENCY_BONUS: f64 = 50.0;

/// Flat score bonus for a pending pedestrian request
pub const PEDESTRIAN_BONUS: f64 = 5.0;

/// Minimum green time in seconds
pub const BASE_GREEN_TIME: u32 = 20;

/// Extra green seconds per queued vehicle
pub const GREEN_TIME_PER_VEHICLE: u32 = 2;

/// Extra green seconds when an emergency vehicle is queued
pub const EMERGENCY_GREEN_TIME: u32 = 30;

/// A policy deciding which road gets the green light
///
/// Implementations hold no per-intersection state, so one value can serve any
/// number of intersections.
pub trait SignalStrategy {
    /// Index into `roads` of the road that should turn green, or `None` when
    /// no road can be served this cycle. A returned index must be in bounds.
    fn select_green_road(&self, roads: &[SimRoad]) -> Option<usize>;

    /// How long, in seconds, the selected road stays green
    fn calculate_green_time(&self, road: &SimRoad) -> u32;
}

/// The default weighted-score controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalController;

impl SignalController {
    pub fn new() -> Self {
        Self
    }

    /// Weighted score of a road, or `None` if an accident blocks it
    pub fn score(&self, road: &SimRoad) -> Option<f64> {
        if road.has_accident() {
            return None;
        }

        let emergency = if road.has_emergency() {
            EMERGENCY_BONUS
        } else {
            0.0
        };
        let pedestrian = if road.has_pedestrian() {
            PEDESTRIAN_BONUS
        } else {
            0.0
        };

        Some(
            road.density() as f64 * DENSITY_WEIGHT
                + f64::from(road.wait_time()) * WAIT_WEIGHT
                + emergency
                + pedestrian,
        )
    }
}

impl SignalStrategy for SignalController {
    fn select_green_road(&self, roads: &[SimRoad]) -> Option<usize> {
        let mut best: Option<(usize, OrderedFloat<f64>)> = None;

        for (index, road) in roads.iter().enumerate() {
            let Some(score) = self.score(road) else {
                debug!("{} skipped: accident", road.direction);
                continue;
            };
            let score = OrderedFloat(score);
            debug!("{} scored {:.2}", road.direction, score.0);

            // Strict comparison keeps the earlier road on ties
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        best.map(|(index, _)| index)
    }

    fn calculate_green_time(&self, road: &SimRoad) -> u32 {
        let emergency = if road.has_emergency() {
            EMERGENCY_GREEN_TIME
        } else {
            0
        };
        BASE_GREEN_TIME + road.density() as u32 * GREEN_TIME_PER_VEHICLE + emergency
    }
}
