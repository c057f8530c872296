//! Cycle and tick outcomes handed to the presentation layer

use std::fmt;

use super::server::GreenWaveAlert;
use super::types::{Direction, IntersectionId, SignalState, SystemMode};

/// State of one road as seen right after a green decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadSnapshot {
    pub direction: Direction,
    pub density: usize,
    pub signal: SignalState,
}

/// Outcome of one intersection's decision cycle
///
/// The snapshot is taken before the winning road is reset, so the winner
/// still shows the queue it was served for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub intersection: IntersectionId,
    pub green_road: Direction,
    /// Green duration in seconds
    pub green_time: u32,
    pub roads: [RoadSnapshot; 4],
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Intersection {} ---", self.intersection)?;
        writeln!(f, "GREEN: {} | Time: {}s", self.green_road, self.green_time)?;
        writeln!(f, "{:<10}{:<10}{:<10}", "Road", "Density", "Signal")?;
        for road in &self.roads {
            writeln!(
                f,
                "{:<10}{:<10}{:<10}",
                road.direction.name(),
                road.density,
                road.signal.to_string()
            )?;
        }
        Ok(())
    }
}

/// Everything that happened during one city tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Mode the city ran this tick in
    pub mode: SystemMode,
    pub alerts: Vec<GreenWaveAlert>,
    /// One entry per intersection that ran a cycle, `None` when it had no
    /// selectable road
    pub cycles: Vec<(IntersectionId, Option<CycleReport>)>,
}

impl TickReport {
    pub fn green_wave_active(&self) -> bool {
        !self.alerts.is_empty()
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Tick {} ({}) ===", self.tick, self.mode)?;
        writeln!(f, "=== CENTRAL TRAFFIC SERVER ===")?;
        for alert in &self.alerts {
            writeln!(f, "{alert}")?;
        }
        for (id, cycle) in &self.cycles {
            match cycle {
                Some(report) => write!(f, "{report}")?,
                None => writeln!(f, "--- Intersection {id} --- no road selectable")?,
            }
        }
        Ok(())
    }
}
