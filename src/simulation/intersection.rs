//! Intersection logic for the traffic simulation
//!
//! An intersection owns its four approach roads and runs one signal decision
//! per cycle using its strategy.

use log::info;

use super::controller::{SignalController, SignalStrategy};
use super::report::{CycleReport, RoadSnapshot};
use super::road::SimRoad;
use super::types::{Direction, IntersectionId, SignalState, Vehicle};

/// A four-way signalled intersection
#[derive(Debug, Clone)]
pub struct SimIntersection<S = SignalController> {
    pub id: IntersectionId,
    /// Roads in evaluation order: North, South, East, West
    roads: [SimRoad; 4],
    strategy: S,
}

impl SimIntersection<SignalController> {
    pub fn new(id: IntersectionId) -> Self {
        Self::with_strategy(id, SignalController)
    }
}

impl<S: SignalStrategy> SimIntersection<S> {
    /// Create an intersection that decides greens with a custom strategy
    pub fn with_strategy(id: IntersectionId, strategy: S) -> Self {
        Self {
            id,
            roads: Direction::ALL.map(SimRoad::new),
            strategy,
        }
    }

    pub fn roads(&self) -> &[SimRoad] {
        &self.roads
    }

    pub fn road(&self, direction: Direction) -> &SimRoad {
        &self.roads[direction.index()]
    }

    pub fn add_vehicle(&mut self, direction: Direction, vehicle: Vehicle) {
        self.roads[direction.index()].add_vehicle(vehicle);
    }

    pub fn request_pedestrian(&mut self, direction: Direction) {
        self.roads[direction.index()].request_pedestrian();
    }

    pub fn set_accident(&mut self, direction: Direction, status: bool) {
        self.roads[direction.index()].set_accident(status);
    }

    /// True if any approach has an emergency vehicle queued
    pub fn has_emergency_vehicle(&self) -> bool {
        self.roads.iter().any(SimRoad::has_emergency)
    }

    /// Run one decision cycle
    ///
    /// Returns `None` when every road is blocked by an accident. In that case
    /// only the wait counters move; every signal keeps its previous state.
    pub fn simulate_cycle(&mut self) -> Option<CycleReport> {
        for road in &mut self.roads {
            road.increment_wait();
        }

        let green = self.strategy.select_green_road(&self.roads)?;

        for road in &mut self.roads {
            road.set_signal(SignalState::Red);
        }
        self.roads[green].set_signal(SignalState::Green);

        let green_time = self.strategy.calculate_green_time(&self.roads[green]);
        let report = CycleReport {
            intersection: self.id,
            green_road: self.roads[green].direction,
            green_time,
            roads: self.snapshot(),
        };
        info!(
            "Intersection {}: GREEN {} for {}s",
            self.id, report.green_road, green_time
        );

        self.roads[green].reset_cycle();
        Some(report)
    }

    fn snapshot(&self) -> [RoadSnapshot; 4] {
        self.roads.each_ref().map(|road| RoadSnapshot {
            direction: road.direction,
            density: road.density(),
            signal: road.signal(),
        })
    }
}
