//! A single approach road and the signal it shows

use super::types::{Direction, SignalState, Vehicle};

/// One of the four roads feeding an intersection
#[derive(Debug, Clone)]
pub struct SimRoad {
    pub direction: Direction,
    /// Queued vehicles in arrival order
    vehicles: Vec<Vehicle>,
    accident: bool,
    pedestrian: bool,
    /// Cycles since this road last got a green
    wait_time: u32,
    signal: SignalState,
}

impl SimRoad {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            vehicles: Vec::new(),
            accident: false,
            pedestrian: false,
            wait_time: 0,
            signal: SignalState::Red,
        }
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of vehicles currently queued
    pub fn density(&self) -> usize {
        self.vehicles.len()
    }

    pub fn has_emergency(&self) -> bool {
        self.vehicles.iter().any(Vehicle::is_emergency)
    }

    pub fn set_accident(&mut self, status: bool) {
        self.accident = status;
    }

    pub fn has_accident(&self) -> bool {
        self.accident
    }

    pub fn request_pedestrian(&mut self) {
        self.pedestrian = true;
    }

    pub fn has_pedestrian(&self) -> bool {
        self.pedestrian
    }

    pub fn increment_wait(&mut self) {
        self.wait_time += 1;
    }

    pub fn wait_time(&self) -> u32 {
        self.wait_time
    }

    pub fn signal(&self) -> SignalState {
        self.signal
    }

    /// Only the owning intersection drives the signal, so no caller outside
    /// the crate can put a road into `Yellow`.
    pub(crate) fn set_signal(&mut self, state: SignalState) {
        self.signal = state;
    }

    /// Clear the queue, the pedestrian request and the wait counter after the
    /// road has been served. The accident flag and signal are left alone.
    pub fn reset_cycle(&mut self) {
        self.vehicles.clear();
        self.pedestrian = false;
        self.wait_time = 0;
    }
}
