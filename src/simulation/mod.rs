//! Standalone traffic signal simulation
//!
//! This module contains the signal decision engine and the intersection
//! state machine, plus the city driver and central server that run them
//! tick by tick. Everything here can be exercised from tests or the console.

mod city;
mod controller;
mod intersection;
mod report;
mod road;
mod server;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use city::{SimCity, TrafficConfig};
#[allow(unused_imports)]
pub use controller::{
    SignalController, SignalStrategy, BASE_GREEN_TIME, DENSITY_WEIGHT, EMERGENCY_BONUS,
    EMERGENCY_GREEN_TIME, GREEN_TIME_PER_VEHICLE, PEDESTRIAN_BONUS, WAIT_WEIGHT,
};
pub use intersection::SimIntersection;
#[allow(unused_imports)]
pub use report::{CycleReport, RoadSnapshot, TickReport};
pub use road::SimRoad;
#[allow(unused_imports)]
pub use server::{CentralServer, GreenWaveAlert};
#[allow(unused_imports)]
pub use types::{
    Direction, IntersectionId, SignalState, SystemMode, Vehicle, VehicleId, VehicleType,
    PRIORITY_EMERGENCY, PRIORITY_NORMAL,
};
