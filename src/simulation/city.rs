//! City that ties the intersections and the central server together
//!
//! This is the entry point for running the signal simulation tick by tick.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::intersection::SimIntersection;
use super::report::TickReport;
use super::server::CentralServer;
use super::types::{Direction, IntersectionId, SystemMode, Vehicle, VehicleId, VehicleType};

/// Rates used when generating random arrivals each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficConfig {
    /// Chance per road per tick that a vehicle arrives
    pub arrival_rate: f64,
    /// Chance that an arriving vehicle is an emergency vehicle
    pub emergency_rate: f64,
    /// Chance per road per tick of a pedestrian request
    pub pedestrian_rate: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 0.0,
            emergency_rate: 0.05,
            pedestrian_rate: 0.0,
        }
    }
}

impl TrafficConfig {
    /// Check that every rate is a probability
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("arrival rate", self.arrival_rate),
            ("emergency rate", self.emergency_rate),
            ("pedestrian rate", self.pedestrian_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                bail!("{name} must be between 0 and 1, got {rate}");
            }
        }
        Ok(())
    }
}

/// A set of intersections monitored by one central server
pub struct SimCity {
    /// Intersections in construction order; ids run from 1
    pub intersections: Vec<SimIntersection>,

    pub server: CentralServer,

    mode: SystemMode,

    /// Ticks run so far
    tick: u64,

    /// Next vehicle ID to assign
    next_vehicle_id: usize,

    /// Optional seeded RNG for reproducible traffic
    rng: Option<StdRng>,
}

impl SimCity {
    fn new_internal(count: usize, rng: Option<StdRng>) -> Self {
        Self {
            intersections: (1..=count)
                .map(|id| SimIntersection::new(IntersectionId(id)))
                .collect(),
            server: CentralServer::new(),
            mode: SystemMode::Automatic,
            tick: 0,
            next_vehicle_id: 1,
            rng,
        }
    }

    /// Create a city with `count` empty intersections
    pub fn new(count: usize) -> Self {
        Self::new_internal(count, None)
    }

    /// Create a city whose random traffic is reproducible
    pub fn new_with_seed(count: usize, seed: u64) -> Self {
        Self::new_internal(count, Some(StdRng::seed_from_u64(seed)))
    }

    pub fn mode(&self) -> SystemMode {
        self.mode
    }

    /// Switch between automatic and manual operation
    ///
    /// `EmergencyOverride` is managed by the city itself and is treated like
    /// `Automatic` when set here.
    pub fn set_mode(&mut self, mode: SystemMode) {
        self.mode = match mode {
            SystemMode::EmergencyOverride => SystemMode::Automatic,
            other => other,
        };
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn intersection(&self, id: IntersectionId) -> Result<&SimIntersection> {
        self.intersections
            .iter()
            .find(|intersection| intersection.id == id)
            .with_context(|| format!("Intersection {id} not found"))
    }

    pub fn intersection_mut(&mut self, id: IntersectionId) -> Result<&mut SimIntersection> {
        self.intersections
            .iter_mut()
            .find(|intersection| intersection.id == id)
            .with_context(|| format!("Intersection {id} not found"))
    }

    fn next_vehicle(&mut self, vehicle_type: VehicleType) -> Vehicle {
        let id = VehicleId(self.next_vehicle_id);
        self.next_vehicle_id += 1;
        Vehicle::new(id, vehicle_type)
    }

    /// Queue a new vehicle on one road of an intersection
    pub fn add_vehicle(
        &mut self,
        intersection: IntersectionId,
        direction: Direction,
        vehicle_type: VehicleType,
    ) -> Result<VehicleId> {
        // Look up first so a bad id doesn't consume a vehicle id
        self.intersection(intersection)?;
        let vehicle = self.next_vehicle(vehicle_type);
        self.intersection_mut(intersection)?
            .add_vehicle(direction, vehicle);
        Ok(vehicle.id)
    }

    pub fn request_pedestrian(
        &mut self,
        intersection: IntersectionId,
        direction: Direction,
    ) -> Result<()> {
        self.intersection_mut(intersection)?
            .request_pedestrian(direction);
        Ok(())
    }

    pub fn set_accident(
        &mut self,
        intersection: IntersectionId,
        direction: Direction,
        status: bool,
    ) -> Result<()> {
        self.intersection_mut(intersection)?
            .set_accident(direction, status);
        Ok(())
    }

    /// Load the fixed demo scenario: an ambulance heading north into
    /// intersection 1, two cars on the east road of intersection 2, and a car
    /// plus a waiting pedestrian on the north road of intersection 3.
    pub fn populate_demo_traffic(&mut self) -> Result<()> {
        if self.intersections.len() < 3 {
            bail!(
                "Demo traffic needs at least 3 intersections, city has {}",
                self.intersections.len()
            );
        }

        self.add_vehicle(IntersectionId(1), Direction::South, VehicleType::Emergency)?;
        self.add_vehicle(IntersectionId(2), Direction::East, VehicleType::Normal)?;
        self.add_vehicle(IntersectionId(2), Direction::East, VehicleType::Normal)?;
        self.add_vehicle(IntersectionId(3), Direction::North, VehicleType::Normal)?;
        self.request_pedestrian(IntersectionId(3), Direction::North)?;
        Ok(())
    }

    /// Draw a probability, using seeded RNG if available
    fn random_bool(&mut self, probability: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(probability),
            None => rand::rng().random_bool(probability),
        }
    }

    /// Generate random arrivals and pedestrian requests on every road
    ///
    /// Returns the number of vehicles added.
    pub fn spawn_random_traffic(&mut self, config: &TrafficConfig) -> Result<usize> {
        config.validate()?;

        let mut spawned = 0;
        for index in 0..self.intersections.len() {
            for direction in Direction::ALL {
                if self.random_bool(config.arrival_rate) {
                    let vehicle_type = if self.random_bool(config.emergency_rate) {
                        VehicleType::Emergency
                    } else {
                        VehicleType::Normal
                    };
                    let vehicle = self.next_vehicle(vehicle_type);
                    self.intersections[index].add_vehicle(direction, vehicle);
                    spawned += 1;
                }
                if self.random_bool(config.pedestrian_rate) {
                    self.intersections[index].request_pedestrian(direction);
                }
            }
        }

        debug!("Spawned {spawned} vehicles");
        Ok(spawned)
    }

    /// Run one tick: emergency monitoring, then one cycle per intersection in
    /// construction order. In manual mode only the monitor runs.
    pub fn run_tick(&mut self) -> TickReport {
        self.tick += 1;

        let alerts = self.server.monitor(&self.intersections);
        if self.mode != SystemMode::Manual {
            self.mode = if alerts.is_empty() {
                SystemMode::Automatic
            } else {
                SystemMode::EmergencyOverride
            };
        }

        let cycles = if self.mode == SystemMode::Manual {
            Vec::new()
        } else {
            self.intersections
                .iter_mut()
                .map(|intersection| (intersection.id, intersection.simulate_cycle()))
                .collect()
        };

        info!(
            "Tick {} complete ({}): {} alerts, {} cycles",
            self.tick,
            self.mode,
            alerts.len(),
            cycles.len()
        );

        TickReport {
            tick: self.tick,
            mode: self.mode,
            alerts,
            cycles,
        }
    }

    /// Total vehicles currently queued across the city
    pub fn queued_vehicles(&self) -> usize {
        self.intersections
            .iter()
            .flat_map(|intersection| intersection.roads())
            .map(|road| road.density())
            .sum()
    }
}
