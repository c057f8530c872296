//! Core types for the traffic signal simulation

use std::fmt;

/// A wrapper type for intersection IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntersectionId(pub usize);

impl fmt::Display for IntersectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wrapper type for vehicle IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub usize);

/// Type of vehicle queued on a road
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    /// Regular traffic
    Normal,
    /// Ambulance, fire engine, police
    Emergency,
}

/// Priority weight of an emergency vehicle
pub const PRIORITY_EMERGENCY: u32 = 100;

/// Priority weight of a normal vehicle
pub const PRIORITY_NORMAL: u32 = 10;

/// A vehicle waiting at an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    pub fn new(id: VehicleId, vehicle_type: VehicleType) -> Self {
        Self { id, vehicle_type }
    }

    /// Priority weight of this vehicle.
    ///
    /// Not consumed by the signal controller, which only looks at whether a
    /// road holds any emergency vehicle at all.
    pub fn priority(&self) -> u32 {
        match self.vehicle_type {
            VehicleType::Emergency => PRIORITY_EMERGENCY,
            VehicleType::Normal => PRIORITY_NORMAL,
        }
    }

    pub fn is_emergency(&self) -> bool {
        self.vehicle_type == VehicleType::Emergency
    }
}

/// The approach a road takes into its intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All approaches, in the order an intersection evaluates them
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position of this approach within an intersection's roads
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signal shown to a road
///
/// `Yellow` is a valid state but no transition currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalState {
    #[default]
    Red,
    Yellow,
    Green,
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignalState::Red => "RED",
            SignalState::Yellow => "YELLOW",
            SignalState::Green => "GREEN",
        })
    }
}

/// How the city is currently driving its signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemMode {
    /// Every intersection runs one decision cycle per tick
    #[default]
    Automatic,
    /// Cycles are driven by an operator; ticks only run the emergency monitor
    Manual,
    /// A green wave is active for this tick
    EmergencyOverride,
}

impl fmt::Display for SystemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SystemMode::Automatic => "AUTOMATIC",
            SystemMode::Manual => "MANUAL",
            SystemMode::EmergencyOverride => "EMERGENCY_OVERRIDE",
        })
    }
}
