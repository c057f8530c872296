//! Smart Traffic Signal Library
//!
//! A turn-based traffic signal simulation that decides, every cycle, which
//! road of a four-way intersection gets the green light and for how long.

pub mod simulation;
