//! Constants and configuration shared across the tracker.

pub mod config;
pub mod constants;

pub use config::TrackerConfig;
pub use constants::*;
