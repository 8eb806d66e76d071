// Persistence
pub const STORAGE_KEY: &str = "runtally_progress";
pub const SCHEMA_VERSION: u32 = 1;

// Run outcome thresholds
pub const SPEED_RUN_THRESHOLD_SECONDS: f64 = 480.0; // 8 minutes
pub const LOW_HP_FRACTION: f64 = 0.2;
