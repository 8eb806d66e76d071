//! Simulation configuration.

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Shortest run length a victory can take, in seconds
    pub min_run_seconds: u32,

    /// Longest run length a victory can take, in seconds
    pub max_run_seconds: u32,

    /// World level reported at run end
    pub world_level: u32,

    /// Chance per second that the player is hit
    pub hit_chance: f64,

    /// Chance that a kill was a critical hit
    pub crit_chance: f64,

    /// Upper bound on kills per simulated second
    pub max_kills_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            seed: None,
            min_run_seconds: 300,
            max_run_seconds: 900,
            world_level: 1,
            hit_chance: 0.05,
            crit_chance: 0.15,
            max_kills_per_second: 4,
        }
    }
}

impl SimConfig {
    /// Quick config for a deterministic batch
    pub fn seeded(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
