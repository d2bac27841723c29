//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::roster::Roster;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Employee records and their check-in scores
    pub roster: Arc<RwLock<Roster>>,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an existing roster
    pub fn new(roster: Roster, config: Config) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create state with the seeded demo roster.
    /// Uses `roster.seed` when configured so histories are reproducible.
    pub fn from_config(config: Config) -> Self {
        let mut rng = match config.roster.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = chrono::Local::now().date_naive();
        let roster = Roster::seeded(today, &mut rng);

        tracing::info!(employees = roster.len(), "Seeded roster");
        Self::new(roster, config)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
