//! # MoodSense
//!
//! Workforce mood check-ins and an HR aggregate dashboard, served over a
//! small JSON API. The browser client lives in the `moodsense-ui` crate.
//!
//! ## Modules
//!
//! - [`vibe`]: Check-in vocabulary (mood scale, pressure sources)
//! - [`roster`]: In-memory employee records with seeded history
//! - [`analysis`]: Driver detection, sentiment, risk and department energy
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moodsense::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!     let state = AppState::from_config(config.clone());
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod roster;
pub mod vibe;

pub use analysis::{
    build_dashboard, department_energy, detect_drivers, merge_drivers, rolling_battery,
    sentiment, DashboardReport, DepartmentEnergy, EmployeeSummary, RiskStatus,
};

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{ApiConfig, Config, ConfigError, ConfigLoad, LoggingConfig, RosterConfig};

pub use roster::{EmployeeId, EmployeeRecord, HistoryPoint, Roster, RosterError, Score};

pub use vibe::{is_known_mood, MOOD_SCALE, NEUTRAL_MOOD, NO_PRESSURE, PRESSURE_SOURCES};
