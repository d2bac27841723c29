//! Core roster types
//!
//! - `EmployeeRecord`: one employee with history and live scores
//! - `HistoryPoint`: a single day's battery/sentiment reading
//! - `Score`: a submitted check-in after analysis

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique employee identifier
pub type EmployeeId = u32;

/// Number of seeded days per employee
pub const HISTORY_DAYS: i64 = 7;

/// A single day's energy reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    /// Day stamp, `YYYY-MM-DD`
    pub day: String,
    /// Battery level, 0-100
    pub battery: u8,
    /// Sentiment polarity, -1.0 to 1.0
    pub sentiment: f64,
}

/// A check-in that has been scored and stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub day: String,
    pub mood: String,
    pub battery: u8,
    pub vent: String,
    pub sentiment: f64,
    pub drivers: Vec<String>,
}

impl Score {
    /// The reading this score contributes to the trend line
    pub fn as_history_point(&self) -> HistoryPoint {
        HistoryPoint {
            day: self.day.clone(),
            battery: self.battery,
            sentiment: self.sentiment,
        }
    }
}

/// An employee as held by the server
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub dept: String,
    pub history: Vec<HistoryPoint>,
    pub scores: Vec<Score>,
}

impl EmployeeRecord {
    /// Create an employee with no history
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        role: impl Into<String>,
        dept: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            dept: dept.into(),
            history: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Builder method: set the seeded history
    pub fn with_history(mut self, history: Vec<HistoryPoint>) -> Self {
        self.history = history;
        self
    }

    /// Seeded history followed by live scores, oldest first
    pub fn timeline(&self) -> Vec<HistoryPoint> {
        self.history
            .iter()
            .cloned()
            .chain(self.scores.iter().map(Score::as_history_point))
            .collect()
    }

    /// Drivers from the most recent score, empty if none
    pub fn latest_drivers(&self) -> Vec<String> {
        self.scores
            .last()
            .map(|s| s.drivers.clone())
            .unwrap_or_default()
    }
}

/// Generate one reading per day for the week ending the day before `today`.
///
/// Battery is uniform in 20..=90, sentiment uniform in -0.5..0.8.
pub fn generate_history(today: NaiveDate, rng: &mut impl Rng) -> Vec<HistoryPoint> {
    let start = today - Duration::days(HISTORY_DAYS);
    (0..HISTORY_DAYS)
        .map(|i| HistoryPoint {
            day: (start + Duration::days(i)).format("%Y-%m-%d").to_string(),
            battery: rng.gen_range(20..=90),
            sentiment: rng.gen_range(-0.5..0.8),
        })
        .collect()
}
