//! Analysis
//!
//! Rule-based scoring of check-ins and aggregation for the HR dashboard:
//!
//! - [`drivers`]: keyword driver detection and manual pick merging
//! - [`sentiment`]: lexicon polarity of free-text notes
//! - [`risk`]: rolling battery, risk status, department energy
//! - [`dashboard`]: the aggregate dashboard payload

pub mod dashboard;
pub mod drivers;
pub mod risk;
pub mod sentiment;

pub use dashboard::{build_dashboard, DashboardReport, DepartmentEnergy, EmployeeSummary};
pub use drivers::{detect_drivers, merge_drivers};
pub use risk::{department_energy, rolling_battery, RiskStatus};
pub use sentiment::sentiment;

use chrono::NaiveDate;

use crate::roster::Score;

/// Score a check-in: sentiment of the notes plus the merged driver list.
pub fn analyze_checkin(
    day: NaiveDate,
    mood: &str,
    battery: u8,
    vent_text: &str,
    pressure_source: &str,
) -> Score {
    let polarity = sentiment(vent_text);
    let drivers = merge_drivers(detect_drivers(vent_text), pressure_source);

    tracing::debug!(
        sentiment = polarity,
        drivers = drivers.len(),
        "Analyzed check-in"
    );

    Score {
        day: day.format("%Y-%m-%d").to_string(),
        mood: mood.to_string(),
        battery,
        vent: vent_text.to_string(),
        sentiment: polarity,
        drivers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_checkin() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let score = analyze_checkin(day, "🌧️", 22, "Exhausted, boss wants more", "Workload");

        assert_eq!(score.day, "2024-06-01");
        assert_eq!(score.battery, 22);
        assert!(score.sentiment < 0.0);
        assert_eq!(
            score.drivers,
            vec!["👉 Workload", "🔥 Burnout", "👔 Management"]
        );
    }
}
