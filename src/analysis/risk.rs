//! Risk Classification
//!
//! Rolling battery averages, per-employee risk status and department energy.

use serde::{Deserialize, Serialize};

use crate::roster::HistoryPoint;

/// Number of most recent readings in the rolling average
pub const ROLLING_WINDOW: usize = 3;

/// Below this rolling battery an employee is high risk
pub const HIGH_RISK_BELOW: u32 = 30;

/// Below this rolling battery an employee should be monitored
pub const MONITOR_BELOW: u32 = 60;

/// Energy reported for a department with no members
pub const EMPTY_DEPARTMENT_ENERGY: u32 = 100;

/// Categorical risk label, serialized with the display names the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "High Risk")]
    HighRisk,
    Monitor,
    #[serde(alias = "Stable")]
    Normal,
}

impl RiskStatus {
    /// Classify a rolling battery average
    pub fn classify(avg_battery: u32) -> Self {
        if avg_battery < HIGH_RISK_BELOW {
            RiskStatus::HighRisk
        } else if avg_battery < MONITOR_BELOW {
            RiskStatus::Monitor
        } else {
            RiskStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::HighRisk => "High Risk",
            RiskStatus::Monitor => "Monitor",
            RiskStatus::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Truncating mean of the last [`ROLLING_WINDOW`] battery readings.
/// An empty timeline reads as a full battery.
pub fn rolling_battery(timeline: &[HistoryPoint]) -> u32 {
    let recent = &timeline[timeline.len().saturating_sub(ROLLING_WINDOW)..];
    if recent.is_empty() {
        return EMPTY_DEPARTMENT_ENERGY;
    }

    let sum: u32 = recent.iter().map(|p| u32::from(p.battery)).sum();
    sum / recent.len() as u32
}

/// Truncating mean energy per tracked department, in `tracked` order.
///
/// `members` yields `(department, avg_battery)` pairs. Departments that are
/// not tracked are ignored; tracked departments without members report
/// [`EMPTY_DEPARTMENT_ENERGY`].
pub fn department_energy<'a, I>(members: I, tracked: &[String]) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut totals = vec![(0u32, 0u32); tracked.len()];

    for (dept, battery) in members {
        if let Some(idx) = tracked.iter().position(|t| t == dept) {
            totals[idx].0 += battery;
            totals[idx].1 += 1;
        }
    }

    tracked
        .iter()
        .zip(totals)
        .map(|(name, (total, count))| {
            let energy = if count > 0 {
                total / count
            } else {
                EMPTY_DEPARTMENT_ENERGY
            };
            (name.clone(), energy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(batteries: &[u8]) -> Vec<HistoryPoint> {
        batteries
            .iter()
            .enumerate()
            .map(|(i, b)| HistoryPoint {
                day: format!("2024-01-{:02}", i + 1),
                battery: *b,
                sentiment: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(RiskStatus::classify(0), RiskStatus::HighRisk);
        assert_eq!(RiskStatus::classify(29), RiskStatus::HighRisk);
        assert_eq!(RiskStatus::classify(30), RiskStatus::Monitor);
        assert_eq!(RiskStatus::classify(59), RiskStatus::Monitor);
        assert_eq!(RiskStatus::classify(60), RiskStatus::Normal);
        assert_eq!(RiskStatus::classify(100), RiskStatus::Normal);
    }

    #[test]
    fn test_risk_wire_names() {
        assert_eq!(
            serde_json::to_string(&RiskStatus::HighRisk).unwrap(),
            "\"High Risk\""
        );
        let legacy: RiskStatus = serde_json::from_str("\"Stable\"").unwrap();
        assert_eq!(legacy, RiskStatus::Normal);
        assert_eq!(RiskStatus::Monitor.to_string(), "Monitor");
    }

    #[test]
    fn test_rolling_battery_uses_last_three() {
        assert_eq!(rolling_battery(&points(&[90, 90, 10, 20, 31])), 20);
        assert_eq!(rolling_battery(&points(&[50, 51])), 50);
        assert_eq!(rolling_battery(&[]), 100);
    }

    #[test]
    fn test_department_energy() {
        let tracked = vec![
            "Engineering".to_string(),
            "Design".to_string(),
            "Sales".to_string(),
        ];
        let members = vec![
            ("Engineering", 40),
            ("Engineering", 45),
            ("Product", 10),
            ("Sales", 70),
        ];

        let energy = department_energy(members, &tracked);
        assert_eq!(
            energy,
            vec![
                ("Engineering".to_string(), 42),
                ("Design".to_string(), 100),
                ("Sales".to_string(), 70),
            ]
        );
    }
}
