//! Dashboard Aggregation
//!
//! Builds the HR dashboard payload from a roster snapshot.

use serde::{Deserialize, Serialize};

use super::risk::{department_energy, rolling_battery, RiskStatus};
use crate::roster::{EmployeeId, HistoryPoint, Roster};

/// One roster row as shown on the HR dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub dept: String,
    pub risk_status: RiskStatus,
    pub avg_battery: u32,
    pub drivers: Vec<String>,
    /// Full history plus live scores, for the trend chart
    pub history: Vec<HistoryPoint>,
}

/// Aggregate energy for one department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentEnergy {
    #[serde(rename = "name", alias = "dept_name")]
    pub dept_name: String,
    pub energy: u32,
}

/// Everything the HR dashboard needs in one refresh
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub employees: Vec<EmployeeSummary>,
    pub departments: Vec<DepartmentEnergy>,
}

/// Summarize every employee and aggregate the tracked departments
pub fn build_dashboard(roster: &Roster, tracked_departments: &[String]) -> DashboardReport {
    let employees: Vec<EmployeeSummary> = roster
        .employees()
        .iter()
        .map(|record| {
            let history = record.timeline();
            let avg_battery = rolling_battery(&history);

            EmployeeSummary {
                id: record.id,
                name: record.name.clone(),
                role: record.role.clone(),
                dept: record.dept.clone(),
                risk_status: RiskStatus::classify(avg_battery),
                avg_battery,
                drivers: record.latest_drivers(),
                history,
            }
        })
        .collect();

    let departments = department_energy(
        employees.iter().map(|e| (e.dept.as_str(), e.avg_battery)),
        tracked_departments,
    )
    .into_iter()
    .map(|(dept_name, energy)| DepartmentEnergy { dept_name, energy })
    .collect();

    DashboardReport {
        employees,
        departments,
    }
}
