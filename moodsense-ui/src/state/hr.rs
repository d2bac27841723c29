//! HR Dashboard State
//!
//! Roster, department energy and the selected employee. Every refresh takes
//! a request epoch; only the response to the latest epoch is applied, so an
//! older refresh finishing late cannot overwrite newer data.

use serde::Deserialize;

use crate::api::ClientError;

/// Categorical risk label computed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "High Risk")]
    HighRisk,
    Monitor,
    #[serde(alias = "Stable")]
    Normal,
}

impl RiskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::HighRisk => "High Risk",
            RiskStatus::Monitor => "Monitor",
            RiskStatus::Normal => "Normal",
        }
    }

    /// Tailwind classes for the roster badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskStatus::HighRisk => "bg-red-100 text-red-600",
            RiskStatus::Monitor => "bg-amber-100 text-amber-600",
            RiskStatus::Normal => "bg-emerald-100 text-emerald-600",
        }
    }
}

/// One point on an employee's energy trend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPoint {
    #[serde(alias = "date")]
    pub day: String,
    pub battery: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub dept: String,
    pub avg_battery: u32,
    pub risk_status: RiskStatus,
    #[serde(default)]
    pub drivers: Vec<String>,
    #[serde(default)]
    pub history: Vec<TrendPoint>,
}

impl Employee {
    /// Weather icon for the detail header
    pub fn forecast_icon(&self) -> &'static str {
        if self.avg_battery < 40 {
            "⛈️"
        } else {
            "☀️"
        }
    }
}

/// Manager actions offered in the detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrAction {
    Kudos,
    Meeting,
}

impl HrAction {
    pub fn label(&self) -> &'static str {
        match self {
            HrAction::Kudos => "Kudos",
            HrAction::Meeting => "Meeting",
        }
    }

    /// Acknowledgment shown after the action is triggered
    pub fn acknowledgment(&self, employee: &Employee) -> String {
        format!("✅ Action Triggered: {} for {}", self.label(), employee.name)
    }
}

/// Tailwind class for a roster battery bar
pub fn roster_battery_class(avg_battery: u32) -> &'static str {
    if avg_battery < 30 {
        "bg-red-500"
    } else {
        "bg-green-500"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepartmentMetric {
    #[serde(rename = "name", alias = "dept_name")]
    pub dept_name: String,
    pub energy: f64,
}

/// Body of `GET /api/hr-dashboard`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardPayload {
    pub employees: Vec<Employee>,
    pub department_data: Vec<DepartmentMetric>,
}

/// What happened to a refresh response
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Applied,
    /// The request failed; previous data and selection were kept
    Failed(ClientError),
    /// A newer refresh was started before this one finished
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrState {
    pub employees: Vec<Employee>,
    pub departments: Vec<DepartmentMetric>,
    pub selected: Option<Employee>,
    pub loading: bool,
    latest_epoch: u64,
}

impl HrState {
    /// Start a refresh, returning its epoch
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_epoch += 1;
        self.loading = true;
        self.latest_epoch
    }

    /// Apply the result of the refresh started at `epoch`.
    ///
    /// On success both lists are replaced wholesale. A current selection is
    /// re-pointed at the fresh record with the same id; with no selection (or
    /// if the selected employee is gone) the first "High Risk" employee is
    /// picked, if any.
    pub fn apply_refresh(
        &mut self,
        epoch: u64,
        result: Result<DashboardPayload, ClientError>,
    ) -> RefreshOutcome {
        if epoch != self.latest_epoch {
            return RefreshOutcome::Stale;
        }
        self.loading = false;

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => return RefreshOutcome::Failed(err),
        };

        self.employees = payload.employees;
        self.departments = payload.department_data;

        let refreshed = self
            .selected
            .as_ref()
            .and_then(|sel| self.employees.iter().find(|e| e.id == sel.id))
            .cloned();

        self.selected = refreshed.or_else(|| self.first_high_risk().cloned());

        RefreshOutcome::Applied
    }

    /// Replace the selection with the employee `id`. Returns false if the
    /// id is not on the roster, leaving the selection untouched.
    pub fn select(&mut self, id: u32) -> bool {
        match self.employees.iter().find(|e| e.id == id) {
            Some(employee) => {
                self.selected = Some(employee.clone());
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.as_ref().map(|e| e.id == id).unwrap_or(false)
    }

    fn first_high_risk(&self) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.risk_status == RiskStatus::HighRisk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u32, name: &str, risk: RiskStatus, battery: u32) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            role: "Dev".to_string(),
            dept: "Engineering".to_string(),
            avg_battery: battery,
            risk_status: risk,
            drivers: Vec::new(),
            history: Vec::new(),
        }
    }

    fn payload(employees: Vec<Employee>) -> DashboardPayload {
        DashboardPayload {
            employees,
            department_data: vec![DepartmentMetric {
                dept_name: "Engineering".to_string(),
                energy: 48.0,
            }],
        }
    }

    fn loaded(employees: Vec<Employee>) -> HrState {
        let mut state = HrState::default();
        let epoch = state.begin_refresh();
        assert_eq!(state.apply_refresh(epoch, Ok(payload(employees))), RefreshOutcome::Applied);
        state
    }

    #[test]
    fn test_first_load_selects_high_risk() {
        let state = loaded(vec![
            employee(1, "A", RiskStatus::Normal, 80),
            employee(2, "B", RiskStatus::HighRisk, 20),
            employee(3, "C", RiskStatus::HighRisk, 10),
        ]);

        assert_eq!(state.selected.as_ref().map(|e| e.id), Some(2));
        assert!(!state.loading);
        assert_eq!(state.departments.len(), 1);
    }

    #[test]
    fn test_first_load_without_high_risk_selects_nothing() {
        let state = loaded(vec![
            employee(1, "A", RiskStatus::Normal, 80),
            employee(2, "B", RiskStatus::Monitor, 45),
        ]);

        assert!(state.selected.is_none());
    }

    #[test]
    fn test_select_replaces_entirely() {
        let mut state = loaded(vec![
            employee(1, "A", RiskStatus::HighRisk, 20),
            employee(2, "B", RiskStatus::Normal, 90),
        ]);
        assert!(state.is_selected(1));

        assert!(state.select(2));
        assert_eq!(state.selected, Some(employee(2, "B", RiskStatus::Normal, 90)));
        assert!(!state.is_selected(1));

        assert!(!state.select(99));
        assert!(state.is_selected(2));
    }

    #[test]
    fn test_failure_keeps_data_and_selection() {
        let mut state = loaded(vec![
            employee(1, "A", RiskStatus::HighRisk, 20),
            employee(2, "B", RiskStatus::Normal, 90),
        ]);
        state.select(2);
        let before_employees = state.employees.clone();
        let before_selected = state.selected.clone();

        let epoch = state.begin_refresh();
        let outcome = state.apply_refresh(epoch, Err(ClientError::Network("offline".to_string())));

        assert!(matches!(outcome, RefreshOutcome::Failed(_)));
        assert_eq!(state.employees, before_employees);
        assert_eq!(state.selected, before_selected);
        assert!(!state.loading);
    }

    #[test]
    fn test_refresh_keeps_selection_and_updates_it() {
        let mut state = loaded(vec![
            employee(1, "A", RiskStatus::HighRisk, 20),
            employee(2, "B", RiskStatus::Normal, 90),
        ]);
        state.select(2);

        let epoch = state.begin_refresh();
        state.apply_refresh(
            epoch,
            Ok(payload(vec![
                employee(1, "A", RiskStatus::HighRisk, 15),
                employee(2, "B", RiskStatus::Monitor, 50),
            ])),
        );

        let selected = state.selected.as_ref().unwrap();
        assert_eq!(selected.id, 2);
        assert_eq!(selected.avg_battery, 50);
    }

    #[test]
    fn test_refresh_drops_vanished_selection() {
        let mut state = loaded(vec![
            employee(1, "A", RiskStatus::Normal, 70),
            employee(2, "B", RiskStatus::Normal, 90),
        ]);
        state.select(2);

        let epoch = state.begin_refresh();
        state.apply_refresh(epoch, Ok(payload(vec![employee(1, "A", RiskStatus::Normal, 70)])));

        assert!(state.selected.is_none());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = HrState::default();
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        let outcome = state.apply_refresh(
            second,
            Ok(payload(vec![employee(2, "New", RiskStatus::Normal, 90)])),
        );
        assert_eq!(outcome, RefreshOutcome::Applied);

        let outcome = state.apply_refresh(
            first,
            Ok(payload(vec![employee(1, "Old", RiskStatus::HighRisk, 10)])),
        );
        assert_eq!(outcome, RefreshOutcome::Stale);
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.employees[0].name, "New");
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut state = HrState::default();
        let first = state.begin_refresh();
        let _second = state.begin_refresh();

        state.apply_refresh(first, Ok(payload(Vec::new())));
        assert!(state.loading);
    }

    #[test]
    fn test_action_acknowledgment() {
        let emp = employee(4, "Puja", RiskStatus::HighRisk, 22);
        assert_eq!(
            HrAction::Kudos.acknowledgment(&emp),
            "✅ Action Triggered: Kudos for Puja"
        );
        assert_eq!(
            HrAction::Meeting.acknowledgment(&emp),
            "✅ Action Triggered: Meeting for Puja"
        );
    }

    #[test]
    fn test_roster_battery_class() {
        assert_eq!(roster_battery_class(29), "bg-red-500");
        assert_eq!(roster_battery_class(30), "bg-green-500");
    }

    #[test]
    fn test_payload_from_api_json() {
        let json = r#"{
            "employees": [{
                "id": 4, "name": "Puja", "role": "Sales Rep", "dept": "Sales",
                "risk_status": "High Risk", "avg_battery": 22,
                "drivers": ["👉 Deadlines"],
                "history": [{"day": "2024-05-01", "battery": 30, "sentiment": 0.1},
                            {"date": "2024-05-02", "battery": 14}]
            }, {
                "id": 1, "name": "Manu", "role": "Dev", "dept": "Engineering",
                "risk_status": "Stable", "avg_battery": 75
            }],
            "department_data": [{"name": "Sales", "energy": 22}]
        }"#;

        let payload: DashboardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.employees[0].risk_status, RiskStatus::HighRisk);
        assert_eq!(payload.employees[0].history[1].day, "2024-05-02");
        assert_eq!(payload.employees[1].risk_status, RiskStatus::Normal);
        assert!(payload.employees[1].drivers.is_empty());
        assert_eq!(payload.department_data[0].dept_name, "Sales");
        assert_eq!(payload.employees[0].forecast_icon(), "⛈️");
    }
}
