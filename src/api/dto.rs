//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::{DepartmentEnergy, EmployeeSummary};

// ============================================
// VIBE DTOs
// ============================================

/// Check-in submission
///
/// Browsers post the slider value either as a number or as its string form,
/// so `battery` accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVibeRequest {
    /// Mood symbol from the forecast scale
    pub mood: String,
    /// Self-reported energy, 0-100
    #[serde(deserialize_with = "number_or_string")]
    pub battery: i64,
    /// Free-text notes
    #[serde(default)]
    pub vent_text: String,
    /// Selected pressure source label
    #[serde(default)]
    pub pressure_source: String,
}

/// Check-in submission response
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitVibeResponse {
    /// Status: "success"
    pub status: String,
    /// Drivers recorded for this check-in
    pub drivers: Vec<String>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => return Ok(n),
        NumberOrString::Float(f) => f,
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("battery is not a number: {:?}", s)))?,
    };

    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "battery is not a finite number: {}",
            value
        )));
    }
    Ok(value.trunc() as i64)
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// HR dashboard payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HrDashboardResponse {
    pub employees: Vec<EmployeeSummary>,
    pub department_data: Vec<DepartmentEnergy>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Employees on the roster
    pub employees: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_field_names() {
        let req: SubmitVibeRequest = serde_json::from_str(
            r#"{"mood":"😐","battery":42,"ventText":"meh","pressureSource":"Team"}"#,
        )
        .unwrap();
        assert_eq!(req.battery, 42);
        assert_eq!(req.vent_text, "meh");
        assert_eq!(req.pressure_source, "Team");
    }

    #[test]
    fn test_battery_as_string() {
        let req: SubmitVibeRequest =
            serde_json::from_str(r#"{"mood":"😐","battery":"63"}"#).unwrap();
        assert_eq!(req.battery, 63);
        assert!(req.vent_text.is_empty());
        assert!(req.pressure_source.is_empty());
    }

    #[test]
    fn test_battery_garbage_rejected() {
        let result: Result<SubmitVibeRequest, _> =
            serde_json::from_str(r#"{"mood":"😐","battery":"lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_battery_non_finite_rejected() {
        for battery in ["\"NaN\"", "\"inf\"", "\"-inf\"", "\"infinity\""] {
            let json = format!(r#"{{"mood":"😐","battery":{}}}"#, battery);
            let result: Result<SubmitVibeRequest, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "accepted battery {}", battery);
        }
    }

    #[test]
    fn test_battery_fraction_truncated() {
        let req: SubmitVibeRequest =
            serde_json::from_str(r#"{"mood":"😐","battery":"41.9"}"#).unwrap();
        assert_eq!(req.battery, 41);
    }
}
