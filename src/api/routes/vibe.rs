//! Vibe Routes
//!
//! - POST /api/submit-vibe - Record a mood check-in for the active user

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::analysis::analyze_checkin;
use crate::api::dto::{SubmitVibeRequest, SubmitVibeResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::vibe::is_known_mood;

/// POST /api/submit-vibe
///
/// Scores the notes, merges detected drivers with the selected pressure
/// source and appends the result to the active user's record.
pub async fn submit_vibe(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitVibeRequest>, JsonRejection>,
) -> ApiResult<Json<SubmitVibeResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let battery = validate_request(&req)?;

    let today = chrono::Local::now().date_naive();
    let score = analyze_checkin(
        today,
        &req.mood,
        battery,
        &req.vent_text,
        &req.pressure_source,
    );
    let drivers = score.drivers.clone();

    let employee_id = state.config.roster.active_employee_id;
    state.roster.write().await.record_score(employee_id, score)?;

    tracing::info!(
        employee_id,
        battery,
        drivers = ?drivers,
        "Recorded check-in"
    );

    Ok(Json(SubmitVibeResponse {
        status: "success".to_string(),
        drivers,
    }))
}

/// Validate a check-in, returning the battery as a checked 0-100 value
fn validate_request(req: &SubmitVibeRequest) -> ApiResult<u8> {
    if !is_known_mood(&req.mood) {
        return Err(ApiError::Validation(format!(
            "unknown mood '{}'",
            req.mood
        )));
    }

    u8::try_from(req.battery)
        .ok()
        .filter(|b| *b <= 100)
        .ok_or_else(|| {
            ApiError::Validation(format!(
                "battery must be between 0 and 100, got {}",
                req.battery
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mood: &str, battery: i64) -> SubmitVibeRequest {
        SubmitVibeRequest {
            mood: mood.to_string(),
            battery,
            vent_text: String::new(),
            pressure_source: "All Good".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert_eq!(validate_request(&request("😐", 0)).unwrap(), 0);
        assert_eq!(validate_request(&request("🔥", 100)).unwrap(), 100);
    }

    #[test]
    fn test_validate_rejects_battery_out_of_range() {
        assert!(validate_request(&request("😐", -1)).is_err());
        assert!(validate_request(&request("😐", 101)).is_err());
        assert!(validate_request(&request("😐", 300)).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_mood() {
        let err = validate_request(&request("🙃", 50)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
