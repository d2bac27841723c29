//! Dashboard Routes
//!
//! - GET /api/hr-dashboard - Roster with risk status plus department energy

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::analysis::build_dashboard;
use crate::api::dto::HrDashboardResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/hr-dashboard
///
/// Recomputes every employee's rolling battery and risk status from the
/// current roster. Each call returns the complete roster.
pub async fn get_hr_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HrDashboardResponse>> {
    let report = {
        let roster = state.roster.read().await;
        build_dashboard(&roster, &state.config.roster.tracked_departments)
    };

    tracing::debug!(
        employees = report.employees.len(),
        departments = report.departments.len(),
        "Built HR dashboard"
    );

    Ok(Json(HrDashboardResponse {
        employees: report.employees,
        department_data: report.departments,
    }))
}
