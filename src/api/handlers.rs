//! HTTP request handlers for the leave engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveSummary, LeaveType, LeaveTypeDetails, SalaryBreakdown};
use crate::rules::calculate_salary;

use super::request::{LeaveSummaryRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave-types", get(leave_types_handler))
        .route("/leave-summary", post(leave_summary_handler))
        .route("/salary", post(salary_handler))
        .with_state(state)
}

/// Handler for GET /leave-types.
///
/// Lists every leave type with its policy, requirements and restrictions.
async fn leave_types_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.engine().catalog();
    let details: Vec<LeaveTypeDetails> = LeaveType::ALL
        .iter()
        .map(|leave_type| catalog.details(*leave_type))
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(details),
    )
}

/// Handler for POST /leave-summary.
///
/// Resolves the employee from the roster, evaluates the request and returns
/// the full summary. Validation failures are reported inside the summary,
/// not as an HTTP error.
async fn leave_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_summary(&state, request) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %summary.request.employee.id,
                leave_type = %summary.request.leave_type,
                days = summary.request.days,
                errors = summary.validation.errors.len(),
                approval_levels = summary.approval_process.total_levels,
                duration_us = start_time.elapsed().as_micros(),
                "Leave summary generated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err, "Leave summary failed"),
    }
}

/// Handler for POST /salary.
///
/// Computes leave pay for a type and day count. The daily salary comes from
/// the body or, failing that, from the roster entry of `employee_id`.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match compute_salary(&state, &request) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                leave_type = %request.leave_type,
                days = request.days,
                total_salary = %breakdown.total_salary,
                "Salary calculated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err, "Salary calculation failed"),
    }
}

fn build_summary(state: &AppState, request: LeaveSummaryRequest) -> EngineResult<LeaveSummary> {
    let employee = state.config().find_employee(&request.employee)?.employee.clone();
    let submitted_on = request
        .submitted_on
        .unwrap_or_else(|| Utc::now().date_naive());

    let leave_request = LeaveRequest::new(
        employee,
        request.leave_type,
        request.start_date,
        request.end_date,
        request.reason,
        submitted_on,
    )?;

    Ok(state.engine().generate_leave_summary(&leave_request))
}

fn compute_salary(state: &AppState, request: &SalaryRequest) -> EngineResult<SalaryBreakdown> {
    let policy = state.engine().catalog().lookup(&request.leave_type)?;

    let daily_salary = match (request.daily_salary, request.employee_id.as_deref()) {
        (Some(salary), _) => salary,
        (None, Some(employee_id)) => {
            state
                .config()
                .daily_salary(employee_id)?
                .ok_or_else(|| EngineError::InvalidRequest {
                    field: "daily_salary".to_string(),
                    message: format!("no daily salary on record for {}", employee_id),
                })?
        }
        (None, None) => {
            return Err(EngineError::InvalidRequest {
                field: "daily_salary".to_string(),
                message: "either daily_salary or employee_id is required".to_string(),
            });
        }
    };

    calculate_salary(policy, request.days, daily_salary)
}

fn error_response(correlation_id: Uuid, err: EngineError, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
