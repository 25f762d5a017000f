//! HTTP API module for the leave engine.
//!
//! This module exposes the rules engine over REST: the leave type catalog,
//! full leave summaries for roster employees, and leave pay calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LeaveSummaryRequest, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
