//! Route definitions for interviews, answers, and feedback.
//!
//! Mounted at `/interviews` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{answers, interviews};
use crate::state::AppState;

/// Interview routes.
///
/// ```text
/// GET    /                     -> list_interviews
/// POST   /                     -> create_interview
/// GET    /{mock_id}            -> get_interview
/// DELETE /{mock_id}            -> delete_interview
/// POST   /{mock_id}/answers    -> submit_answer
/// GET    /{mock_id}/feedback   -> get_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route(
            "/{mock_id}",
            get(interviews::get_interview).delete(interviews::delete_interview),
        )
        .route("/{mock_id}/answers", axum::routing::post(answers::submit_answer))
        .route("/{mock_id}/feedback", get(answers::get_feedback))
}
