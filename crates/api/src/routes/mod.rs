pub mod health;
pub mod interviews;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /interviews                       list, create
/// /interviews/{mock_id}             get (session view), delete
/// /interviews/{mock_id}/answers     submit answer (score + persist)
/// /interviews/{mock_id}/feedback    feedback view (aggregated ratings)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/interviews", interviews::router())
}
