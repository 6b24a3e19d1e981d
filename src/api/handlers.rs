use super::models::{LeaderboardResponse, StatusResponse};
use super::AppState;
use crate::players::{QUERY_TIMEOUT, TOP_LIMIT};
use axum::{extract::State, http::StatusCode, response::Json};

pub const FETCH_ERROR: &str = "Error fetching top players";
pub const PROCESS_ERROR: &str = "Error processing players";

/// ANY / — liveness payload, never fails
pub async fn status() -> Json<StatusResponse> {
    tracing::info!("Got request for /");
    Json(StatusResponse::ok())
}

/// GET /list-top/10 — the ten richest players, best first
///
/// Failures are reported to the client as a fixed message; the cause is only
/// logged.
pub async fn list_top(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, (StatusCode, &'static str)> {
    match state.players.top_players(TOP_LIMIT, QUERY_TIMEOUT).await {
        Ok(result) => {
            tracing::info!(count = result.len(), "Got request for /list-top/10");
            Ok(Json(LeaderboardResponse { result }))
        }
        Err(e) => {
            let message = if e.is_query_failure() {
                FETCH_ERROR
            } else {
                PROCESS_ERROR
            };
            tracing::error!(error = %e, "{}", message);
            Err((StatusCode::INTERNAL_SERVER_ERROR, message))
        }
    }
}
