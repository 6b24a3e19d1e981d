use super::{handlers, AppState};
use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the router: `/` answers any method, the leaderboard is GET only.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::status))
        .route("/list-top/10", get(handlers::list_top))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
