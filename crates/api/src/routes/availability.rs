//! Route definitions for the availability checks.

use axum::routing::post;
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Routes mounted directly under `/api/v1`.
///
/// ```text
/// POST   /check-username   -> check_username_availability
/// POST   /check-slug       -> check_slug_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/check-username",
            post(availability::check_username_availability),
        )
        .route("/check-slug", post(availability::check_slug_availability))
}
