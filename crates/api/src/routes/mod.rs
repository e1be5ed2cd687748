pub mod availability;
pub mod health;
pub mod shipping;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /check-username         username availability (POST)
/// /check-slug             slug availability (POST)
/// /shipping/validate      evaluate an address (POST)
/// /shipping/rules         active rule configuration (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(availability::router())
        .nest("/shipping", shipping::router())
}
