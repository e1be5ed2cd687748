//! Route definitions for the `/shipping` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shipping;
use crate::state::AppState;

/// Routes mounted at `/shipping`.
///
/// ```text
/// POST   /validate   -> validate_address
/// GET    /rules      -> get_rules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(shipping::validate_address))
        .route("/rules", get(shipping::get_rules))
}
