//! Handlers for the `/shipping` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use shipform_core::address::Address;
use shipform_core::validation::outcome::ValidationOutcome;
use shipform_core::validation::shipping::ShippingRuleConfig;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/shipping/validate
///
/// Evaluate the submitted address against the active shipping rules. Both
/// valid and invalid outcomes return 200; only malformed or oversized
/// requests fail. Missing fields count as empty.
pub async fn validate_address(
    State(state): State<AppState>,
    body: Result<Json<Address>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationOutcome>>> {
    let Json(address) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    address.validate()?;

    let outcome = state.rules.evaluate(&address);

    match outcome.error() {
        None => tracing::debug!(country = ?address.country, "Address passed shipping rules"),
        Some(err) => tracing::debug!(
            country = ?address.country,
            state = %address.state,
            kind = err.kind.as_str(),
            "Address failed shipping rules"
        ),
    }

    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/shipping/rules
///
/// Return the restricted states and postal patterns currently in force.
pub async fn get_rules(State(state): State<AppState>) -> Json<DataResponse<ShippingRuleConfig>> {
    Json(DataResponse {
        data: state.rules.config().clone(),
    })
}
