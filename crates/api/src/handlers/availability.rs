//! Handlers for the username and slug availability checks.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use shipform_core::availability::{
    check_slug, check_username, SlugAvailability, UsernameAvailability,
};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Request body for `POST /check-username`. A missing field counts as empty.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CheckUsernameRequest {
    #[validate(length(max = 64))]
    pub username: String,
}

/// Request body for `POST /check-slug`. A missing field counts as empty.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CheckSlugRequest {
    #[validate(length(max = 128))]
    pub slug: String,
}

/// POST /api/v1/check-username
///
/// Report whether the username is free. The lookup is case-insensitive and
/// the response echoes the lowercased name.
pub async fn check_username_availability(
    body: Result<Json<CheckUsernameRequest>, JsonRejection>,
) -> AppResult<Json<UsernameAvailability>> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    body.validate()?;

    let result = check_username(&body.username);
    tracing::debug!(username = %result.username, available = result.available, "Checked username");
    Ok(Json(result))
}

/// POST /api/v1/check-slug
///
/// Report whether the slug is free, ignoring case.
pub async fn check_slug_availability(
    body: Result<Json<CheckSlugRequest>, JsonRejection>,
) -> AppResult<Json<SlugAvailability>> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    body.validate()?;

    let result = check_slug(&body.slug);
    tracing::debug!(slug = %result.slug, available = result.available, "Checked slug");
    Ok(Json(result))
}
