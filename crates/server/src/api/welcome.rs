//! Welcome endpoint.

use crate::api::health::MISC_TAG;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to Flask PostgreSQL App!";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Welcome endpoint.
#[tracing::instrument()]
#[utoipa::path(
    get,
    path = "/",
    tag = MISC_TAG,
    operation_id = "Welcome",
    summary = "Welcome message",
    responses(
        (status = 200, description = "Static welcome message", body = WelcomeResponse, content_type = "application/json",
            example = json!({"message": "Welcome to Flask PostgreSQL App!"}))
    )
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
