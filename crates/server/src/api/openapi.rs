//! OpenAPI/Utoipa configuration.

use crate::api::health::MISC_TAG;
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PostgreSQL Health Service API",
        version = "1.0.0",
        description = "Welcome message and pooled PostgreSQL health probe."
    ),
    tags(
        (name = MISC_TAG, description = "Miscellaneous endpoints")
    )
)]
pub struct ApiDoc;
