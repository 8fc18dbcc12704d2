pub mod allergens;
pub mod testing;
pub mod upload;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure envelope the frontend expects from the upload and relay endpoints:
/// `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FailureEnvelope {
    pub success: bool,
    pub message: String,
}

impl FailureEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Returns the router for all endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload::upload))
        .route("/api/allergens", post(allergens::relay))
        .route("/api/ping", get(testing::ping))
}

/// Generate the OpenAPI spec
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(upload::upload, allergens::relay, testing::ping),
        components(schemas(
            ErrorResponse,
            FailureEnvelope,
            upload::UploadRequest,
            upload::UploadResponse,
            upload::ParsedRecipe,
            allergens::AllergenRequest,
            testing::PingResponse,
        ))
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}
