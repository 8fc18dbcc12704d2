use crate::api::{ErrorResponse, FailureEnvelope};
use allergen_core::{parse_spreadsheet, Recipe};
use axum::{extract::Multipart, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// One parsed recipe row (mirrors allergen_core::Recipe)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParsedRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl From<Recipe> for ParsedRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name,
            ingredients: recipe.ingredients,
        }
    }
}

/// Response from a successful spreadsheet upload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub recipes: Vec<ParsedRecipe>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content_type = "multipart/form-data", content = UploadRequest),
    responses(
        (status = 200, description = "Spreadsheet parsed into recipes", body = UploadResponse),
        (status = 400, description = "No file provided", body = ErrorResponse),
        (status = 500, description = "Unparseable spreadsheet", body = FailureEnvelope)
    )
)]
pub async fn upload(mut multipart: Multipart) -> impl IntoResponse {
    // Get the file from multipart
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Multipart read error: {}", e);
            return (
                e.status(),
                Json(ErrorResponse {
                    error: format!("Failed to read multipart data: {}", e.body_text()),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();

    // Read file data
    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            return (
                e.status(),
                Json(ErrorResponse {
                    error: format!("Failed to read file data: {}", e.body_text()),
                }),
            )
                .into_response();
        }
    };

    match parse_spreadsheet(&filename, &data) {
        Ok(recipes) => {
            tracing::info!(file = %filename, recipes = recipes.len(), "spreadsheet parsed");
            (
                StatusCode::OK,
                Json(UploadResponse {
                    success: true,
                    recipes: recipes.into_iter().map(Into::into).collect(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "failed to parse uploaded spreadsheet");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureEnvelope::new("Failed to parse spreadsheet file.")),
            )
                .into_response()
        }
    }
}
