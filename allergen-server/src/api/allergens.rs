use crate::api::FailureEnvelope;
use crate::AppState;
use axum::response::Response;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body relayed to the upstream allergen API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AllergenRequest {
    pub ingredient: String,
}

#[utoipa::path(
    post,
    path = "/api/allergens",
    tag = "allergens",
    request_body = AllergenRequest,
    responses(
        (status = 200, description = "Upstream allergen API response, returned verbatim"),
        (status = 500, description = "Upstream unreachable or returned an error", body = FailureEnvelope)
    )
)]
pub async fn relay(
    State(state): State<AppState>,
    Json(request): Json<AllergenRequest>,
) -> impl IntoResponse {
    let response = match state
        .http
        .post(&state.upstream_url)
        .json(&request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(ingredient = %request.ingredient, error = %e, "upstream allergen API unreachable");
            return external_api_error();
        }
    };

    if !response.status().is_success() {
        tracing::warn!(
            ingredient = %request.ingredient,
            status = %response.status(),
            "upstream allergen API returned an error"
        );
        return external_api_error();
    }

    match response.json::<serde_json::Value>().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::warn!(ingredient = %request.ingredient, error = %e, "unreadable upstream response body");
            external_api_error()
        }
    }
}

fn external_api_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureEnvelope::new("External API Error")),
    )
        .into_response()
}
