//! HTTP provider backed by the third-party allergen API.

use super::{AllergenLookup, LookupError};
use crate::types::LookupResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default upstream allergen API endpoint.
pub const DEFAULT_API_URL: &str = "https://task.cover360.co.in/api/allergens";

/// Allergen API provider.
#[derive(Debug)]
pub struct RemoteLookup {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteLookup {
    /// Create a new RemoteLookup posting to the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

/// Allergen API request format.
#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    ingredient: &'a str,
}

/// Allergen API response format. Absent or unknown fields deserialize to
/// their defaults, so a response without `success: true` is treated as a
/// failed lookup.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    allergens: Vec<String>,
}

#[async_trait]
impl AllergenLookup for RemoteLookup {
    async fn lookup(&self, ingredient: &str) -> Result<LookupResult, LookupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&LookupRequest { ingredient })
            .send()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        if status != 200 {
            return Err(LookupError::ApiError {
                status,
                message: body,
            });
        }

        let parsed: LookupResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::ParseError(e.to_string()))?;

        Ok(LookupResult {
            ingredient: ingredient.to_string(),
            success: parsed.success,
            allergens: parsed.allergens,
        })
    }

    fn provider_name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_mean_failure() {
        let parsed: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
        assert!(parsed.allergens.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed: LookupResponse = serde_json::from_str(
            r#"{"success": true, "ingredient": "milk", "allergens": ["dairy"], "extra": 1}"#,
        )
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.allergens, vec!["dairy"]);
    }
}
