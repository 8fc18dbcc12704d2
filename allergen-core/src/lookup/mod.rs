//! Allergen lookup provider abstraction.
//!
//! This module provides a trait-based abstraction over allergen data sources
//! (the third-party HTTP API, fakes for testing) so the processing pipeline
//! never talks to the network directly.

mod fake;
mod remote;

pub use fake::FakeLookup;
pub use remote::{RemoteLookup, DEFAULT_API_URL};

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::types::LookupResult;

/// Error type for allergen lookups.
///
/// The pipeline absorbs all of these per-ingredient: a failed lookup becomes
/// an "unrecognized" ingredient, never a hard error.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for allergen data providers.
///
/// Implementations should be stateless and thread-safe. One call resolves one
/// ingredient name; callers are expected to memoize via `IngredientCache`.
#[async_trait]
pub trait AllergenLookup: Send + Sync + fmt::Debug {
    /// Resolve the allergens for a single ingredient name.
    async fn lookup(&self, ingredient: &str) -> Result<LookupResult, LookupError>;

    /// Get the provider name (e.g., "remote", "fake").
    fn provider_name(&self) -> &'static str;
}

/// Registry of available providers.
///
/// Use environment variables to configure:
/// - ALLERGEN_PROVIDER: "remote" | "fake"
/// - ALLERGEN_API_URL: endpoint for the remote provider
pub fn create_provider_from_env() -> Result<Box<dyn AllergenLookup>, LookupError> {
    let provider = std::env::var("ALLERGEN_PROVIDER").unwrap_or_else(|_| "remote".to_string());

    match provider.as_str() {
        "remote" => {
            let endpoint = std::env::var("ALLERGEN_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
            Ok(Box::new(RemoteLookup::new(endpoint)))
        }
        "fake" => Ok(Box::new(FakeLookup::new())),
        other => Err(LookupError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
