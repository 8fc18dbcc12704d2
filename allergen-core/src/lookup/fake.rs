//! Fake allergen provider for testing.
//!
//! Returns deterministic per-ingredient results without network access, with
//! failure injection and a call counter so tests can assert cache behavior.

use super::{AllergenLookup, LookupError};
use crate::types::LookupResult;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// A fake allergen provider for testing.
///
/// Ingredients registered with `add_allergens` resolve successfully with that
/// allergen list; ingredients registered with `add_failure` return an error;
/// anything else resolves successfully with no allergens ("safe").
#[derive(Debug, Default)]
pub struct FakeLookup {
    allergens: HashMap<String, Vec<String>>,
    failures: HashSet<String>,
    calls: AtomicU64,
}

impl FakeLookup {
    /// Create a new FakeLookup where every ingredient is "safe".
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeLookup with one registered allergen list.
    pub fn with_allergens(ingredient: &str, allergens: &[&str]) -> Self {
        let mut provider = Self::new();
        provider.add_allergens(ingredient, allergens);
        provider
    }

    /// Register allergens for an ingredient.
    pub fn add_allergens(&mut self, ingredient: &str, allergens: &[&str]) {
        self.allergens.insert(
            ingredient.to_string(),
            allergens.iter().map(|a| a.to_string()).collect(),
        );
    }

    /// Make lookups for an ingredient fail.
    pub fn add_failure(&mut self, ingredient: &str) {
        self.failures.insert(ingredient.to_string());
    }

    /// Number of lookup calls made so far.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AllergenLookup for FakeLookup {
    async fn lookup(&self, ingredient: &str) -> Result<LookupResult, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failures.contains(ingredient) {
            return Err(LookupError::RequestFailed(format!(
                "FakeLookup: injected failure for {}",
                ingredient
            )));
        }

        let allergens = self.allergens.get(ingredient).cloned().unwrap_or_default();

        Ok(LookupResult {
            ingredient: ingredient.to_string(),
            success: true,
            allergens,
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_allergens() {
        let provider = FakeLookup::with_allergens("milk", &["dairy"]);
        let result = provider.lookup("milk").await.unwrap();
        assert!(result.success);
        assert_eq!(result.allergens, vec!["dairy"]);
    }

    #[tokio::test]
    async fn test_unregistered_ingredient_is_safe() {
        let provider = FakeLookup::new();
        let result = provider.lookup("water").await.unwrap();
        assert!(result.success);
        assert!(result.allergens.is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let mut provider = FakeLookup::new();
        provider.add_failure("mystery powder");
        assert!(provider.lookup("mystery powder").await.is_err());
    }

    #[tokio::test]
    async fn test_call_counter() {
        let provider = FakeLookup::new();
        provider.lookup("salt").await.unwrap();
        provider.lookup("pepper").await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }
}
