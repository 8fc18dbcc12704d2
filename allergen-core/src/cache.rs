//! Session-scoped memo cache for allergen lookup results.
//!
//! Keys are exact ingredient strings (case- and whitespace-sensitive). Entries
//! are written once and never evicted or invalidated for the life of the
//! session, including across batch re-imports.

use std::collections::HashMap;

use crate::types::LookupResult;

/// In-memory cache mapping ingredient name -> lookup result.
///
/// Write-once per key: a second insert for the same key is ignored, so the
/// cache can never hold two different values for one ingredient.
#[derive(Debug, Default)]
pub struct IngredientCache {
    entries: HashMap<String, LookupResult>,
    hits: u64,
    misses: u64,
}

impl IngredientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously resolved ingredient, recording a hit or miss.
    pub fn lookup(&mut self, ingredient: &str) -> Option<&LookupResult> {
        match self.entries.get(ingredient) {
            Some(result) => {
                self.hits += 1;
                tracing::debug!(ingredient, "ingredient cache hit");
                Some(result)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a resolved result, keyed by its ingredient name. A key that is
    /// already present keeps its original value.
    pub fn insert(&mut self, result: LookupResult) {
        self.entries
            .entry(result.ingredient.clone())
            .or_insert(result);
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.entries.contains_key(ingredient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(ingredient: &str, allergens: &[&str]) -> LookupResult {
        LookupResult {
            ingredient: ingredient.to_string(),
            success: true,
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_insert_is_write_once() {
        let mut cache = IngredientCache::new();
        cache.insert(result("flour", &["gluten"]));
        cache.insert(result("flour", &["wheat"]));

        let cached = cache.lookup("flour").unwrap();
        assert_eq!(cached.allergens, vec!["gluten"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let mut cache = IngredientCache::new();
        cache.insert(result("flour", &[]));

        assert!(cache.contains("flour"));
        assert!(!cache.contains("Flour"));
        assert!(!cache.contains(" flour"));
    }

    #[test]
    fn test_hit_miss_counters() {
        let mut cache = IngredientCache::new();
        assert!(cache.lookup("milk").is_none());

        cache.insert(result("milk", &["dairy"]));
        assert!(cache.lookup("milk").is_some());
        assert!(cache.lookup("milk").is_some());

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }
}
