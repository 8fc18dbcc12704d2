//! Recipe processing pipeline.
//!
//! Resolves every ingredient of one recipe to its allergen status, through
//! the session cache, and derives a per-recipe report.

use crate::cache::IngredientCache;
use crate::lookup::AllergenLookup;
use crate::types::{IngredientReport, LookupResult, Recipe, RecipeReport};

/// Process one recipe into a report.
///
/// Ingredients are resolved strictly sequentially, in recipe order, one
/// lookup in flight at a time, so cache writes from earlier ingredients are
/// visible to later ones. A failed lookup is absorbed: the synthesized
/// failure result is cached and the ingredient is reported as unrecognized.
/// This function itself never fails.
///
/// Side effect: additive writes to `cache` for every previously unseen
/// ingredient name.
pub async fn process_recipe(
    recipe: &Recipe,
    cache: &mut IngredientCache,
    lookup: &dyn AllergenLookup,
) -> RecipeReport {
    let mut ingredients = Vec::with_capacity(recipe.ingredients.len());

    for name in &recipe.ingredients {
        let result = match cache.lookup(name).cloned() {
            Some(cached) => cached,
            None => {
                let resolved = match lookup.lookup(name).await {
                    Ok(resolved) => resolved,
                    Err(e) => {
                        tracing::warn!(
                            ingredient = %name,
                            provider = lookup.provider_name(),
                            error = %e,
                            "allergen lookup failed, marking ingredient unrecognized"
                        );
                        LookupResult::failed(name)
                    }
                };
                cache.insert(resolved.clone());
                resolved
            }
        };

        ingredients.push(derive_report(name, &result));
    }

    RecipeReport {
        name: recipe.name.clone(),
        ingredients,
    }
}

/// Derive the report entry for one ingredient from its lookup result.
fn derive_report(name: &str, result: &LookupResult) -> IngredientReport {
    if result.success && !result.allergens.is_empty() {
        IngredientReport {
            name: name.to_string(),
            warning: Some(format!("{} contains {}", name, result.allergens.join(", "))),
            allergens: result.allergens.clone(),
            unrecognized: false,
        }
    } else {
        IngredientReport {
            name: name.to_string(),
            allergens: Vec::new(),
            unrecognized: !result.success,
            warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_joins_allergens() {
        let result = LookupResult {
            ingredient: "flour".to_string(),
            success: true,
            allergens: vec!["gluten".to_string(), "wheat".to_string()],
        };
        let report = derive_report("flour", &result);
        assert_eq!(report.warning.as_deref(), Some("flour contains gluten, wheat"));
        assert!(!report.unrecognized);
    }

    #[test]
    fn test_failed_result_is_unrecognized() {
        let report = derive_report("mystery", &LookupResult::failed("mystery"));
        assert!(report.unrecognized);
        assert!(report.allergens.is_empty());
        assert!(report.warning.is_none());
    }

    #[test]
    fn test_success_without_allergens_is_safe() {
        let result = LookupResult {
            ingredient: "water".to_string(),
            success: true,
            allergens: Vec::new(),
        };
        let report = derive_report("water", &result);
        assert!(!report.unrecognized);
        assert!(report.allergens.is_empty());
        assert!(report.warning.is_none());
    }
}
