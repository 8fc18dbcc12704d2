use serde::{Deserialize, Serialize};

/// One recipe row from an uploaded spreadsheet. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredient names in spreadsheet order. Duplicates are preserved.
    pub ingredients: Vec<String>,
}

/// The recipes from the most recent upload. Replaced wholesale by a new upload.
pub type RecipeBatch = Vec<Recipe>;

/// Result of one allergen lookup for one distinct ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub ingredient: String,
    pub success: bool,
    pub allergens: Vec<String>,
}

impl LookupResult {
    /// Synthesized result for a failed lookup. The ingredient stays in the
    /// cache as "unrecognized" for the rest of the session.
    pub fn failed(ingredient: &str) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            success: false,
            allergens: Vec::new(),
        }
    }
}

/// Per-ingredient entry in a recipe report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientReport {
    pub name: String,
    pub allergens: Vec<String>,
    pub unrecognized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The pipeline's output for one recipe. Recomputed on every selection change,
/// never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeReport {
    pub name: String,
    /// Same order as the recipe's ingredient list, duplicates included.
    pub ingredients: Vec<IngredientReport>,
}
