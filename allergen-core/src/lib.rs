pub mod cache;
pub mod error;
pub mod import;
pub mod lookup;
pub mod pipeline;
pub mod session;
pub mod types;

pub use cache::{CacheStats, IngredientCache};
pub use error::ImportError;
pub use import::parse_spreadsheet;
pub use lookup::{
    create_provider_from_env, AllergenLookup, FakeLookup, LookupError, RemoteLookup,
    DEFAULT_API_URL,
};
pub use pipeline::process_recipe;
pub use session::{Selection, Session, WorkflowState};
pub use types::{IngredientReport, LookupResult, Recipe, RecipeBatch, RecipeReport};
