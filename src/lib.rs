pub mod config;
pub mod display;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod orchestrator;
pub mod providers;
pub mod schema;

pub use crate::config::{ChefConfig, GeminiConfig};
pub use error::{ChefError, GenerationError, EMPTY_INGREDIENTS_MESSAGE, GENERATION_FAILED_MESSAGE};
pub use ingredients::IngredientSet;
pub use model::{Recipe, RecipeIngredient};
pub use orchestrator::{GenerationState, RecipeOrchestrator};
pub use providers::{GeminiProvider, RecipeProvider};

/// Run one generation with configuration loaded from `config.toml` and the
/// environment.
///
/// Configuration problems, including a missing API key, are returned as
/// errors before any request is made. The outcome of the generation itself
/// is the final [`GenerationState`].
///
/// # Example
/// ```no_run
/// # use pantry_chef::{generate_recipe, GenerationState, IngredientSet};
/// # #[tokio::main]
/// # async fn main() -> Result<(), pantry_chef::ChefError> {
/// if let GenerationState::Success(recipe) = generate_recipe(&IngredientSet::starter()).await? {
///     println!("{}", recipe.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipe(ingredients: &IngredientSet) -> Result<GenerationState, ChefError> {
    let config = ChefConfig::load()?;
    let orchestrator = RecipeOrchestrator::from_config(&config)?;
    Ok(orchestrator.generate(ingredients).await)
}
