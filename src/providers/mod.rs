mod google;
mod prompt;

pub use google::GeminiProvider;
pub use prompt::{build_recipe_prompt, RECIPE_PROMPT};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GenerationError;

/// Seam between the orchestrator and a schema-constrained text generation service
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send `prompt` with the JSON `schema` the answer must follow and return
    /// the raw response text.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, GenerationError>;
}
