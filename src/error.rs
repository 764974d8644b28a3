use thiserror::Error;

/// Shown when generation is triggered with no ingredients.
pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Please add at least one ingredient.";

/// Shown for every failed generation, whatever the underlying cause.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate recipe. The model might be busy. Please try again later.";

/// Underlying cause of a failed recipe generation.
///
/// These are logged for diagnostics only; users always see
/// [`GENERATION_FAILED_MESSAGE`].
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request never produced a response (connect, timeout, body read)
    #[error("Request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code
    #[error("Generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered 2xx but with an error payload
    #[error("Generation service error ({code}): {message}")]
    Api { code: i64, message: String },

    /// The response carried no candidate text
    #[error("No recipe text in generation response")]
    MissingContent,

    /// The candidate text was not valid JSON
    #[error("Recipe text is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The JSON did not have the recipe shape
    #[error("Invalid recipe format: {0}")]
    InvalidShape(String),
}

/// Errors surfaced by the crate's public API
#[derive(Error, Debug)]
pub enum ChefError {
    /// The ingredient set was empty when generation was requested
    #[error("{}", EMPTY_INGREDIENTS_MESSAGE)]
    Validation,

    /// Anything between building the request and parsing the recipe failed
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    Generation(#[from] GenerationError),

    /// No API key in configuration or environment
    #[error("API key not found in config or environment (set PANTRY_CHEF__GEMINI__API_KEY, GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
}

impl ChefError {
    /// Text suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            ChefError::Validation => EMPTY_INGREDIENTS_MESSAGE.to_string(),
            ChefError::Generation(_) => GENERATION_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_hides_cause() {
        let err = ChefError::from(GenerationError::Api {
            code: 503,
            message: "overloaded".to_string(),
        });
        assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
        assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(
            ChefError::Validation.user_message(),
            "Please add at least one ingredient."
        );
    }

    #[test]
    fn test_cause_is_kept_for_logging() {
        let err = GenerationError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Generation service returned HTTP 500: boom");
    }
}
