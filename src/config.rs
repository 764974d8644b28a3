use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChefConfig {
    /// Settings for the Gemini generation service
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Configuration for the Gemini provider
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Model identifier (e.g., "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL for the API endpoint (for proxies or tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sampling temperature; the service default is used when unset
    pub temperature: Option<f32>,
    /// Request timeout in seconds; no local timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: None,
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key: config first, then `GEMINI_API_KEY`, then `API_KEY`.
    ///
    /// A blank value at any source counts as unset and falls through to the next.
    pub fn resolve_api_key(&self) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| std::env::var("GEMINI_API_KEY").ok().filter(present))
            .or_else(|| std::env::var("API_KEY").ok().filter(present))
    }
}

// Default value functions
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY_CHEF__GEMINI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("PANTRY_CHEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
