use log::{debug, error, info, warn};
use tokio::sync::watch;

use crate::config::ChefConfig;
use crate::error::{ChefError, GenerationError, GENERATION_FAILED_MESSAGE};
use crate::ingredients::IngredientSet;
use crate::model::Recipe;
use crate::providers::{build_recipe_prompt, GeminiProvider, RecipeProvider};
use crate::schema::recipe_response_schema;

/// Where the current generation stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Loading,
    Success(Recipe),
    Error(String),
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading)
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            GenerationState::Success(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Turns an ingredient set into a recipe through a [`RecipeProvider`].
///
/// State changes are published on a watch channel so a presentation layer
/// can follow `Idle -> Loading -> Success | Error` as it happens. At most
/// one request is in flight at a time: `generate` is ignored while the
/// state is `Loading`.
pub struct RecipeOrchestrator {
    provider: Box<dyn RecipeProvider>,
    state: watch::Sender<GenerationState>,
}

impl RecipeOrchestrator {
    pub fn new(provider: Box<dyn RecipeProvider>) -> Self {
        let (state, _) = watch::channel(GenerationState::Idle);
        Self { provider, state }
    }

    /// Build an orchestrator backed by Gemini.
    ///
    /// Fails with [`ChefError::MissingApiKey`] when no credential is configured.
    pub fn from_config(config: &ChefConfig) -> Result<Self, ChefError> {
        let provider = GeminiProvider::new(&config.gemini)?;
        info!("Using {} model {}", provider.provider_name(), config.gemini.model);
        Ok(Self::new(Box::new(provider)))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GenerationState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state.subscribe()
    }

    /// Whether the generate control should be enabled.
    pub fn can_generate(&self, ingredients: &IngredientSet) -> bool {
        !ingredients.is_empty() && !self.state.borrow().is_loading()
    }

    /// Return to `Idle`, dropping any recipe or error. Ignored while loading.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            if state.is_loading() || *state == GenerationState::Idle {
                return false;
            }
            *state = GenerationState::Idle;
            true
        });
    }

    /// Generate a recipe from `ingredients` and return the resulting state.
    ///
    /// If a request is already in flight this returns `Loading` without
    /// doing anything. An empty set moves straight to the validation error
    /// and issues no request.
    pub async fn generate(&self, ingredients: &IngredientSet) -> GenerationState {
        let mut entered = GenerationState::Loading;
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            if ingredients.is_empty() {
                entered = GenerationState::Error(ChefError::Validation.user_message());
            }
            *state = entered.clone();
            true
        });

        if !started {
            debug!("Generation already in flight, ignoring request");
            return GenerationState::Loading;
        }
        if !entered.is_loading() {
            return entered;
        }

        let in_flight = InFlight::new(&self.state);
        let next = match self.request_recipe(ingredients).await {
            Ok(recipe) => {
                info!("Generated recipe '{}'", recipe.name);
                GenerationState::Success(recipe)
            }
            Err(e) => {
                error!(
                    "Error generating recipe with {}: {}",
                    self.provider.provider_name(),
                    e
                );
                GenerationState::Error(ChefError::from(e).user_message())
            }
        };

        in_flight.finish(next.clone());
        next
    }

    async fn request_recipe(&self, ingredients: &IngredientSet) -> Result<Recipe, GenerationError> {
        let prompt = build_recipe_prompt(ingredients);
        debug!("Requesting recipe for: {}", ingredients.enumerate());

        let text = self
            .provider
            .generate(&prompt, &recipe_response_schema())
            .await?;

        Recipe::from_json(&text)
    }
}

/// Leaves `Loading` when a `generate` future is dropped before it finishes,
/// so an abandoned request never blocks the next one.
struct InFlight<'a> {
    state: &'a watch::Sender<GenerationState>,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<GenerationState>) -> Self {
        Self {
            state,
            finished: false,
        }
    }

    fn finish(mut self, next: GenerationState) {
        self.finished = true;
        self.state.send_replace(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Generation abandoned before the service answered");
            self.state
                .send_replace(GenerationState::Error(GENERATION_FAILED_MESSAGE.to_string()));
        }
    }
}
