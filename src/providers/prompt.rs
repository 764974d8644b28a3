use crate::ingredients::IngredientSet;

/// The prompt template used for recipe generation.
///
/// Loaded from `prompt.txt` at compile time using `include_str!`, so it can
/// be edited without dealing with Rust string syntax.
///
/// Contains an `{{INGREDIENTS}}` placeholder that [`build_recipe_prompt`]
/// replaces with the readable ingredient enumeration.
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

/// Injects the ingredient list into the prompt template.
pub fn build_recipe_prompt(ingredients: &IngredientSet) -> String {
    RECIPE_PROMPT.replace("{{INGREDIENTS}}", &ingredients.enumerate())
}
