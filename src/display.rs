use crate::ingredients::IngredientSet;
use crate::model::Recipe;
use crate::orchestrator::GenerationState;

/// Render a recipe as a plain-text card.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = format!(
        "{}\n{}\n",
        recipe.name,
        "=".repeat(recipe.name.chars().count())
    );
    if !recipe.description.is_empty() {
        out.push_str(&format!("{}\n", recipe.description));
    }

    out.push_str(&format!(
        "\nPrep Time: {}\nCook Time: {}\nServings:  {}\n",
        recipe.prep_time, recipe.cook_time, recipe.servings
    ));

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  • {} - {}\n", ingredient.name, ingredient.quantity));
    }

    out.push_str("\nInstructions\n");
    for (index, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    out
}

/// Render the ingredient chips, e.g. "[Tomatoes] [Onion]".
pub fn render_ingredients(ingredients: &IngredientSet) -> String {
    ingredients
        .iter()
        .map(|item| format!("[{}]", item))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render whatever the current generation state should show.
pub fn render_state(state: &GenerationState) -> String {
    match state {
        GenerationState::Idle => {
            "Your recipe awaits!\nAdd your ingredients and generate a recipe to get started.\n"
                .to_string()
        }
        GenerationState::Loading => {
            "Finding the perfect recipe...\nThis might take a moment.\n".to_string()
        }
        GenerationState::Success(recipe) => render_recipe(recipe),
        GenerationState::Error(message) => format!("Oops! {}\n", message),
    }
}
