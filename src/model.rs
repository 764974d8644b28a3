use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GenerationError;

/// A generated recipe.
///
/// Field names on the wire follow the response schema (`recipeName`,
/// `prepTime`, `cookTime`) and are preserved on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "recipeName")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "prepTime", default)]
    pub prep_time: String,
    #[serde(rename = "cookTime", default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
}

impl Recipe {
    /// Parse the generation service's text payload into a recipe.
    ///
    /// The text is trimmed before parsing. A recipe is rejected unless
    /// `recipeName` is a non-empty string and both `ingredients` and
    /// `instructions` are arrays.
    pub fn from_json(text: &str) -> Result<Self, GenerationError> {
        let value: Value = serde_json::from_str(text.trim())?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, GenerationError> {
        if !value.is_object() {
            return Err(GenerationError::InvalidShape(
                "expected a JSON object".to_string(),
            ));
        }

        match value.get("recipeName").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => {}
            _ => {
                return Err(GenerationError::InvalidShape(
                    "missing or empty recipeName".to_string(),
                ))
            }
        }

        for field in ["ingredients", "instructions"] {
            if !value.get(field).is_some_and(Value::is_array) {
                return Err(GenerationError::InvalidShape(format!(
                    "{} must be an array",
                    field
                )));
            }
        }

        serde_json::from_value(value).map_err(|e| GenerationError::InvalidShape(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOUP: &str = r#"
    {
        "recipeName": "Garlic Tomato Soup",
        "description": "A cozy soup.",
        "prepTime": "10 minutes",
        "cookTime": "25 minutes",
        "servings": "4 servings",
        "ingredients": [
            {"name": "Tomatoes", "quantity": "6 large"},
            {"name": "Garlic", "quantity": "4 cloves"}
        ],
        "instructions": ["Roast the tomatoes.", "Blend with garlic."]
    }
    "#;

    #[test]
    fn test_parse_valid_recipe() {
        let recipe = Recipe::from_json(SOUP).unwrap();
        assert_eq!(recipe.name, "Garlic Tomato Soup");
        assert_eq!(recipe.prep_time, "10 minutes");
        assert_eq!(recipe.cook_time, "25 minutes");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].quantity, "4 cloves");
        assert_eq!(recipe.instructions[0], "Roast the tomatoes.");
    }

    #[test]
    fn test_field_names_pass_through() {
        let recipe = Recipe::from_json(SOUP).unwrap();
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["recipeName"], "Garlic Tomato Soup");
        assert_eq!(value["prepTime"], "10 minutes");
        assert_eq!(value["cookTime"], "25 minutes");
    }

    #[test]
    fn test_empty_lists_are_accepted() {
        let recipe =
            Recipe::from_json(r#"{"recipeName": "Air", "ingredients": [], "instructions": []}"#)
                .unwrap();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.description, "");
    }

    #[test]
    fn test_malformed_json() {
        let err = Recipe::from_json("Sorry, I can't help with that").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedJson(_)));
    }

    #[test]
    fn test_missing_instructions() {
        let err = Recipe::from_json(r#"{"recipeName": "Soup", "ingredients": []}"#).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidShape(_)));
        assert!(err.to_string().contains("instructions"));
    }

    #[test]
    fn test_instructions_not_array() {
        let err = Recipe::from_json(
            r#"{"recipeName": "Soup", "ingredients": [], "instructions": "Boil it."}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidShape(_)));
    }

    #[test]
    fn test_empty_name() {
        let err =
            Recipe::from_json(r#"{"recipeName": "", "ingredients": [], "instructions": []}"#)
                .unwrap_err();
        assert!(err.to_string().contains("recipeName"));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = Recipe::from_json("[]").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidShape(_)));
    }

    #[test]
    fn test_bad_ingredient_entry() {
        let err = Recipe::from_json(
            r#"{"recipeName": "Soup", "ingredients": ["salt"], "instructions": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidShape(_)));
    }
}
