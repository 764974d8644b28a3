use serde_json::{json, Value};

/// Top-level fields every generated recipe must carry.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "recipeName",
    "description",
    "prepTime",
    "cookTime",
    "servings",
    "ingredients",
    "instructions",
];

/// Response schema sent with every generation request.
///
/// Uses the OpenAPI-style type names the Gemini `responseSchema` field expects.
pub fn recipe_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipeName": {
                "type": "STRING",
                "description": "The name of the recipe."
            },
            "description": {
                "type": "STRING",
                "description": "A short, appetizing description of the dish."
            },
            "prepTime": {
                "type": "STRING",
                "description": "Preparation time, e.g., \"15 minutes\"."
            },
            "cookTime": {
                "type": "STRING",
                "description": "Cooking time, e.g., \"30 minutes\"."
            },
            "servings": {
                "type": "STRING",
                "description": "Number of servings, e.g., \"4 servings\"."
            },
            "ingredients": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "quantity": { "type": "STRING" }
                    },
                    "required": ["name", "quantity"]
                },
                "description": "A list of ingredients with their quantities."
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Step-by-step cooking instructions."
            }
        },
        "required": REQUIRED_FIELDS,
    })
}
