//! Instruction text for each generation task.
//!
//! Preference terms are always rendered in English so the model reasons over
//! a consistent vocabulary; only the requested output values follow the
//! locale.

use crate::{Locale, NutritionalFocus, UserPreferences};

const MENU_INGREDIENTS_FALLBACK: &str = "Assorted common pantry items";
const RECIPE_INGREDIENTS_FALLBACK: &str = "common pantry items";
const NOT_SPECIFIED: &str = "None specified";
const FOCUS_FALLBACK: &str = "general well-being";

/// Example reply embedded in the menu prompt.
pub const MENU_EXAMPLE_JSON: &str = r#"[
  {
    "name": "Baked Salmon with Steamed Asparagus",
    "description": "A heart-healthy meal rich in omega-3s and vitamins. Salmon is soft and easy to eat.",
    "mainIngredients": ["salmon fillet", "asparagus", "lemon", "olive oil"]
  }
]"#;

/// Shape of the recipe object the recipe prompt asks for.
pub const RECIPE_EXAMPLE_JSON: &str = r#"{
  "mealName": "Name of the Meal",
  "ingredients": [
    { "name": "Ingredient Name", "quantity": "e.g., 1 cup, 200g, 1 tbsp, to taste" }
  ],
  "instructions": [
    "Step 1: ...",
    "Step 2: ..."
  ],
  "prepTime": "e.g., 15 minutes",
  "cookTime": "e.g., 20 minutes",
  "nutritionalInfo": {
    "calories": "approx. XXX kcal",
    "protein": "approx. XXg",
    "fiber": "approx. Xg",
    "calcium": "approx. XXmg",
    "vitaminD": "approx. Xmcg (or IU)",
    "sodium": "approx. XXmg"
  },
  "servingSuggestion": "Optional: A brief suggestion on how to serve the meal or variations."
}"#;

/// The prompt a language directive is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTask {
    IngredientRecognition,
    MenuSuggestion,
    Recipe,
}

/// Clause asking for output in the active locale. Empty for English.
#[must_use]
pub fn language_directive(task: PromptTask, locale: Locale) -> &'static str {
    match (locale, task) {
        (Locale::En, _) => "",
        (Locale::Th, PromptTask::IngredientRecognition) => {
            "The strings in the array should be in Thai. (สตริงในอาร์เรย์ควรเป็นภาษาไทย)"
        }
        (Locale::Th, PromptTask::MenuSuggestion) => {
            "All user-facing string values in the JSON (like 'name', 'description', and items in \
             'mainIngredients') should be in Thai. (ค่าสตริงที่ผู้ใช้เห็นทั้งหมดใน JSON เช่น 'name', \
             'description', และรายการใน 'mainIngredients' ควรเป็นภาษาไทย)"
        }
        (Locale::Th, PromptTask::Recipe) => {
            "All user-facing string values in the JSON (like 'mealName', ingredient 'name's, \
             'instructions', 'servingSuggestion') should be in Thai. Nutritional information keys \
             and values can remain standard. (ค่าสตริงที่ผู้ใช้เห็นทั้งหมดใน JSON เช่น 'mealName', \
             ชื่อส่วนผสม, 'instructions', 'servingSuggestion' ควรเป็นภาษาไทย \
             คีย์และค่าข้อมูลโภชนาการสามารถคงไว้ตามมาตรฐานได้)"
        }
    }
}

fn join_or(items: &[String], fallback: &str) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

/// English rendering of the selected focus keys. Keys outside the
/// vocabulary are passed through as-is.
fn nutritional_focus_english(keys: &[String]) -> Vec<String> {
    keys.iter()
        .map(|key| {
            NutritionalFocus::from_key(key)
                .map_or_else(|| key.clone(), |focus| focus.english_label().to_string())
        })
        .collect()
}

/// Drop blank lines left by an empty directive.
fn assemble(lines: &[&str]) -> String {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt sent together with the refrigerator photo.
#[must_use]
pub fn ingredient_recognition_prompt(locale: Locale) -> String {
    assemble(&[
        "Analyze this image of an opened refrigerator. List all clearly identifiable edible food ingredients.",
        "Prioritize common food items. Return the list as a JSON array of strings. For example: [\"eggs\", \"milk\", \"carrots\"].",
        language_directive(PromptTask::IngredientRecognition, locale),
        "If no ingredients are clearly identifiable or the image is not a refrigerator, return an empty array.",
    ])
}

/// Prompt asking for two or three meal suggestions.
#[must_use]
pub fn menu_suggestion_prompt(
    ingredients: &[String],
    preferences: &UserPreferences,
    locale: Locale,
) -> String {
    let available = format!(
        "Available ingredients: {}.",
        join_or(ingredients, MENU_INGREDIENTS_FALLBACK)
    );
    let health = format!(
        "- Health conditions: {}",
        join_or(&preferences.health_conditions, NOT_SPECIFIED)
    );
    let restrictions = format!(
        "- Dietary restrictions (cannot eat): {}",
        join_or(&preferences.allergies, NOT_SPECIFIED)
    );
    let focus = format!(
        "- Nutritional focus for elderly: Emphasize {}. Ensure meals are easy to digest and chew.",
        join_or(
            &nutritional_focus_english(&preferences.nutritional_focus),
            FOCUS_FALLBACK
        )
    );
    let liked = format!(
        "- Liked foods: {}",
        join_or(&preferences.liked_foods, NOT_SPECIFIED)
    );
    let disliked = format!(
        "- Disliked foods: {}",
        join_or(&preferences.disliked_foods, NOT_SPECIFIED)
    );
    let example = format!("Example (if English):\n{MENU_EXAMPLE_JSON}");

    assemble(&[
        "You are an AI personal nutritionist for elderly individuals.",
        &available,
        "User preferences:",
        &health,
        &restrictions,
        &focus,
        &liked,
        &disliked,
        "Based on the available ingredients and these preferences, suggest 2-3 simple, healthy, and appealing meal options suitable for an elderly person.",
        "For each meal, provide:",
        "1. A short, descriptive name.",
        "2. A brief description (1-2 sentences) highlighting why it's suitable for the elderly user.",
        "3. A list of main ingredients used from the available ones (or common staples if specific ones aren't listed as available).",
        "Return the suggestions as a JSON array of objects. Each object must have 'name' (string), 'description' (string), and 'mainIngredients' (array of strings) keys.",
        language_directive(PromptTask::MenuSuggestion, locale),
        &example,
        "If no suitable meals can be created, return an empty array. Ensure the output is valid JSON.",
    ])
}

/// Prompt asking for the full recipe of a chosen meal.
#[must_use]
pub fn recipe_prompt(meal_name: &str, ingredients: &[String], locale: Locale) -> String {
    let subject = format!("Generate a simple, step-by-step recipe for \"{meal_name}\".");
    let available = format!(
        "Assume the user has the following main ingredients available: {}.",
        join_or(ingredients, RECIPE_INGREDIENTS_FALLBACK)
    );
    let shape = format!(
        "Return the result as a JSON object with the following structure:\n{RECIPE_EXAMPLE_JSON}"
    );

    assemble(&[
        "You are an AI cooking assistant specialized in recipes for elderly individuals.",
        &subject,
        &available,
        "List any other common pantry staples needed (e.g., salt, pepper, oil, small amounts of herbs) if necessary.",
        "The instructions should be very clear, concise, and easy for an elderly person to follow. Use simple language and short sentences.",
        "Break down steps into small, manageable actions.",
        "Provide estimated preparation time, cooking time, and key nutritional information.",
        "For nutritional information, focus on: calories (approx.), protein (approx.), fiber (approx.), calcium (approx.), vitamin D (approx.), and sodium (approx.).",
        "If a nutrient is not significant, you can omit it or state 'low'.",
        language_directive(PromptTask::Recipe, locale),
        &shape,
        "Ensure the entire output is a single, valid JSON object.",
    ])
}

/// Image prompts are English-only; the meal name is embedded as given.
#[must_use]
pub fn meal_image_prompt(meal_name: &str) -> String {
    format!(
        "A clear, appetizing, well-lit photo of \"{meal_name}\". Healthy home-cooked style. Focus on the food."
    )
}
