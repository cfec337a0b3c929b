use dotenvy::dotenv;
use fridge_chef_app::{
    nutrient_label, AppConfig, AppView, LanguageSettings, LocaleStore, MealPlannerFlow,
    RecipeImage, RecipeView, TranslationKey,
};
use fridge_chef_sdk::{FridgeImage, Locale, UserPreferences};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn prompt<S: LocaleStore>(settings: &LanguageSettings<S>, key: TranslationKey) -> String {
    print!("{}: ", settings.t(key, &[]));
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
    line.trim().to_string()
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .expect("usage: meal-planner <photo.jpg> [en|th]");

    let config = AppConfig::from_env().expect("invalid configuration");
    let mut settings = LanguageSettings::new(config.locale_store());
    if let Some(locale) = std::env::args().nth(2).and_then(|code| Locale::from_code(&code)) {
        settings.set_language(locale);
    }

    println!("{}", settings.t(TranslationKey::AppTitle, &[]));
    println!("{}\n", settings.t(TranslationKey::AppSubtitle, &[]));

    let mut flow = MealPlannerFlow::new(config.gateway(), settings.locale());

    let bytes = std::fs::read(&path).expect("failed to read photo");
    let image = FridgeImage::from_bytes(&bytes, "image/jpeg");

    println!("{}", settings.t(TranslationKey::AnalyzingImage, &[]));
    match flow.submit_image(&image).await {
        Ok(ingredients) if ingredients.is_empty() => {
            println!("{}", settings.t(TranslationKey::NoIngredientsDetected, &[]));
        }
        Ok(ingredients) => {
            println!(
                "{}: {}",
                settings.t(TranslationKey::DetectedIngredients, &[]),
                ingredients.join(", ")
            );
        }
        Err(error) => {
            eprintln!("{}: {error}", settings.t(TranslationKey::ErrorTitle, &[]));
            return;
        }
    }

    let mut preferences = UserPreferences::form_defaults();
    preferences.health_conditions =
        UserPreferences::parse_list(&prompt(&settings, TranslationKey::HealthConditionsLabel));
    preferences.allergies =
        UserPreferences::parse_list(&prompt(&settings, TranslationKey::AllergiesLabel));
    preferences.liked_foods =
        UserPreferences::parse_list(&prompt(&settings, TranslationKey::LikedFoodsLabel));
    preferences.disliked_foods =
        UserPreferences::parse_list(&prompt(&settings, TranslationKey::DislikedFoodsLabel));

    println!("{}", settings.t(TranslationKey::GeneratingMeals, &[]));
    let meals = match flow.submit_preferences(preferences).await {
        Ok(meals) => meals.to_vec(),
        Err(error) => {
            eprintln!("{}: {error}", settings.t(TranslationKey::ErrorTitle, &[]));
            return;
        }
    };
    if meals.is_empty() {
        println!("{}", settings.t(TranslationKey::NoMealsSuggested, &[]));
        return;
    }

    println!("\n{}", settings.t(TranslationKey::SuggestedMeals, &[]));
    for (index, meal) in meals.iter().enumerate() {
        println!("{}. {} - {}", index + 1, meal.name, meal.description);
        println!(
            "   {} {}",
            settings.t(TranslationKey::MainIngredients, &[]),
            meal.main_ingredients.join(", ")
        );
    }

    let choice = prompt(&settings, TranslationKey::ViewRecipeDetails)
        .parse::<usize>()
        .unwrap_or(1);

    println!("{}", settings.t(TranslationKey::GeneratingRecipe, &[]));
    let selected = match flow.select_meal(choice.saturating_sub(1)).await {
        Ok(selected) => selected.clone(),
        Err(error) => {
            eprintln!("{}: {error}", settings.t(TranslationKey::ErrorTitle, &[]));
            return;
        }
    };
    debug_assert_eq!(flow.view(), AppView::Recipe);

    let RecipeView::Ready(recipe) = selected.recipe else {
        println!("{}", settings.t(TranslationKey::NoRecipeAvailable, &[]));
        return;
    };
    let locale = settings.locale();

    println!("\n{}", recipe.meal_name);
    println!("{} {}", settings.t(TranslationKey::PrepTime, &[]), recipe.prep_time);
    println!("{} {}", settings.t(TranslationKey::CookTime, &[]), recipe.cook_time);

    println!("\n{}", settings.t(TranslationKey::Ingredients, &[]));
    for ingredient in &recipe.ingredients {
        println!("- {} ({})", ingredient.name, ingredient.quantity);
    }

    println!("\n{}", settings.t(TranslationKey::Instructions, &[]));
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("{}. {step}", index + 1);
    }

    if !recipe.nutritional_info.is_empty() {
        println!("\n{}", settings.t(TranslationKey::NutritionalInfoTitle, &[]));
        for (nutrient, value) in &recipe.nutritional_info {
            println!("- {}: {value}", nutrient_label(locale, nutrient));
        }
    }

    if let Some(suggestion) = &recipe.serving_suggestion {
        println!("\n{} {suggestion}", settings.t(TranslationKey::ServingSuggestion, &[]));
    }

    match selected.image {
        RecipeImage::Ready(url) => println!("\n[image: {} bytes of data URI]", url.len()),
        RecipeImage::Failed(message) => println!("\n{message}"),
        RecipeImage::NotRequested => {}
    }
}
