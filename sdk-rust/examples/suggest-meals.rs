use dotenvy::dotenv;
use fridge_chef_sdk::{Locale, UserPreferences};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let gateway = common::get_gateway();

    let ingredients = UserPreferences::parse_list("eggs, tofu, spinach, rice, carrots");
    let preferences = UserPreferences {
        health_conditions: vec!["mild hypertension".to_string()],
        allergies: vec!["shellfish".to_string()],
        ..UserPreferences::form_defaults()
    };

    let meals = gateway
        .generate_personalized_menu(&ingredients, &preferences, Locale::En)
        .await
        .unwrap();

    println!("{meals:#?}");

    let Some(meal) = meals.first() else {
        println!("No meals suggested.");
        return;
    };

    let recipe = gateway
        .generate_recipe(&meal.name, &meal.main_ingredients, Locale::En)
        .await
        .unwrap();

    println!("{recipe:#?}");

    match gateway.generate_meal_image(&meal.name).await {
        Ok(uri) => println!("Image: {} bytes of data URI", uri.len()),
        Err(error) => eprintln!("{error}"),
    }
}
