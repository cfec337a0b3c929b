use dotenvy::dotenv;
use fridge_chef_sdk::{FridgeImage, Locale};
use tracing_subscriber::EnvFilter;

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .expect("usage: analyze-fridge <photo.jpg> [en|th]");
    let locale = std::env::args()
        .nth(2)
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default();

    let bytes = std::fs::read(&path).expect("failed to read photo");
    let image = FridgeImage::from_bytes(&bytes, "image/jpeg");

    let gateway = common::get_gateway();

    match gateway.analyze_refrigerator_image(&image, locale).await {
        Ok(ingredients) if ingredients.is_empty() => println!("No ingredients recognized."),
        Ok(ingredients) => {
            for ingredient in ingredients {
                println!("- {ingredient}");
            }
        }
        Err(error) => eprintln!("{error}"),
    }
}
