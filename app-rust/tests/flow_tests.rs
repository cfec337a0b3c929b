use fridge_chef_app::{AppView, FlowError, MealPlannerFlow, RecipeImage, RecipeView};
use fridge_chef_sdk::{
    mock::{MockBackend, MockImageResult},
    FridgeImage, GatewayError, GenerationError, GenerationGateway, Locale, UserPreferences,
    CREDENTIALS_MESSAGE, MAX_IMAGE_BYTES,
};
use std::sync::Arc;

const MEALS_JSON: &str = r#"[
  {"name": "Steamed Egg Custard", "description": "Soft and gentle.", "mainIngredients": ["eggs", "milk"]},
  {"name": "Tofu Soup", "description": "Warm and light.", "mainIngredients": ["tofu"]}
]"#;

const RECIPE_JSON: &str = r#"Here is the recipe:
{
  "mealName": "Steamed Egg Custard",
  "ingredients": [{"name": "eggs", "quantity": "2"}],
  "instructions": ["Whisk.", "Steam for 12 minutes."],
  "prepTime": "5 minutes",
  "cookTime": "12 minutes",
  "nutritionalInfo": {"calories": "150 kcal", "protein": 12},
  "servingSuggestion": "Serve warm."
}"#;

fn flow(locale: Locale) -> (Arc<MockBackend>, MealPlannerFlow) {
    let backend = Arc::new(MockBackend::new());
    let gateway = GenerationGateway::new(backend.clone());
    (backend, MealPlannerFlow::new(gateway, locale))
}

fn photo() -> FridgeImage {
    FridgeImage::from_base64("aGVsbG8=")
}

fn service_error() -> GenerationError {
    GenerationError::Invariant("mock", "upstream unavailable".to_string())
}

async fn flow_at_meals() -> (Arc<MockBackend>, MealPlannerFlow) {
    let (backend, mut flow) = flow(Locale::En);
    backend
        .enqueue_content(r#"["eggs", "milk", "tofu"]"#)
        .enqueue_content(MEALS_JSON);
    flow.submit_image(&photo()).await.unwrap();
    flow.submit_preferences(UserPreferences::default())
        .await
        .unwrap();
    (backend, flow)
}

#[tokio::test]
async fn happy_path_walks_every_screen() {
    let (backend, mut flow) = flow_at_meals().await;
    backend.enqueue_content(RECIPE_JSON);
    backend.enqueue_images(MockImageResult::jpeg("anBlZw=="));

    assert_eq!(flow.view(), AppView::Meals);
    assert_eq!(flow.ingredients(), ["eggs", "milk", "tofu"]);
    assert_eq!(flow.meals().len(), 2);

    let selected = flow.select_meal(0).await.unwrap().clone();
    assert_eq!(flow.view(), AppView::Recipe);
    assert_eq!(selected.meal.name, "Steamed Egg Custard");
    assert_eq!(
        selected.image,
        RecipeImage::Ready("data:image/jpeg;base64,anBlZw==".to_string())
    );
    let RecipeView::Ready(recipe) = selected.recipe else {
        panic!("expected a recipe");
    };
    assert_eq!(
        recipe.image_url.as_deref(),
        Some("data:image/jpeg;base64,anBlZw==")
    );
    assert_eq!(recipe.nutritional_info["protein"], "12");

    let image_requests = backend.tracked_image_requests();
    assert_eq!(image_requests.len(), 1);
    assert!(image_requests[0].prompt.contains("Steamed Egg Custard"));
}

#[tokio::test]
async fn requests_carry_the_active_locale_and_ingredients() {
    let (backend, mut flow) = flow(Locale::Th);
    backend
        .enqueue_content(r#"["ไข่"]"#)
        .enqueue_content(MEALS_JSON);

    flow.submit_image(&photo()).await.unwrap();
    flow.submit_preferences(UserPreferences {
        allergies: vec!["peanuts".to_string()],
        ..Default::default()
    })
    .await
    .unwrap();

    let requests = backend.tracked_content_requests();
    assert!(requests[0].prompt_text().contains("in Thai"));
    let menu_prompt = requests[1].prompt_text();
    assert!(menu_prompt.contains("ไข่"));
    assert!(menu_prompt.contains("peanuts"));
    assert_eq!(flow.preferences().allergies, vec!["peanuts".to_string()]);
}

#[tokio::test]
async fn empty_ingredient_list_still_reaches_preferences() {
    let (backend, mut flow) = flow(Locale::En);
    backend
        .enqueue_content("I could not see anything.")
        .enqueue_content(MEALS_JSON);

    let ingredients = flow.submit_image(&photo()).await.unwrap();
    assert!(ingredients.is_empty());
    assert_eq!(flow.view(), AppView::Preferences);

    flow.submit_preferences(UserPreferences::default())
        .await
        .unwrap();
    let requests = backend.tracked_content_requests();
    assert!(requests[1]
        .prompt_text()
        .contains("Assorted common pantry items"));
}

#[tokio::test]
async fn oversized_photo_is_rejected_without_a_request() {
    let (backend, mut flow) = flow(Locale::Th);
    let image = FridgeImage::from_bytes(&vec![0_u8; MAX_IMAGE_BYTES + 1], "image/jpeg");

    let error = flow.submit_image(&image).await.unwrap_err();

    let FlowError::InvalidImage(message) = error else {
        panic!("expected an image error");
    };
    assert!(message.contains("4 MB"));
    assert!(message.contains("รูปภาพ"));
    assert_eq!(flow.view(), AppView::Upload);
    assert!(backend.tracked_content_requests().is_empty());
}

#[tokio::test]
async fn analysis_failure_shows_error_and_back_returns_to_upload() {
    let (backend, mut flow) = flow(Locale::En);
    backend.enqueue_content(service_error());

    let error = flow.submit_image(&photo()).await.unwrap_err();

    assert!(matches!(
        error,
        FlowError::Gateway(GatewayError::ImageAnalysis(_))
    ));
    assert_eq!(flow.view(), AppView::Error);
    assert!(flow
        .error()
        .unwrap()
        .starts_with("Failed to analyze refrigerator image."));

    flow.back();
    assert_eq!(flow.view(), AppView::Upload);
    assert_eq!(flow.error(), None);
}

#[tokio::test]
async fn credential_failures_surface_the_credentials_message() {
    let (backend, mut flow) = flow(Locale::En);
    backend.enqueue_content(GenerationError::InvalidInput(
        "API key is not configured".to_string(),
    ));

    flow.submit_image(&photo()).await.unwrap_err();

    assert_eq!(flow.error(), Some(CREDENTIALS_MESSAGE));
}

#[tokio::test]
async fn menu_failure_returns_to_preferences_on_back() {
    let (backend, mut flow) = flow(Locale::En);
    backend
        .enqueue_content(r#"["eggs"]"#)
        .enqueue_content(service_error());

    flow.submit_image(&photo()).await.unwrap();
    flow.submit_preferences(UserPreferences::default())
        .await
        .unwrap_err();

    assert_eq!(flow.view(), AppView::Error);
    assert_eq!(flow.error(), Some("Failed to generate personalized menu."));

    flow.back();
    assert_eq!(flow.view(), AppView::Preferences);
    assert_eq!(flow.ingredients(), ["eggs"]);
}

#[tokio::test]
async fn image_failure_keeps_the_recipe() {
    let (backend, mut flow) = flow_at_meals().await;
    backend.enqueue_content(RECIPE_JSON);
    backend.enqueue_images(service_error());

    let selected = flow.select_meal(0).await.unwrap().clone();

    assert_eq!(flow.view(), AppView::Recipe);
    assert!(matches!(selected.recipe, RecipeView::Ready(ref recipe) if recipe.image_url.is_none()));
    assert_eq!(
        selected.image,
        RecipeImage::Failed("Failed to generate image for Steamed Egg Custard.".to_string())
    );
}

#[tokio::test]
async fn unreadable_recipe_is_unavailable_and_skips_the_photo() {
    let (backend, mut flow) = flow_at_meals().await;
    backend.enqueue_content("Sorry, I cannot help with that.");

    let selected = flow.select_meal(1).await.unwrap().clone();

    assert_eq!(selected.recipe, RecipeView::Unavailable);
    assert_eq!(selected.image, RecipeImage::NotRequested);
    assert!(backend.tracked_image_requests().is_empty());
}

#[tokio::test]
async fn recipe_failure_shows_error_and_back_returns_to_meals() {
    let (backend, mut flow) = flow_at_meals().await;
    backend.enqueue_content(service_error());

    flow.select_meal(0).await.unwrap_err();

    assert_eq!(flow.view(), AppView::Error);
    assert_eq!(flow.error(), Some("Failed to generate recipe."));
    flow.back();
    assert_eq!(flow.view(), AppView::Meals);
    assert_eq!(flow.meals().len(), 2);
}

#[tokio::test]
async fn selecting_an_unknown_meal_fails_without_a_request() {
    let (backend, mut flow) = flow_at_meals().await;
    let before = backend.tracked_content_requests().len();

    let error = flow.select_meal(5).await.unwrap_err();

    assert!(matches!(error, FlowError::UnknownMeal(5)));
    assert_eq!(flow.view(), AppView::Meals);
    assert_eq!(backend.tracked_content_requests().len(), before);
}

#[tokio::test]
async fn back_from_recipe_clears_the_selection() {
    let (backend, mut flow) = flow_at_meals().await;
    backend.enqueue_content(RECIPE_JSON);
    backend.enqueue_images(MockImageResult::jpeg("anBlZw=="));
    flow.select_meal(0).await.unwrap();

    flow.back();

    assert_eq!(flow.view(), AppView::Meals);
    assert!(flow.selected().is_none());
}

#[tokio::test]
async fn reset_keeps_language_and_preferences() {
    let (_backend, mut flow) = flow_at_meals().await;
    flow.set_locale(Locale::Th);

    flow.reset();

    assert_eq!(flow.view(), AppView::Upload);
    assert!(flow.ingredients().is_empty());
    assert!(flow.meals().is_empty());
    assert_eq!(flow.locale(), Locale::Th);
    assert_eq!(flow.preferences(), &UserPreferences::default());
}

#[test]
fn new_flow_starts_on_upload_with_form_defaults() {
    let flow = MealPlannerFlow::new(
        GenerationGateway::new(Arc::new(MockBackend::new())),
        Locale::En,
    );

    assert_eq!(flow.view(), AppView::Upload);
    assert_eq!(
        flow.preferences().nutritional_focus,
        vec!["easyToChew".to_string(), "highProtein".to_string()]
    );
}
