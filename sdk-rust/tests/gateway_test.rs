use fridge_chef_sdk::{
    mock::{MockBackend, MockImageResult},
    ContentPart, FridgeImage, GatewayError, GeneratedImage, GenerationError, GenerationGateway,
    Locale, UserPreferences, CREDENTIALS_MESSAGE, IMAGE_MODEL, MAX_IMAGE_BYTES, TEXT_MODEL,
};
use std::sync::Arc;

fn gateway() -> (Arc<MockBackend>, GenerationGateway) {
    let backend = Arc::new(MockBackend::new());
    let gateway = GenerationGateway::new(backend.clone());
    (backend, gateway)
}

fn credentials_error() -> GenerationError {
    GenerationError::StatusCode(
        reqwest::StatusCode::BAD_REQUEST,
        "API key not valid. Please pass a valid API key.".to_string(),
    )
}

fn service_error() -> GenerationError {
    GenerationError::StatusCode(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        "internal error".to_string(),
    )
}

#[tokio::test]
async fn analyze_sends_image_and_prompt_as_json_request() {
    let (backend, gateway) = gateway();
    backend.enqueue_content("```json\n[\"eggs\", \"milk\"]\n```");

    let ingredients = gateway
        .analyze_refrigerator_image(&FridgeImage::from_base64("aGVsbG8="), Locale::Th)
        .await
        .expect("analysis succeeds");

    assert_eq!(ingredients, vec!["eggs".to_string(), "milk".to_string()]);

    let requests = backend.tracked_content_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, TEXT_MODEL);
    assert_eq!(request.response_mime_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.parts[0],
        ContentPart::InlineData {
            mime_type: "image/jpeg".to_string(),
            data: "aGVsbG8=".to_string(),
        }
    );
    assert!(request.prompt_text().contains("in Thai"));
}

#[tokio::test]
async fn analyze_returns_empty_list_when_no_json_is_found() {
    let (backend, gateway) = gateway();
    backend.enqueue_content("no ingredients found");

    let ingredients = gateway
        .analyze_refrigerator_image(&FridgeImage::from_base64("aGVsbG8="), Locale::En)
        .await
        .expect("unparseable replies are not errors");

    assert!(ingredients.is_empty());
}

#[tokio::test]
async fn analyze_maps_service_errors_to_generic_message() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(service_error());

    let error = gateway
        .analyze_refrigerator_image(&FridgeImage::from_base64("aGVsbG8="), Locale::En)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        GatewayError::ImageAnalysis(
            "Failed to analyze refrigerator image. Please ensure the API key is correctly configured and the image is valid.".to_string()
        )
    );
}

#[tokio::test]
async fn analyze_rejects_oversized_images_without_calling_backend() {
    let (backend, gateway) = gateway();
    let image = FridgeImage::from_bytes(&vec![0_u8; MAX_IMAGE_BYTES + 3], "image/jpeg");

    let error = gateway
        .analyze_refrigerator_image(&image, Locale::En)
        .await
        .unwrap_err();

    assert!(matches!(error, GatewayError::ImageAnalysis(_)));
    assert!(backend.tracked_content_requests().is_empty());
}

#[tokio::test]
async fn credential_failures_surface_dedicated_message_for_every_operation() {
    let (backend, gateway) = gateway();
    backend
        .enqueue_content(credentials_error())
        .enqueue_content(credentials_error())
        .enqueue_content(GenerationError::InvalidInput(
            "API key is not configured".to_string(),
        ))
        .enqueue_images(MockImageResult::error(credentials_error()));

    let analysis = gateway
        .analyze_refrigerator_image(&FridgeImage::from_base64("aGVsbG8="), Locale::En)
        .await
        .unwrap_err();
    let menu = gateway
        .generate_personalized_menu(&[], &UserPreferences::default(), Locale::En)
        .await
        .unwrap_err();
    let recipe = gateway
        .generate_recipe("Congee", &[], Locale::En)
        .await
        .unwrap_err();
    let image = gateway.generate_meal_image("Congee").await.unwrap_err();

    assert_eq!(
        analysis,
        GatewayError::ImageAnalysis(CREDENTIALS_MESSAGE.to_string())
    );
    assert_eq!(
        menu,
        GatewayError::MenuGeneration(CREDENTIALS_MESSAGE.to_string())
    );
    assert_eq!(
        recipe,
        GatewayError::RecipeGeneration(CREDENTIALS_MESSAGE.to_string())
    );
    assert_eq!(
        image,
        GatewayError::ImageGeneration(CREDENTIALS_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn menu_parses_meals_from_prose() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(
        r#"Here are some ideas: [{"name": "Egg Custard", "description": "Soft and gentle.", "mainIngredients": ["eggs", "milk"]}] Enjoy!"#,
    );

    let meals = gateway
        .generate_personalized_menu(
            &["eggs".to_string(), "milk".to_string()],
            &UserPreferences::form_defaults(),
            Locale::En,
        )
        .await
        .expect("menu succeeds");

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name, "Egg Custard");
    assert_eq!(meals[0].main_ingredients, vec!["eggs", "milk"]);

    let prompt = backend.tracked_content_requests()[0].prompt_text();
    assert!(prompt.contains("Emphasize Easy to chew, High protein."));
}

#[tokio::test]
async fn menu_returns_empty_list_for_wrong_shape() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(r#"{"message": "I cannot help with that"}"#);

    let meals = gateway
        .generate_personalized_menu(&[], &UserPreferences::default(), Locale::En)
        .await
        .expect("wrong shape is not an error");

    assert!(meals.is_empty());
}

#[tokio::test]
async fn menu_maps_service_errors() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(service_error());

    let error = gateway
        .generate_personalized_menu(&[], &UserPreferences::default(), Locale::En)
        .await
        .unwrap_err();

    assert_eq!(error.user_message(), "Failed to generate personalized menu.");
}

#[tokio::test]
async fn recipe_is_absent_when_reply_has_no_object() {
    let (backend, gateway) = gateway();
    backend.enqueue_content("Sorry, I could not come up with a recipe.");

    let recipe = gateway
        .generate_recipe("Congee", &["rice".to_string()], Locale::En)
        .await
        .expect("absent recipe is not an error");

    assert_eq!(recipe, None);
}

#[tokio::test]
async fn recipe_is_parsed_and_can_take_an_image() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(
        r#"{"mealName": "Congee", "ingredients": [{"name": "rice", "quantity": "1/2 cup"}], "instructions": ["Rinse rice.", "Simmer for 30 minutes."], "prepTime": "5 minutes", "cookTime": "30 minutes", "nutritionalInfo": {"calories": "approx. 200 kcal"}, "servingSuggestion": "Serve warm."}"#,
    );

    let recipe = gateway
        .generate_recipe("Congee", &["rice".to_string()], Locale::En)
        .await
        .expect("recipe succeeds")
        .expect("recipe present");

    assert_eq!(recipe.instructions.len(), 2);
    assert_eq!(recipe.serving_suggestion.as_deref(), Some("Serve warm."));

    let recipe = recipe.with_image_url("data:image/jpeg;base64,AAAA");
    assert_eq!(recipe.image_url.as_deref(), Some("data:image/jpeg;base64,AAAA"));
}

#[tokio::test]
async fn recipe_with_numeric_quantities_is_still_shown() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(
        r#"{"mealName": "Egg custard", "ingredients": [{"name": "eggs", "quantity": 2}, {"name": "salt", "quantity": "a pinch"}, {"name": "milk"}], "instructions": ["Whisk.", "Steam."], "prepTime": "5 minutes", "cookTime": "12 minutes"}"#,
    );

    let recipe = gateway
        .generate_recipe("Egg custard", &["eggs".to_string()], Locale::En)
        .await
        .expect("recipe succeeds")
        .expect("recipe present");

    let quantities: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.quantity.as_str())
        .collect();
    assert_eq!(quantities, vec!["2", "a pinch", ""]);
}

#[tokio::test]
async fn recipe_maps_service_errors() {
    let (backend, gateway) = gateway();
    backend.enqueue_content(service_error());

    let error = gateway
        .generate_recipe("Congee", &[], Locale::Th)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        GatewayError::RecipeGeneration("Failed to generate recipe.".to_string())
    );
}

#[tokio::test]
async fn meal_image_is_wrapped_as_data_uri() {
    let (backend, gateway) = gateway();
    backend.enqueue_images(MockImageResult::jpeg("/9j/4AAQ"));

    let uri = gateway
        .generate_meal_image("Egg Custard")
        .await
        .expect("image succeeds");

    assert_eq!(uri, "data:image/jpeg;base64,/9j/4AAQ");

    let requests = backend.tracked_image_requests();
    assert_eq!(requests[0].model, IMAGE_MODEL);
    assert_eq!(requests[0].number_of_images, 1);
    assert_eq!(requests[0].output_mime_type, "image/jpeg");
    assert!(requests[0].prompt.contains("\"Egg Custard\""));
}

#[tokio::test]
async fn meal_image_without_bytes_is_an_error() {
    let (backend, gateway) = gateway();
    backend
        .enqueue_images(vec![GeneratedImage::default()])
        .enqueue_images(Vec::<GeneratedImage>::new())
        .enqueue_images(MockImageResult::error(service_error()));

    for _ in 0..3 {
        let error = gateway.generate_meal_image("Egg Custard").await.unwrap_err();
        assert_eq!(
            error,
            GatewayError::ImageGeneration("Failed to generate image for Egg Custard.".to_string())
        );
    }
}

#[tokio::test]
async fn custom_models_are_used() {
    let (backend, gateway) = gateway();
    let gateway = gateway
        .with_text_model("gemini-2.5-flash")
        .with_image_model("imagen-4.0-generate-001");
    backend.enqueue_content("[]");
    backend.enqueue_images(MockImageResult::jpeg("AAAA"));

    gateway
        .generate_personalized_menu(&[], &UserPreferences::default(), Locale::En)
        .await
        .expect("menu succeeds");
    gateway.generate_meal_image("Soup").await.expect("image succeeds");

    assert_eq!(backend.tracked_content_requests()[0].model, "gemini-2.5-flash");
    assert_eq!(backend.tracked_image_requests()[0].model, "imagen-4.0-generate-001");
}
