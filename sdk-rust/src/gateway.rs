use crate::{
    errors::surfaced_message,
    json_extract::{extract_json, Extraction},
    opentelemetry::{GatewayOperation, GatewaySpan},
    prompts, ContentPart, ContentRequest, FridgeImage, GatewayError, GenerationBackend,
    GenerationError, ImageRequest, Locale, Meal, Recipe, UserPreferences,
};
use std::sync::Arc;

/// Default model for the text tasks.
pub const TEXT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
/// Default model for meal photos.
pub const IMAGE_MODEL: &str = "imagen-3.0-generate-002";

const JSON_MIME_TYPE: &str = "application/json";
const IMAGE_MIME_TYPE: &str = "image/jpeg";

const IMAGE_ANALYSIS_MESSAGE: &str = "Failed to analyze refrigerator image. Please ensure the API key is correctly configured and the image is valid.";
const MENU_GENERATION_MESSAGE: &str = "Failed to generate personalized menu.";
const RECIPE_GENERATION_MESSAGE: &str = "Failed to generate recipe.";

/// Runs the four generation tasks against a backend.
///
/// Every call is independent: inputs are borrowed snapshots and nothing is
/// kept between calls. Replies that hold no usable JSON are not errors; they
/// become an empty list or an absent recipe. Only backend failures are
/// reported, as a [`GatewayError`] carrying a user-facing message.
#[derive(Clone)]
pub struct GenerationGateway {
    backend: Arc<dyn GenerationBackend>,
    text_model: String,
    image_model: String,
}

impl GenerationGateway {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            text_model: TEXT_MODEL.to_string(),
            image_model: IMAGE_MODEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    #[must_use]
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// List the edible ingredients visible in a refrigerator photo.
    pub async fn analyze_refrigerator_image(
        &self,
        image: &FridgeImage,
        locale: Locale,
    ) -> Result<Vec<String>, GatewayError> {
        let mut span = self.span(GatewayOperation::AnalyzeImage, Some(locale));

        if let Err(reason) = image.validate() {
            tracing::error!(%reason, "Refusing to analyze refrigerator image");
            return Err(GatewayError::ImageAnalysis(
                IMAGE_ANALYSIS_MESSAGE.to_string(),
            ));
        }

        let request = ContentRequest {
            model: self.text_model.clone(),
            parts: vec![
                ContentPart::InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
                ContentPart::text(prompts::ingredient_recognition_prompt(locale)),
            ],
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
        };

        let result = span
            .instrument_future(self.backend.generate_content(request))
            .await;
        let text = result.map_err(|error| {
            GatewayError::ImageAnalysis(report(
                &mut span,
                &error,
                "Error analyzing refrigerator image",
                IMAGE_ANALYSIS_MESSAGE.to_string(),
            ))
        })?;

        let ingredients = collect_list(&mut span, extract_json::<Vec<String>>(&text));
        Ok(ingredients)
    }

    /// Suggest two or three meals for the available ingredients and profile.
    pub async fn generate_personalized_menu(
        &self,
        ingredients: &[String],
        preferences: &UserPreferences,
        locale: Locale,
    ) -> Result<Vec<Meal>, GatewayError> {
        let mut span = self.span(GatewayOperation::SuggestMenu, Some(locale));

        let unknown = preferences.unknown_nutritional_focus();
        if !unknown.is_empty() {
            tracing::debug!(?unknown, "Passing unrecognized nutritional focus keys through");
        }

        let request = self.json_request(prompts::menu_suggestion_prompt(
            ingredients,
            preferences,
            locale,
        ));

        let result = span
            .instrument_future(self.backend.generate_content(request))
            .await;
        let text = result.map_err(|error| {
            GatewayError::MenuGeneration(report(
                &mut span,
                &error,
                "Error generating personalized menu",
                MENU_GENERATION_MESSAGE.to_string(),
            ))
        })?;

        let meals = collect_list(&mut span, extract_json::<Vec<Meal>>(&text));
        Ok(meals)
    }

    /// Fetch the full recipe of a meal. `None` when the reply held no recipe.
    pub async fn generate_recipe(
        &self,
        meal_name: &str,
        ingredients: &[String],
        locale: Locale,
    ) -> Result<Option<Recipe>, GatewayError> {
        let mut span = self.span(GatewayOperation::GenerateRecipe, Some(locale));

        let request = self.json_request(prompts::recipe_prompt(meal_name, ingredients, locale));

        let result = span
            .instrument_future(self.backend.generate_content(request))
            .await;
        let text = result.map_err(|error| {
            GatewayError::RecipeGeneration(report(
                &mut span,
                &error,
                "Error generating recipe",
                RECIPE_GENERATION_MESSAGE.to_string(),
            ))
        })?;

        let recipe = extract_json::<Recipe>(&text).into_option();
        span.on_extracted(usize::from(recipe.is_some()), recipe.is_some());
        if recipe.is_none() {
            tracing::warn!(meal = meal_name, "No recipe could be read from the response");
        }
        Ok(recipe)
    }

    /// Generate a photo of the meal, returned as a JPEG data URI.
    pub async fn generate_meal_image(&self, meal_name: &str) -> Result<String, GatewayError> {
        let mut span = self.span(GatewayOperation::GenerateImage, None);
        let generic = format!("Failed to generate image for {meal_name}.");

        let request = ImageRequest {
            model: self.image_model.clone(),
            prompt: prompts::meal_image_prompt(meal_name),
            number_of_images: 1,
            output_mime_type: IMAGE_MIME_TYPE.to_string(),
        };

        let result = span
            .instrument_future(self.backend.generate_images(request))
            .await;
        let images = result.map_err(|error| {
            GatewayError::ImageGeneration(report(
                &mut span,
                &error,
                "Error generating meal image",
                generic.clone(),
            ))
        })?;

        let image_bytes = images
            .into_iter()
            .next()
            .and_then(|image| image.image_bytes)
            .filter(|bytes| !bytes.is_empty());

        match image_bytes {
            Some(bytes) => {
                span.on_extracted(1, true);
                Ok(format!("data:{IMAGE_MIME_TYPE};base64,{bytes}"))
            }
            None => {
                let error = GenerationError::Invariant(
                    self.backend.provider(),
                    "No image generated or image data missing.".to_string(),
                );
                Err(GatewayError::ImageGeneration(report(
                    &mut span,
                    &error,
                    "Error generating meal image",
                    generic,
                )))
            }
        }
    }

    fn span(&self, operation: GatewayOperation, locale: Option<Locale>) -> GatewaySpan {
        let model = match operation {
            GatewayOperation::GenerateImage => &self.image_model,
            _ => &self.text_model,
        };
        GatewaySpan::new(operation, self.backend.provider(), model, locale)
    }

    fn json_request(&self, prompt: String) -> ContentRequest {
        ContentRequest {
            model: self.text_model.clone(),
            parts: vec![ContentPart::Text(prompt)],
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
        }
    }
}

/// Log the backend failure and pick the message the user will see.
fn report(
    span: &mut GatewaySpan,
    error: &GenerationError,
    context: &str,
    generic: String,
) -> String {
    tracing::error!(error = %error, "{context}");
    span.on_error(error);
    surfaced_message(&error.to_string(), generic)
}

/// Unwrap an extracted list, treating a missing one as empty.
fn collect_list<T>(span: &mut GatewaySpan, extraction: Extraction<Vec<T>>) -> Vec<T> {
    let recovered = extraction.is_found();
    let items = extraction.into_option().unwrap_or_default();
    span.on_extracted(items.len(), recovered);
    items
}
