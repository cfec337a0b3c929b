//! The upload, preferences, meals and recipe screens as a state machine.

use crate::{
    errors::FlowError,
    i18n::{translate, TranslationKey},
};
use fridge_chef_sdk::{
    FridgeImage, GatewayError, GenerationGateway, Locale, Meal, Recipe, UserPreferences,
    MAX_IMAGE_BYTES,
};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Upload,
    Preferences,
    Meals,
    Recipe,
    Error,
}

/// State of the meal photo shown next to a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeImage {
    /// No photo was requested, because there is no recipe.
    NotRequested,
    /// A data URI.
    Ready(String),
    /// Generation failed; the recipe is still shown.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeView {
    Ready(Recipe),
    /// The reply held no readable recipe.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedMeal {
    pub meal: Meal,
    pub recipe: RecipeView,
    pub image: RecipeImage,
}

/// Drives one planning session against a [`GenerationGateway`].
///
/// Each operation takes the values it needs from the flow and hands them to
/// the gateway explicitly, together with the active locale.
pub struct MealPlannerFlow {
    gateway: GenerationGateway,
    locale: Locale,
    view: AppView,
    /// Where `back` returns to from the error screen.
    resume_view: AppView,
    ingredients: Vec<String>,
    preferences: UserPreferences,
    meals: Vec<Meal>,
    selected: Option<SelectedMeal>,
    error: Option<String>,
}

impl MealPlannerFlow {
    #[must_use]
    pub fn new(gateway: GenerationGateway, locale: Locale) -> Self {
        Self {
            gateway,
            locale,
            view: AppView::Upload,
            resume_view: AppView::Upload,
            ingredients: Vec::new(),
            preferences: UserPreferences::form_defaults(),
            meals: Vec::new(),
            selected: None,
            error: None,
        }
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Later requests use the new language; results already shown are kept.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Replace the detected ingredients, e.g. after the user edits them.
    pub fn set_ingredients(&mut self, ingredients: Vec<String>) {
        self.ingredients = ingredients;
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn selected(&self) -> Option<&SelectedMeal> {
        self.selected.as_ref()
    }

    /// The message shown on the error screen.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Analyze the fridge photo and move to the preference form.
    ///
    /// An oversized photo is rejected locally and the flow stays on the
    /// upload screen.
    pub async fn submit_image(&mut self, image: &FridgeImage) -> Result<&[String], FlowError> {
        if image.decoded_len() > MAX_IMAGE_BYTES {
            let limit = (MAX_IMAGE_BYTES / (1024 * 1024)).to_string();
            let message = translate(
                self.locale,
                TranslationKey::ImageSizeError,
                &[("limit", &limit)],
            );
            tracing::warn!(bytes = image.decoded_len(), "Rejecting oversized fridge photo");
            return Err(FlowError::InvalidImage(message));
        }

        match self
            .gateway
            .analyze_refrigerator_image(image, self.locale)
            .await
        {
            Ok(ingredients) => {
                if ingredients.is_empty() {
                    tracing::info!("No ingredients detected; continuing with pantry fallback");
                }
                self.ingredients = ingredients;
                self.meals.clear();
                self.selected = None;
                self.enter(AppView::Preferences);
                Ok(&self.ingredients)
            }
            Err(error) => Err(self.fail(AppView::Upload, error)),
        }
    }

    /// Ask for meal suggestions and move to the meal list.
    pub async fn submit_preferences(
        &mut self,
        preferences: UserPreferences,
    ) -> Result<&[Meal], FlowError> {
        self.preferences = preferences;

        match self
            .gateway
            .generate_personalized_menu(&self.ingredients, &self.preferences, self.locale)
            .await
        {
            Ok(meals) => {
                self.meals = meals;
                self.selected = None;
                self.enter(AppView::Meals);
                Ok(&self.meals)
            }
            Err(error) => Err(self.fail(AppView::Preferences, error)),
        }
    }

    /// Fetch the recipe of a suggested meal, then its photo.
    ///
    /// A recipe failure moves to the error screen. A photo failure does not:
    /// the recipe is shown with [`RecipeImage::Failed`].
    pub async fn select_meal(&mut self, index: usize) -> Result<&SelectedMeal, FlowError> {
        let meal = self
            .meals
            .get(index)
            .cloned()
            .ok_or(FlowError::UnknownMeal(index))?;

        let recipe = match self
            .gateway
            .generate_recipe(&meal.name, &self.ingredients, self.locale)
            .await
        {
            Ok(recipe) => recipe,
            Err(error) => return Err(self.fail(AppView::Meals, error)),
        };

        let selected = match recipe {
            Some(recipe) => match self.gateway.generate_meal_image(&recipe.meal_name).await {
                Ok(image_url) => SelectedMeal {
                    meal,
                    recipe: RecipeView::Ready(recipe.with_image_url(image_url.clone())),
                    image: RecipeImage::Ready(image_url),
                },
                Err(error) => {
                    tracing::warn!(%error, "Showing recipe without a photo");
                    SelectedMeal {
                        meal,
                        recipe: RecipeView::Ready(recipe),
                        image: RecipeImage::Failed(error.user_message().to_string()),
                    }
                }
            },
            None => SelectedMeal {
                meal,
                recipe: RecipeView::Unavailable,
                image: RecipeImage::NotRequested,
            },
        };

        self.enter(AppView::Recipe);
        Ok(self.selected.insert(selected))
    }

    /// Go to the previous screen.
    pub fn back(&mut self) {
        let previous = match self.view {
            AppView::Upload | AppView::Preferences => AppView::Upload,
            AppView::Meals => AppView::Preferences,
            AppView::Recipe => AppView::Meals,
            AppView::Error => self.resume_view,
        };
        if self.view == AppView::Recipe {
            self.selected = None;
        }
        self.enter(previous);
    }

    /// Start a new session. The language and the preference form are kept.
    pub fn reset(&mut self) {
        self.ingredients.clear();
        self.meals.clear();
        self.selected = None;
        self.resume_view = AppView::Upload;
        self.enter(AppView::Upload);
    }

    fn enter(&mut self, view: AppView) {
        self.error = None;
        self.view = view;
    }

    fn fail(&mut self, resume_view: AppView, error: GatewayError) -> FlowError {
        self.error = Some(error.user_message().to_string());
        self.resume_view = resume_view;
        self.view = AppView::Error;
        FlowError::Gateway(error)
    }
}
