mod config;
mod errors;
pub mod flow;
pub mod i18n;
pub mod locale_store;

pub use config::*;
pub use errors::*;
pub use flow::{AppView, MealPlannerFlow, RecipeImage, RecipeView, SelectedMeal};
pub use i18n::{english, nutrient_label, translate, TranslationKey};
pub use locale_store::{FileLocaleStore, LanguageSettings, LocaleStore, MemoryLocaleStore};
