use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fmt};

/// Largest decoded image accepted for ingredient recognition (4 MiB).
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// The display and output language.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Th];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }

    /// Parse a language code such as `th` or `th-TH`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Self::En),
            "th" => Some(Self::Th),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A dietary emphasis tag the user can select.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum NutritionalFocus {
    CalciumRich,
    VitaminDBoost,
    HighProtein,
    HighFiber,
    LowSodium,
    EasyToChew,
    EasyToDigest,
    HeartHealthy,
    BloodSugarControl,
}

impl NutritionalFocus {
    pub const ALL: [Self; 9] = [
        Self::CalciumRich,
        Self::VitaminDBoost,
        Self::HighProtein,
        Self::HighFiber,
        Self::LowSodium,
        Self::EasyToChew,
        Self::EasyToDigest,
        Self::HeartHealthy,
        Self::BloodSugarControl,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::CalciumRich => "calciumRich",
            Self::VitaminDBoost => "vitaminDBoost",
            Self::HighProtein => "highProtein",
            Self::HighFiber => "highFiber",
            Self::LowSodium => "lowSodium",
            Self::EasyToChew => "easyToChew",
            Self::EasyToDigest => "easyToDigest",
            Self::HeartHealthy => "heartHealthy",
            Self::BloodSugarControl => "bloodSugarControl",
        }
    }

    /// English display form. Prompts always use this, whatever the locale.
    #[must_use]
    pub const fn english_label(self) -> &'static str {
        match self {
            Self::CalciumRich => "Calcium-rich foods",
            Self::VitaminDBoost => "Vitamin D boost",
            Self::HighProtein => "High protein",
            Self::HighFiber => "High fiber",
            Self::LowSodium => "Low sodium",
            Self::EasyToChew => "Easy to chew",
            Self::EasyToDigest => "Easy to digest",
            Self::HeartHealthy => "Heart-healthy",
            Self::BloodSugarControl => "Blood sugar control",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|focus| focus.key() == key)
    }
}

/// Health profile collected by the preference form.
///
/// Nutritional focus entries are vocabulary keys (see [`NutritionalFocus`])
/// but are kept as strings: unknown keys pass through to the prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub health_conditions: Vec<String>,
    /// Foods the user cannot eat.
    pub allergies: Vec<String>,
    pub nutritional_focus: Vec<String>,
    pub liked_foods: Vec<String>,
    pub disliked_foods: Vec<String>,
}

impl UserPreferences {
    /// Initial state of the preference form.
    #[must_use]
    pub fn form_defaults() -> Self {
        Self {
            nutritional_focus: vec![
                NutritionalFocus::EasyToChew.key().to_string(),
                NutritionalFocus::HighProtein.key().to_string(),
            ],
            ..Default::default()
        }
    }

    /// Split a comma-separated form field into trimmed, non-empty items.
    #[must_use]
    pub fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Select the focus if absent, deselect it otherwise.
    pub fn toggle_nutritional_focus(&mut self, focus: NutritionalFocus) {
        let key = focus.key();
        if let Some(position) = self.nutritional_focus.iter().position(|k| k == key) {
            self.nutritional_focus.remove(position);
        } else {
            self.nutritional_focus.push(key.to_string());
        }
    }

    /// Nutritional focus entries outside the fixed vocabulary.
    #[must_use]
    pub fn unknown_nutritional_focus(&self) -> Vec<&str> {
        self.nutritional_focus
            .iter()
            .map(String::as_str)
            .filter(|key| NutritionalFocus::from_key(key).is_none())
            .collect()
    }
}

/// A meal suggestion returned by the menu prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub description: String,
    pub main_ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct RecipeIngredient {
    pub name: String,
    /// Free text, e.g. "1 cup" or "to taste". Bare numbers are kept as text.
    #[serde(default, deserialize_with = "deserialize_scalar_text")]
    pub quantity: String,
}

/// A full recipe for one meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub meal_name: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    /// Keyed by nutrient (`calories`, `protein`, `vitaminD`, ...). Keys beyond
    /// the requested six are kept.
    #[serde(default, deserialize_with = "deserialize_nutritional_info")]
    pub nutritional_info: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_suggestion: Option<String>,
    /// Data URI of the generated meal photo, attached after the recipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Models sometimes answer with bare numbers or nulls where text is asked
/// for. Scalars become text; anything else has no text form.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn deserialize_scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn deserialize_nutritional_info<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
        .collect())
}

impl Recipe {
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A photo of the refrigerator contents, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FridgeImage {
    /// The MIME type of the image. E.g. "image/jpeg".
    pub mime_type: String,
    /// The base64-encoded image data.
    pub data: String,
}

impl FridgeImage {
    /// Wrap base64 data captured as JPEG.
    #[must_use]
    pub fn from_base64(data: impl Into<String>) -> Self {
        Self {
            mime_type: "image/jpeg".to_string(),
            data: data.into(),
        }
    }

    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: BASE64_STANDARD.encode(bytes),
        }
    }

    /// Accept either a `data:<mime>;base64,<data>` URL or bare base64.
    #[must_use]
    pub fn from_data_url(value: &str) -> Self {
        let Some(rest) = value.strip_prefix("data:") else {
            return Self::from_base64(value);
        };
        match rest.split_once(',') {
            Some((header, data)) => {
                let mime_type = header
                    .split(';')
                    .next()
                    .filter(|mime| !mime.is_empty())
                    .unwrap_or("image/jpeg");
                Self {
                    mime_type: mime_type.to_string(),
                    data: data.to_string(),
                }
            }
            None => Self::from_base64(rest),
        }
    }

    /// Decoded size in bytes, estimated from the base64 length.
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        let data = self.data.trim_end_matches('=');
        data.len() * 3 / 4
    }

    /// Check the image can be sent for analysis.
    pub fn validate(&self) -> Result<(), String> {
        if self.data.is_empty() {
            return Err("image data is empty".to_string());
        }
        if !self.mime_type.starts_with("image/") {
            return Err(format!("unsupported mime type: {}", self.mime_type));
        }
        if self.decoded_len() > MAX_IMAGE_BYTES {
            return Err(format!(
                "image is {} bytes, larger than the {MAX_IMAGE_BYTES} byte limit",
                self.decoded_len()
            ));
        }
        Ok(())
    }
}
