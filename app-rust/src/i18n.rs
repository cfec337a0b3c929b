//! Display strings in English and Thai.
//!
//! Lookups fall back from the active locale to English, then to the key's
//! name, so a missing translation never breaks rendering.

use fridge_chef_sdk::{Locale, NutritionalFocus};
use std::borrow::Cow;

/// Identifies a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    AppTitle,
    AppSubtitle,
    LangEn,
    LangTh,
    UploadFridgePhoto,
    UseCamera,
    CapturePhoto,
    CloseCamera,
    Or,
    AnalyzeContents,
    AnalyzingImage,
    /// Takes a `{limit}` parameter in megabytes.
    ImageSizeError,
    SelectOrCaptureError,
    CameraAccessError,
    CameraNotSupportedError,
    AnalysisApiError,
    DetectedIngredients,
    NoIngredientsDetected,
    HealthConditionsLabel,
    HealthConditionsPlaceholder,
    AllergiesLabel,
    AllergiesPlaceholder,
    LikedFoodsLabel,
    LikedFoodsPlaceholder,
    DislikedFoodsLabel,
    DislikedFoodsPlaceholder,
    CommaSeparatedHint,
    NutritionalFocusLabel,
    NutritionalFocusOption(NutritionalFocus),
    GetMealSuggestions,
    GeneratingMeals,
    SuggestedMeals,
    NoMealsSuggested,
    MainIngredients,
    ViewRecipeDetails,
    GeneratingRecipe,
    NoRecipeAvailable,
    LoadingImage,
    ImageUnavailable,
    QuickInfo,
    PrepTime,
    CookTime,
    ServingSuggestion,
    NutritionalInfoTitle,
    Ingredients,
    Instructions,
    NutrientCalories,
    NutrientProtein,
    NutrientFiber,
    NutrientCalcium,
    NutrientVitaminD,
    NutrientSodium,
    /// Takes a `{key}` parameter, the humanized nutrient name.
    NutrientDefaultFormat,
    StartOver,
    Back,
    ErrorTitle,
    TryAgain,
}

impl TranslationKey {
    /// The key's identifier, shown when no table has the string.
    #[must_use]
    pub fn name(self) -> Cow<'static, str> {
        let name = match self {
            Self::AppTitle => "appTitle",
            Self::AppSubtitle => "appSubtitle",
            Self::LangEn => "langEn",
            Self::LangTh => "langTh",
            Self::UploadFridgePhoto => "uploadFridgePhoto",
            Self::UseCamera => "useCamera",
            Self::CapturePhoto => "capturePhoto",
            Self::CloseCamera => "closeCamera",
            Self::Or => "or",
            Self::AnalyzeContents => "analyzeContents",
            Self::AnalyzingImage => "analyzingImage",
            Self::ImageSizeError => "imageSizeError",
            Self::SelectOrCaptureError => "selectOrCaptureError",
            Self::CameraAccessError => "cameraAccessError",
            Self::CameraNotSupportedError => "cameraNotSupportedError",
            Self::AnalysisApiError => "analysisApiError",
            Self::DetectedIngredients => "detectedIngredients",
            Self::NoIngredientsDetected => "noIngredientsDetected",
            Self::HealthConditionsLabel => "healthConditionsLabel",
            Self::HealthConditionsPlaceholder => "healthConditionsPlaceholder",
            Self::AllergiesLabel => "allergiesLabel",
            Self::AllergiesPlaceholder => "allergiesPlaceholder",
            Self::LikedFoodsLabel => "likedFoodsLabel",
            Self::LikedFoodsPlaceholder => "likedFoodsPlaceholder",
            Self::DislikedFoodsLabel => "dislikedFoodsLabel",
            Self::DislikedFoodsPlaceholder => "dislikedFoodsPlaceholder",
            Self::CommaSeparatedHint => "commaSeparatedHint",
            Self::NutritionalFocusLabel => "nutritionalFocusLabel",
            Self::NutritionalFocusOption(focus) => {
                return Cow::Owned(format!("nutritionalFocusOptions.{}", focus.key()));
            }
            Self::GetMealSuggestions => "getMealSuggestions",
            Self::GeneratingMeals => "generatingMeals",
            Self::SuggestedMeals => "suggestedMeals",
            Self::NoMealsSuggested => "noMealsSuggested",
            Self::MainIngredients => "mainIngredients",
            Self::ViewRecipeDetails => "viewRecipeDetails",
            Self::GeneratingRecipe => "generatingRecipe",
            Self::NoRecipeAvailable => "noRecipeAvailable",
            Self::LoadingImage => "loadingImage",
            Self::ImageUnavailable => "imageUnavailable",
            Self::QuickInfo => "quickInfo",
            Self::PrepTime => "prepTime",
            Self::CookTime => "cookTime",
            Self::ServingSuggestion => "servingSuggestion",
            Self::NutritionalInfoTitle => "nutritionalInfoTitle",
            Self::Ingredients => "ingredients",
            Self::Instructions => "instructions",
            Self::NutrientCalories => "nutrient_calories",
            Self::NutrientProtein => "nutrient_protein",
            Self::NutrientFiber => "nutrient_fiber",
            Self::NutrientCalcium => "nutrient_calcium",
            Self::NutrientVitaminD => "nutrient_vitamind",
            Self::NutrientSodium => "nutrient_sodium",
            Self::NutrientDefaultFormat => "nutrient_default_format",
            Self::StartOver => "startOver",
            Self::Back => "back",
            Self::ErrorTitle => "errorTitle",
            Self::TryAgain => "tryAgain",
        };
        Cow::Borrowed(name)
    }

    /// The translation key for a nutrient name such as `vitaminD`.
    /// Matching ignores case.
    #[must_use]
    pub fn for_nutrient(nutrient: &str) -> Option<Self> {
        match nutrient.to_ascii_lowercase().as_str() {
            "calories" => Some(Self::NutrientCalories),
            "protein" => Some(Self::NutrientProtein),
            "fiber" => Some(Self::NutrientFiber),
            "calcium" => Some(Self::NutrientCalcium),
            "vitamind" => Some(Self::NutrientVitaminD),
            "sodium" => Some(Self::NutrientSodium),
            _ => None,
        }
    }
}

type Table = &'static [(TranslationKey, &'static str)];

static ENGLISH: Table = &[
    (TranslationKey::AppTitle, "Smart Fridge Chef"),
    (
        TranslationKey::AppSubtitle,
        "Healthy meal ideas for seniors from what is already in your fridge",
    ),
    (TranslationKey::LangEn, "English"),
    (TranslationKey::LangTh, "ไทย"),
    (TranslationKey::UploadFridgePhoto, "Upload a photo of your fridge"),
    (TranslationKey::UseCamera, "Use camera"),
    (TranslationKey::CapturePhoto, "Capture photo"),
    (TranslationKey::CloseCamera, "Close camera"),
    (TranslationKey::Or, "or"),
    (TranslationKey::AnalyzeContents, "Analyze contents"),
    (TranslationKey::AnalyzingImage, "Looking inside your fridge..."),
    (
        TranslationKey::ImageSizeError,
        "The image is too large. Please choose one smaller than {limit} MB.",
    ),
    (
        TranslationKey::SelectOrCaptureError,
        "Please select or capture a photo first.",
    ),
    (
        TranslationKey::CameraAccessError,
        "The camera could not be opened. Please check the permissions.",
    ),
    (
        TranslationKey::CameraNotSupportedError,
        "This device does not support camera capture.",
    ),
    (
        TranslationKey::AnalysisApiError,
        "The photo could not be analyzed. Please try again.",
    ),
    (TranslationKey::DetectedIngredients, "Detected ingredients"),
    (
        TranslationKey::NoIngredientsDetected,
        "No ingredients were recognized. Suggestions will use common pantry items.",
    ),
    (TranslationKey::HealthConditionsLabel, "Health conditions"),
    (
        TranslationKey::HealthConditionsPlaceholder,
        "e.g. diabetes, high blood pressure",
    ),
    (TranslationKey::AllergiesLabel, "Allergies and foods to avoid"),
    (TranslationKey::AllergiesPlaceholder, "e.g. peanuts, shellfish"),
    (TranslationKey::LikedFoodsLabel, "Favourite foods"),
    (TranslationKey::LikedFoodsPlaceholder, "e.g. fish, soup, rice porridge"),
    (TranslationKey::DislikedFoodsLabel, "Foods you dislike"),
    (TranslationKey::DislikedFoodsPlaceholder, "e.g. bitter melon, liver"),
    (TranslationKey::CommaSeparatedHint, "Separate items with commas."),
    (TranslationKey::NutritionalFocusLabel, "Nutritional focus"),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::CalciumRich),
        NutritionalFocus::CalciumRich.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::VitaminDBoost),
        NutritionalFocus::VitaminDBoost.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::HighProtein),
        NutritionalFocus::HighProtein.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::HighFiber),
        NutritionalFocus::HighFiber.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::LowSodium),
        NutritionalFocus::LowSodium.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::EasyToChew),
        NutritionalFocus::EasyToChew.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::EasyToDigest),
        NutritionalFocus::EasyToDigest.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::HeartHealthy),
        NutritionalFocus::HeartHealthy.english_label(),
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::BloodSugarControl),
        NutritionalFocus::BloodSugarControl.english_label(),
    ),
    (TranslationKey::GetMealSuggestions, "Get meal suggestions"),
    (TranslationKey::GeneratingMeals, "Putting together meal ideas..."),
    (TranslationKey::SuggestedMeals, "Suggested meals"),
    (
        TranslationKey::NoMealsSuggested,
        "No suitable meals were found. Try changing your preferences.",
    ),
    (TranslationKey::MainIngredients, "Main ingredients:"),
    (TranslationKey::ViewRecipeDetails, "View recipe"),
    (TranslationKey::GeneratingRecipe, "Writing the recipe..."),
    (
        TranslationKey::NoRecipeAvailable,
        "No recipe is available for this meal.",
    ),
    (TranslationKey::LoadingImage, "Preparing a photo of the dish..."),
    (TranslationKey::ImageUnavailable, "No photo available"),
    (TranslationKey::QuickInfo, "Quick info"),
    (TranslationKey::PrepTime, "Prep time:"),
    (TranslationKey::CookTime, "Cook time:"),
    (TranslationKey::ServingSuggestion, "Serving suggestion:"),
    (
        TranslationKey::NutritionalInfoTitle,
        "Nutrition per serving (approximate)",
    ),
    (TranslationKey::Ingredients, "Ingredients"),
    (TranslationKey::Instructions, "Instructions"),
    (TranslationKey::NutrientCalories, "Calories"),
    (TranslationKey::NutrientProtein, "Protein"),
    (TranslationKey::NutrientFiber, "Fiber"),
    (TranslationKey::NutrientCalcium, "Calcium"),
    (TranslationKey::NutrientVitaminD, "Vitamin D"),
    (TranslationKey::NutrientSodium, "Sodium"),
    (TranslationKey::NutrientDefaultFormat, "{key}"),
    (TranslationKey::StartOver, "Start over"),
    (TranslationKey::Back, "Back"),
    (TranslationKey::ErrorTitle, "Something went wrong"),
    (TranslationKey::TryAgain, "Try again"),
];

// Camera support is only reported in English for now.
static THAI: Table = &[
    (TranslationKey::AppTitle, "เชฟตู้เย็นอัจฉริยะ"),
    (
        TranslationKey::AppSubtitle,
        "ไอเดียอาหารเพื่อสุขภาพสำหรับผู้สูงอายุจากวัตถุดิบในตู้เย็นของคุณ",
    ),
    (TranslationKey::LangEn, "English"),
    (TranslationKey::LangTh, "ไทย"),
    (TranslationKey::UploadFridgePhoto, "อัปโหลดรูปถ่ายตู้เย็นของคุณ"),
    (TranslationKey::UseCamera, "ใช้กล้อง"),
    (TranslationKey::CapturePhoto, "ถ่ายภาพ"),
    (TranslationKey::CloseCamera, "ปิดกล้อง"),
    (TranslationKey::Or, "หรือ"),
    (TranslationKey::AnalyzeContents, "วิเคราะห์วัตถุดิบ"),
    (TranslationKey::AnalyzingImage, "กำลังตรวจดูวัตถุดิบในตู้เย็น..."),
    (
        TranslationKey::ImageSizeError,
        "รูปภาพมีขนาดใหญ่เกินไป กรุณาเลือกรูปที่เล็กกว่า {limit} MB",
    ),
    (TranslationKey::SelectOrCaptureError, "กรุณาเลือกหรือถ่ายภาพก่อน"),
    (
        TranslationKey::CameraAccessError,
        "ไม่สามารถเปิดกล้องได้ กรุณาตรวจสอบการอนุญาต",
    ),
    (
        TranslationKey::AnalysisApiError,
        "ไม่สามารถวิเคราะห์รูปภาพได้ กรุณาลองอีกครั้ง",
    ),
    (TranslationKey::DetectedIngredients, "วัตถุดิบที่ตรวจพบ"),
    (
        TranslationKey::NoIngredientsDetected,
        "ไม่พบวัตถุดิบ ระบบจะแนะนำเมนูจากวัตถุดิบพื้นฐานทั่วไป",
    ),
    (TranslationKey::HealthConditionsLabel, "ภาวะสุขภาพ"),
    (
        TranslationKey::HealthConditionsPlaceholder,
        "เช่น เบาหวาน ความดันโลหิตสูง",
    ),
    (TranslationKey::AllergiesLabel, "อาหารที่แพ้หรือควรหลีกเลี่ยง"),
    (TranslationKey::AllergiesPlaceholder, "เช่น ถั่วลิสง อาหารทะเลมีเปลือก"),
    (TranslationKey::LikedFoodsLabel, "อาหารที่ชอบ"),
    (TranslationKey::LikedFoodsPlaceholder, "เช่น ปลา ซุป ข้าวต้ม"),
    (TranslationKey::DislikedFoodsLabel, "อาหารที่ไม่ชอบ"),
    (TranslationKey::DislikedFoodsPlaceholder, "เช่น มะระ ตับ"),
    (TranslationKey::CommaSeparatedHint, "คั่นแต่ละรายการด้วยเครื่องหมายจุลภาค"),
    (TranslationKey::NutritionalFocusLabel, "เป้าหมายด้านโภชนาการ"),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::CalciumRich),
        "อาหารแคลเซียมสูง",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::VitaminDBoost),
        "เสริมวิตามินดี",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::HighProtein),
        "โปรตีนสูง",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::HighFiber),
        "ใยอาหารสูง",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::LowSodium),
        "โซเดียมต่ำ",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::EasyToChew),
        "เคี้ยวง่าย",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::EasyToDigest),
        "ย่อยง่าย",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::HeartHealthy),
        "ดีต่อหัวใจ",
    ),
    (
        TranslationKey::NutritionalFocusOption(NutritionalFocus::BloodSugarControl),
        "ควบคุมน้ำตาลในเลือด",
    ),
    (TranslationKey::GetMealSuggestions, "รับคำแนะนำเมนูอาหาร"),
    (TranslationKey::GeneratingMeals, "กำลังคิดเมนูอาหาร..."),
    (TranslationKey::SuggestedMeals, "เมนูแนะนำ"),
    (
        TranslationKey::NoMealsSuggested,
        "ไม่พบเมนูที่เหมาะสม ลองปรับความต้องการของคุณ",
    ),
    (TranslationKey::MainIngredients, "วัตถุดิบหลัก:"),
    (TranslationKey::ViewRecipeDetails, "ดูสูตรอาหาร"),
    (TranslationKey::GeneratingRecipe, "กำลังเขียนสูตรอาหาร..."),
    (TranslationKey::NoRecipeAvailable, "ไม่มีสูตรอาหารสำหรับเมนูนี้"),
    (TranslationKey::LoadingImage, "กำลังเตรียมภาพอาหาร..."),
    (TranslationKey::ImageUnavailable, "ไม่มีภาพอาหาร"),
    (TranslationKey::QuickInfo, "ข้อมูลโดยย่อ"),
    (TranslationKey::PrepTime, "เวลาเตรียม:"),
    (TranslationKey::CookTime, "เวลาปรุง:"),
    (TranslationKey::ServingSuggestion, "คำแนะนำการเสิร์ฟ:"),
    (
        TranslationKey::NutritionalInfoTitle,
        "คุณค่าทางโภชนาการต่อหนึ่งที่ (โดยประมาณ)",
    ),
    (TranslationKey::Ingredients, "ส่วนผสม"),
    (TranslationKey::Instructions, "วิธีทำ"),
    (TranslationKey::NutrientCalories, "พลังงาน"),
    (TranslationKey::NutrientProtein, "โปรตีน"),
    (TranslationKey::NutrientFiber, "ใยอาหาร"),
    (TranslationKey::NutrientCalcium, "แคลเซียม"),
    (TranslationKey::NutrientVitaminD, "วิตามินดี"),
    (TranslationKey::NutrientSodium, "โซเดียม"),
    (TranslationKey::NutrientDefaultFormat, "{key}"),
    (TranslationKey::StartOver, "เริ่มใหม่"),
    (TranslationKey::Back, "ย้อนกลับ"),
    (TranslationKey::ErrorTitle, "เกิดข้อผิดพลาด"),
    (TranslationKey::TryAgain, "ลองอีกครั้ง"),
];

fn table(locale: Locale) -> Table {
    match locale {
        Locale::En => ENGLISH,
        Locale::Th => THAI,
    }
}

fn lookup(locale: Locale, key: TranslationKey) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

/// Resolve a display string, substituting `{name}` placeholders from `params`.
///
/// Placeholders without a matching parameter are left as they are.
#[must_use]
pub fn translate(locale: Locale, key: TranslationKey, params: &[(&str, &str)]) -> String {
    let template = match lookup(locale, key).or_else(|| lookup(Locale::En, key)) {
        Some(template) => Cow::Borrowed(template),
        None => {
            tracing::debug!(key = %key.name(), %locale, "Missing translation");
            key.name()
        }
    };

    params
        .iter()
        .fold(template.into_owned(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// English form of a display string.
#[must_use]
pub fn english(key: TranslationKey) -> String {
    translate(Locale::En, key, &[])
}

/// Label for a nutrient key from a recipe's nutritional info.
///
/// Known nutrients are translated; others are split on capitals and
/// capitalized, e.g. `vitaminK2` becomes `Vitamin K2`.
#[must_use]
pub fn nutrient_label(locale: Locale, nutrient: &str) -> String {
    if let Some(key) = TranslationKey::for_nutrient(nutrient) {
        return translate(locale, key, &[]);
    }
    let humanized = humanize(nutrient);
    translate(
        locale,
        TranslationKey::NutrientDefaultFormat,
        &[("key", &humanized)],
    )
}

fn humanize(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if index == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

/// The focus label in the given locale.
#[must_use]
pub fn nutritional_focus_label(locale: Locale, focus: NutritionalFocus) -> String {
    translate(locale, TranslationKey::NutritionalFocusOption(focus), &[])
}
