use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
///
/// Both the name and the amount are free-form text, written either by the
/// recipe generator or by the user ("Pechuga de pollo", "2 cucharadas").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
}

impl IngredientEntry {
    /// Convenience constructor for a name + amount pair.
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount.into()),
            preparation: None,
            substitutes: Vec::new(),
        }
    }
}

/// One numbered cooking instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    #[serde(default)]
    pub step: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

/// Per-serving nutrition estimate, derived from the recipe's own
/// ingredient list. Never sourced from generator-claimed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    /// At most 3 entries.
    pub vitamins: Vec<String>,
    /// At most 3 entries.
    pub minerals: Vec<String>,
}

/// A complete recipe as produced by the generation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    /// Minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub ingredients: Vec<IngredientEntry>,
    pub instructions: Vec<InstructionStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cooking_tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serving_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_benefits: Vec<String>,
}

/// Specific per-serving targets the user may set for generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NutritionalGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
}

/// Cuisine and technique preferences for generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CulinaryPreferences {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuisine_types: Vec<String>,
    /// 1 (very mild) to 5 (very hot).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cooking_methods: Vec<String>,
}

/// Reference to an existing recipe when generating a variation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OriginalRecipeRef {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

/// Everything the caller can say about the recipe they want.
///
/// All fields are optional; the prompt builders substitute sensible
/// defaults, so an empty request is still valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub ingredient_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_personality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_goals: Option<NutritionalGoals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culinary_preferences: Option<CulinaryPreferences>,
    #[serde(default)]
    pub sustainability_mode: bool,
    #[serde(default)]
    pub nutrition_optimization: bool,
    #[serde(default)]
    pub weekly_plan: bool,
    #[serde(default)]
    pub is_variation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_recipe: Option<OriginalRecipeRef>,
}
