pub mod generation;
pub mod health_benefits;
pub mod llm;
pub mod nutrition;
pub mod quantity;
pub mod types;

pub use generation::{generate_recipe, parse_recipe_response, GenerateError};
pub use health_benefits::derive_benefits;
pub use llm::{create_provider_from_env, FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use nutrition::{compute_nutrition, DEFAULT_SERVINGS};
pub use quantity::normalize_to_grams;
pub use types::{
    CulinaryPreferences, GenerationRequest, IngredientEntry, InstructionStep, NutritionalGoals,
    NutritionalInfo, OriginalRecipeRef, RecipeDraft,
};
