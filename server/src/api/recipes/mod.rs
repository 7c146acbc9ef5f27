pub mod generate;
pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/generate", post(generate::generate_recipe))
        .route("/{id}", get(get::get_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        generate::generate_recipe,
    ),
    components(schemas(
        crate::models::StoredRecipe,
        generate::GenerateRecipeRequest,
        sazon_core::types::RecipeDraft,
        sazon_core::types::IngredientEntry,
        sazon_core::types::InstructionStep,
        sazon_core::types::NutritionalInfo,
        sazon_core::types::GenerationRequest,
        sazon_core::types::NutritionalGoals,
        sazon_core::types::CulinaryPreferences,
        sazon_core::types::OriginalRecipeRef,
    ))
)]
pub struct ApiDoc;
