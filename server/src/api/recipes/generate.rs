use crate::api::ErrorResponse;
use crate::models::StoredRecipe;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sazon_core::types::GenerationRequest;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    pub preferences: GenerationRequest,
}

/// Generate a recipe from the given preferences and store it.
///
/// The stored recipe always carries locally computed nutrition and health
/// benefits, regardless of what the generator claimed.
#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe", body = StoredRecipe),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    match sazon_core::generate_recipe(state.provider.as_ref(), &request.preferences).await {
        Ok(draft) => {
            let stored = state.storage.create_recipe(draft);
            tracing::info!(recipe_id = stored.id, title = %stored.recipe.title, "Recipe generated");
            (StatusCode::OK, Json(stored)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate recipe");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
