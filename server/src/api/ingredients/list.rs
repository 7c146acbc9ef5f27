use crate::models::PantryIngredient;
use crate::AppState;
use axum::{extract::State, Json};

/// List all pantry ingredients.
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "ingredients",
    responses(
        (status = 200, description = "All pantry ingredients", body = Vec<PantryIngredient>)
    )
)]
pub async fn list_ingredients(State(state): State<AppState>) -> Json<Vec<PantryIngredient>> {
    Json(state.storage.list_ingredients())
}
