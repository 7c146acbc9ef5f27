use crate::models::StoredRecipe;
use crate::AppState;
use axum::{extract::State, Json};

/// List all generated recipes.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All stored recipes", body = Vec<StoredRecipe>)
    )
)]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<StoredRecipe>> {
    Json(state.storage.list_recipes())
}
