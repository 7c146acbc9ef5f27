use crate::api::ErrorResponse;
use crate::models::StoredRecipe;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Fetch one recipe by id.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = StoredRecipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.storage.get_recipe(id) {
        Some(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
    }
}
