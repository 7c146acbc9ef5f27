use crate::api::ErrorResponse;
use crate::models::{PantryIngredient, UpdatePantryIngredient};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Update fields of a pantry ingredient.
#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(("id" = i32, Path, description = "Ingredient id")),
    request_body = UpdatePantryIngredient,
    responses(
        (status = 200, description = "Ingredient updated", body = PantryIngredient),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn update_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePantryIngredient>,
) -> impl IntoResponse {
    match state.storage.update_ingredient(id, request) {
        Some(ingredient) => (StatusCode::OK, Json(ingredient)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Ingredient not found".to_string(),
            }),
        )
            .into_response(),
    }
}
