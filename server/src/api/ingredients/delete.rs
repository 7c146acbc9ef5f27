use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteIngredientResponse {
    pub success: bool,
}

/// Remove an ingredient from the pantry.
#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(("id" = i32, Path, description = "Ingredient id")),
    responses(
        (status = 200, description = "Ingredient deleted", body = DeleteIngredientResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    if state.storage.delete_ingredient(id) {
        (
            StatusCode::OK,
            Json(DeleteIngredientResponse { success: true }),
        )
            .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Ingredient not found".to_string(),
            }),
        )
            .into_response()
    }
}
