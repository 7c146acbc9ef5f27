use crate::api::ErrorResponse;
use crate::models::{NewPantryIngredient, PantryIngredient};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Add an ingredient to the pantry.
#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = "ingredients",
    request_body = NewPantryIngredient,
    responses(
        (status = 201, description = "Ingredient created", body = PantryIngredient),
        (status = 400, description = "Invalid ingredient data", body = ErrorResponse)
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(request): Json<NewPantryIngredient>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if request.quantity.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Quantity cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let ingredient = state.storage.create_ingredient(request);
    (StatusCode::CREATED, Json(ingredient)).into_response()
}
