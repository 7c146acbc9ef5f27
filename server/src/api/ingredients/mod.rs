pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_ingredients).post(create::create_ingredient),
        )
        .route(
            "/{id}",
            axum::routing::put(update::update_ingredient).delete(delete::delete_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_ingredients,
        create::create_ingredient,
        update::update_ingredient,
        delete::delete_ingredient,
    ),
    components(schemas(
        crate::models::PantryIngredient,
        crate::models::NewPantryIngredient,
        crate::models::UpdatePantryIngredient,
        delete::DeleteIngredientResponse,
    ))
)]
pub struct ApiDoc;
