use chrono::{DateTime, Utc};
use sazon_core::types::RecipeDraft;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A pantry ingredient tracked by the kitchen dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PantryIngredient {
    pub id: i32,
    pub name: String,
    /// Free-form quantity text ("500g", "2 unidades").
    pub quantity: String,
    /// Freshness state: "fresh", "expiring" or "expired".
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a pantry ingredient.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryIngredient {
    pub name: String,
    pub quantity: String,
    pub status: String,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update for a pantry ingredient; absent fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePantryIngredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A generated recipe as stored and returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    pub id: i32,
    #[serde(flatten)]
    pub recipe: RecipeDraft,
    pub created_at: DateTime<Utc>,
}
