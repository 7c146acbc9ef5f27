//! In-memory storage for pantry ingredients and generated recipes.
//!
//! Persistence is intentionally process-local: the store is a pair of
//! `RwLock` maps with monotonically increasing integer ids. Restarting
//! the server starts from an empty kitchen.

use crate::models::{NewPantryIngredient, PantryIngredient, StoredRecipe, UpdatePantryIngredient};
use chrono::Utc;
use sazon_core::types::RecipeDraft;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemStorage {
    ingredients: RwLock<HashMap<i32, PantryIngredient>>,
    recipes: RwLock<HashMap<i32, StoredRecipe>>,
    next_ingredient_id: AtomicI32,
    next_recipe_id: AtomicI32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pantry ingredients, oldest first.
    pub fn list_ingredients(&self) -> Vec<PantryIngredient> {
        let mut items: Vec<_> = self.ingredients.read().unwrap().values().cloned().collect();
        items.sort_by_key(|i| i.id);
        items
    }

    pub fn create_ingredient(&self, new: NewPantryIngredient) -> PantryIngredient {
        let id = self.next_ingredient_id.fetch_add(1, Ordering::Relaxed) + 1;
        let ingredient = PantryIngredient {
            id,
            name: new.name,
            quantity: new.quantity,
            status: new.status,
            expiry_date: new.expiry_date,
            image_url: new.image_url,
            created_at: Utc::now(),
        };
        self.ingredients
            .write()
            .unwrap()
            .insert(id, ingredient.clone());
        ingredient
    }

    pub fn update_ingredient(
        &self,
        id: i32,
        update: UpdatePantryIngredient,
    ) -> Option<PantryIngredient> {
        let mut ingredients = self.ingredients.write().unwrap();
        let existing = ingredients.get_mut(&id)?;

        if let Some(name) = update.name {
            existing.name = name;
        }
        if let Some(quantity) = update.quantity {
            existing.quantity = quantity;
        }
        if let Some(status) = update.status {
            existing.status = status;
        }
        if let Some(expiry_date) = update.expiry_date {
            existing.expiry_date = Some(expiry_date);
        }
        if let Some(image_url) = update.image_url {
            existing.image_url = Some(image_url);
        }

        Some(existing.clone())
    }

    pub fn delete_ingredient(&self, id: i32) -> bool {
        self.ingredients.write().unwrap().remove(&id).is_some()
    }

    /// All stored recipes, oldest first.
    pub fn list_recipes(&self) -> Vec<StoredRecipe> {
        let mut items: Vec<_> = self.recipes.read().unwrap().values().cloned().collect();
        items.sort_by_key(|r| r.id);
        items
    }

    pub fn get_recipe(&self, id: i32) -> Option<StoredRecipe> {
        self.recipes.read().unwrap().get(&id).cloned()
    }

    pub fn create_recipe(&self, recipe: RecipeDraft) -> StoredRecipe {
        let id = self.next_recipe_id.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = StoredRecipe {
            id,
            recipe,
            created_at: Utc::now(),
        };
        self.recipes.write().unwrap().insert(id, stored.clone());
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_ingredient(name: &str) -> NewPantryIngredient {
        NewPantryIngredient {
            name: name.to_string(),
            quantity: "500g".to_string(),
            status: "fresh".to_string(),
            expiry_date: None,
            image_url: None,
        }
    }

    #[test]
    fn test_ingredient_ids_increment() {
        let storage = MemStorage::new();
        let first = storage.create_ingredient(new_ingredient("tomate"));
        let second = storage.create_ingredient(new_ingredient("cebolla"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_list_ingredients_sorted() {
        let storage = MemStorage::new();
        storage.create_ingredient(new_ingredient("tomate"));
        storage.create_ingredient(new_ingredient("cebolla"));
        let names: Vec<_> = storage
            .list_ingredients()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["tomate", "cebolla"]);
    }

    #[test]
    fn test_update_ingredient_partial() {
        let storage = MemStorage::new();
        let created = storage.create_ingredient(new_ingredient("tomate"));

        let updated = storage
            .update_ingredient(
                created.id,
                UpdatePantryIngredient {
                    status: Some("expiring".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, "expiring");
        assert_eq!(updated.name, "tomate");
    }

    #[test]
    fn test_update_missing_ingredient() {
        let storage = MemStorage::new();
        assert!(storage
            .update_ingredient(99, UpdatePantryIngredient::default())
            .is_none());
    }

    #[test]
    fn test_delete_ingredient() {
        let storage = MemStorage::new();
        let created = storage.create_ingredient(new_ingredient("tomate"));
        assert!(storage.delete_ingredient(created.id));
        assert!(!storage.delete_ingredient(created.id));
        assert!(storage.list_ingredients().is_empty());
    }

    #[test]
    fn test_recipe_roundtrip() {
        let storage = MemStorage::new();
        let draft = sazon_core::generation::parse_recipe_response("{\"title\": \"Sopa\"}").unwrap();
        let stored = storage.create_recipe(draft);
        assert_eq!(stored.id, 1);
        let fetched = storage.get_recipe(stored.id).unwrap();
        assert_eq!(fetched.recipe.title, "Sopa");
        assert!(storage.get_recipe(99).is_none());
    }
}
