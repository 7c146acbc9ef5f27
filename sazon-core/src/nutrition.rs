//! Nutrient aggregation over a recipe's ingredient list.
//!
//! Resolves each ingredient against the reference table, normalizes its
//! amount to grams, and accumulates per-serving totals. Degraded input is
//! handled by omission or defaulting, never by an error: this runs on
//! AI-written ingredient lists and must not block recipe delivery.

use crate::quantity::normalize_to_grams;
use crate::types::{IngredientEntry, NutritionalInfo};

/// Serving count assumed when the recipe gives none (or zero).
pub const DEFAULT_SERVINGS: u32 = 4;

/// Amount assumed when an ingredient has no amount string at all.
const DEFAULT_AMOUNT: &str = "100g";

/// Vitamins and minerals reported per recipe are capped at this many.
const MAX_MICRONUTRIENTS: usize = 3;

/// Compute per-serving nutrition for an ingredient list.
///
/// Ingredients that match nothing in the reference table are skipped
/// silently. `servings == 0` falls back to [`DEFAULT_SERVINGS`]. The five
/// totals are divided by the serving count and rounded to the nearest
/// integer; vitamin and mineral lists keep their first 3 distinct entries
/// in accumulation order.
pub fn compute_nutrition(ingredients: &[IngredientEntry], servings: u32) -> NutritionalInfo {
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;
    let mut fiber = 0.0;
    let mut vitamins: Vec<String> = Vec::new();
    let mut minerals: Vec<String> = Vec::new();

    for entry in ingredients {
        let Some(key) = nutrition_db::find_match(&entry.name) else {
            continue;
        };
        let Some(profile) = nutrition_db::profile(key) else {
            continue;
        };

        let grams = normalize_to_grams(entry.amount.as_deref().unwrap_or(DEFAULT_AMOUNT));

        calories += profile.calories_per_gram * grams;
        protein += profile.protein_per_gram * grams;
        carbs += profile.carbs_per_gram * grams;
        fat += profile.fat_per_gram * grams;
        fiber += profile.fiber_per_gram * grams;

        for vitamin in &profile.vitamins {
            push_unique(&mut vitamins, vitamin);
        }
        for mineral in &profile.minerals {
            push_unique(&mut minerals, mineral);
        }
    }

    let servings = if servings == 0 {
        DEFAULT_SERVINGS
    } else {
        servings
    };

    vitamins.truncate(MAX_MICRONUTRIENTS);
    minerals.truncate(MAX_MICRONUTRIENTS);

    NutritionalInfo {
        calories: per_serving(calories, servings),
        protein: per_serving(protein, servings),
        carbs: per_serving(carbs, servings),
        fat: per_serving(fat, servings),
        fiber: per_serving(fiber, servings),
        vitamins,
        minerals,
    }
}

fn per_serving(total: f64, servings: u32) -> u32 {
    (total / f64::from(servings)).round() as u32
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredients() -> Vec<IngredientEntry> {
        vec![
            IngredientEntry::new("pechuga de pollo", "400g"),
            IngredientEntry::new("arroz", "200g"),
            IngredientEntry::new("brócoli", "150g"),
            IngredientEntry::new("zanahoria", "100g"),
            IngredientEntry::new("aceite de oliva", "2 cucharadas"),
        ]
    }

    #[test]
    fn test_sample_recipe_per_serving_values() {
        let info = compute_nutrition(&sample_ingredients(), 4);

        // Fixed regression values from the reference densities:
        // 400g pechuga + 200g arroz + 150g brócoli + 100g zanahoria
        // + 30g aceite = 1747.2 kcal total.
        assert_eq!(info.calories, 437);
        assert_eq!(info.protein, 36);
        assert_eq!(info.carbs, 45);
        assert_eq!(info.fat, 12);
        assert_eq!(info.fiber, 2);
    }

    #[test]
    fn test_sample_recipe_micronutrients() {
        let info = compute_nutrition(&sample_ingredients(), 4);

        // First 3 distinct, in accumulation order.
        assert_eq!(info.vitamins, vec!["Niacina", "Vitamina B6", "Tiamina"]);
        assert_eq!(info.minerals, vec!["Fósforo", "Selenio", "Manganeso"]);
    }

    #[test]
    fn test_unmatched_ingredients_are_skipped() {
        let ingredients = vec![
            IngredientEntry::new("xyzzy", "500g"),
            IngredientEntry::new("arroz", "100g"),
        ];
        let info = compute_nutrition(&ingredients, 1);
        assert_eq!(info.calories, 365);
    }

    #[test]
    fn test_all_unmatched_yields_zeroes() {
        let ingredients = vec![
            IngredientEntry::new("xyzzy", "500g"),
            IngredientEntry::new("grimorio", "1kg"),
        ];
        let info = compute_nutrition(&ingredients, 4);
        assert_eq!(info, NutritionalInfo::default());
    }

    #[test]
    fn test_empty_ingredient_list() {
        let info = compute_nutrition(&[], 4);
        assert_eq!(info, NutritionalInfo::default());
    }

    #[test]
    fn test_missing_amount_defaults_to_100g() {
        let mut entry = IngredientEntry::new("arroz", "");
        entry.amount = None;
        let info = compute_nutrition(&[entry], 1);
        // 100g of arroz at 3.65 kcal/g.
        assert_eq!(info.calories, 365);
    }

    #[test]
    fn test_zero_servings_defaults_to_four() {
        let with_zero = compute_nutrition(&sample_ingredients(), 0);
        let with_four = compute_nutrition(&sample_ingredients(), 4);
        assert_eq!(with_zero, with_four);
    }

    #[test]
    fn test_serving_count_divides_totals() {
        let info = compute_nutrition(&[IngredientEntry::new("arroz", "400g")], 2);
        assert_eq!(info.calories, 730);
    }

    #[test]
    fn test_micronutrient_lists_capped_at_three() {
        let ingredients = vec![
            IngredientEntry::new("pechuga de pollo", "100g"),
            IngredientEntry::new("arroz", "100g"),
            IngredientEntry::new("espinaca", "100g"),
            IngredientEntry::new("leche", "100g"),
        ];
        let info = compute_nutrition(&ingredients, 4);
        assert_eq!(info.vitamins.len(), 3);
        assert_eq!(info.minerals.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let first = compute_nutrition(&sample_ingredients(), 4);
        let second = compute_nutrition(&sample_ingredients(), 4);
        assert_eq!(first, second);
    }
}
