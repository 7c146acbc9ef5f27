//! Nutrient density reference data for recipe nutrition estimation.
//!
//! This crate embeds a curated table of common cooking ingredients with
//! per-gram nutrient densities (calories, protein, carbs, fat, fiber) and
//! their notable vitamins and minerals, and resolves free-form ingredient
//! names against it.
//!
//! # Example
//!
//! ```
//! use nutrition_db::{find_match, profile};
//!
//! if let Some(key) = find_match("Pechuga de Pollo") {
//!     let p = profile(key).unwrap();
//!     let calories = p.calories_per_gram * 400.0;
//!     println!("400g of {key} = {calories} kcal");
//! }
//! ```

mod profile_lookup;

pub use profile_lookup::{find_match, profile, table_len, NutrientProfile};
