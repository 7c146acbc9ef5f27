//! Nutrient profile lookup for free-form ingredient names.
//!
//! Profiles store per-gram densities plus the vitamins and minerals the
//! ingredient is a notable source of. Matching is exact first, then a
//! bidirectional substring scan over the table in declaration order.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Nutrient densities for one reference ingredient, per gram.
#[derive(Debug, Clone, Deserialize)]
pub struct NutrientProfile {
    /// Canonical lowercase name, the lookup key.
    pub name: String,
    pub calories_per_gram: f64,
    pub protein_per_gram: f64,
    pub carbs_per_gram: f64,
    pub fat_per_gram: f64,
    pub fiber_per_gram: f64,
    /// Vitamins this ingredient is a notable source of.
    pub vitamins: Vec<String>,
    /// Minerals this ingredient is a notable source of.
    pub minerals: Vec<String>,
}

#[derive(Deserialize)]
struct ProfileDataFile {
    profiles: Vec<NutrientProfile>,
}

/// Parsed profile table: declaration-ordered entries plus an exact-match index.
struct ProfileTable {
    entries: Vec<NutrientProfile>,
    by_name: HashMap<String, usize>,
}

/// Embedded JSON data file. Stored as an array, not a map: substring
/// matching is first-match-wins in declaration order, so order is part
/// of the data (e.g. "pollo" is declared before "pechuga de pollo").
static PROFILES_JSON: &str = include_str!("data/profiles.json");

static TABLE: LazyLock<ProfileTable> = LazyLock::new(|| {
    let data: ProfileDataFile =
        serde_json::from_str(PROFILES_JSON).expect("profiles.json should be valid JSON");

    let by_name = data
        .profiles
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name.clone(), i))
        .collect();

    ProfileTable {
        entries: data.profiles,
        by_name,
    }
});

/// Resolve a free-form ingredient name to a canonical table key.
///
/// Lookup order:
/// 1. Exact match on the lowercased name
/// 2. First entry, in declaration order, whose key contains the name or
///    whose key is contained in the name
///
/// The substring pass deliberately takes the first hit rather than the
/// longest or most specific one. Known limitation: a name like
/// "pechuga de pollo a la plancha" resolves to the generic "pollo" entry
/// because "pollo" is declared earlier. Reordering the table or switching
/// to longest-match would change computed nutrition values.
pub fn find_match(ingredient_name: &str) -> Option<&'static str> {
    let name = ingredient_name.to_lowercase();

    if let Some(&i) = TABLE.by_name.get(&name) {
        return Some(&TABLE.entries[i].name);
    }

    TABLE
        .entries
        .iter()
        .find(|p| name.contains(&p.name) || p.name.contains(&name))
        .map(|p| p.name.as_str())
}

/// Look up the profile for a canonical key, as returned by [`find_match`].
pub fn profile(key: &str) -> Option<&'static NutrientProfile> {
    TABLE.by_name.get(key).map(|&i| &TABLE.entries[i])
}

/// Number of entries in the reference table.
pub fn table_len() -> usize {
    TABLE.entries.len()
}
