//! Health benefit derivation from ingredient names.
//!
//! Purely keyword-driven: each group of ingredient keywords maps to fixed
//! plain-language benefit statements. No nutrition math involved.

use crate::types::IngredientEntry;

/// Keyword groups and the benefit statements they trigger.
///
/// Groups are tested in order for every ingredient; a name matching any
/// keyword of a group contributes all of that group's statements.
const BENEFIT_GROUPS: &[(&[&str], &[&str])] = &[
    (
        &["brócoli", "espinaca"],
        &[
            "Rico en antioxidantes",
            "Fortalece el sistema inmunológico",
        ],
    ),
    (
        &["salmón", "atún"],
        &["Alto en Omega-3", "Beneficioso para el corazón"],
    ),
    (
        &["quinoa", "lentejas"],
        &["Fuente de proteína completa", "Alto en fibra"],
    ),
    (
        &["aguacate"],
        &["Grasas saludables", "Beneficioso para la piel"],
    ),
    (&["ajo", "cebolla"], &["Propiedades antimicrobianas"]),
    (&["tomate"], &["Rico en licopeno"]),
];

/// Fallback when no keyword group matches any ingredient.
const DEFAULT_BENEFITS: &[&str] = &["Nutritivo y equilibrado", "Ingredientes naturales"];

const MAX_BENEFITS: usize = 4;

/// Derive up to four benefit statements from an ingredient list.
///
/// Statements are deduplicated preserving first-trigger order. An
/// ingredient list that triggers nothing gets the default pair.
pub fn derive_benefits(ingredients: &[IngredientEntry]) -> Vec<String> {
    let mut benefits: Vec<String> = Vec::new();

    for entry in ingredients {
        let name = entry.name.to_lowercase();
        for (keywords, statements) in BENEFIT_GROUPS {
            if keywords.iter().any(|keyword| name.contains(keyword)) {
                for statement in *statements {
                    push_unique(&mut benefits, statement);
                }
            }
        }
    }

    if benefits.is_empty() {
        benefits = DEFAULT_BENEFITS.iter().map(|s| (*s).to_string()).collect();
    }

    benefits.truncate(MAX_BENEFITS);
    benefits
}

fn push_unique(list: &mut Vec<String>, statement: &str) {
    if !list.iter().any(|existing| existing == statement) {
        list.push(statement.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<IngredientEntry> {
        names
            .iter()
            .map(|name| IngredientEntry::new(*name, "100g"))
            .collect()
    }

    #[test]
    fn test_single_group() {
        let benefits = derive_benefits(&entries(&["brócoli"]));
        assert_eq!(
            benefits,
            vec![
                "Rico en antioxidantes",
                "Fortalece el sistema inmunológico"
            ]
        );
    }

    #[test]
    fn test_keyword_matches_inside_longer_name() {
        let benefits = derive_benefits(&entries(&["salmón ahumado"]));
        assert!(benefits.contains(&"Alto en Omega-3".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let benefits = derive_benefits(&entries(&["Aguacate"]));
        assert!(benefits.contains(&"Grasas saludables".to_string()));
    }

    #[test]
    fn test_deduplicated_across_ingredients() {
        // Both trigger the same group; statements appear once.
        let benefits = derive_benefits(&entries(&["ajo", "cebolla"]));
        assert_eq!(benefits, vec!["Propiedades antimicrobianas"]);
    }

    #[test]
    fn test_capped_at_four() {
        let benefits = derive_benefits(&entries(&["brócoli", "salmón", "quinoa", "aguacate"]));
        assert_eq!(benefits.len(), 4);
        assert_eq!(
            benefits,
            vec![
                "Rico en antioxidantes",
                "Fortalece el sistema inmunológico",
                "Alto en Omega-3",
                "Beneficioso para el corazón"
            ]
        );
    }

    #[test]
    fn test_defaults_when_nothing_matches() {
        let benefits = derive_benefits(&entries(&["xyzzy", "arroz"]));
        assert_eq!(
            benefits,
            vec!["Nutritivo y equilibrado", "Ingredientes naturales"]
        );
    }

    #[test]
    fn test_defaults_for_empty_list() {
        let benefits = derive_benefits(&[]);
        assert_eq!(
            benefits,
            vec!["Nutritivo y equilibrado", "Ingredientes naturales"]
        );
    }
}
