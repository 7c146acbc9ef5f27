//! Recipe generation orchestration.
//!
//! Builds the prompt for the configured LLM provider, parses the model's
//! JSON response into a [`RecipeDraft`], and attaches the deterministic
//! nutrition estimate and health benefits. Malformed model output falls
//! back to a simple pantry recipe instead of failing the request; only
//! transport-level LLM errors propagate.

pub mod prompts;

use crate::health_benefits::derive_benefits;
use crate::llm::{LlmError, LlmProvider};
use crate::nutrition::compute_nutrition;
use crate::types::{GenerationRequest, IngredientEntry, InstructionStep, RecipeDraft};
use serde_json::Value;
use thiserror::Error;

/// Error type for recipe generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Generate a recipe for the given request.
///
/// The nutrition estimate and health benefits on the returned draft are
/// always computed locally from the final ingredient list; any
/// generator-claimed values are discarded.
pub async fn generate_recipe(
    provider: &dyn LlmProvider,
    request: &GenerationRequest,
) -> Result<RecipeDraft, GenerateError> {
    let prompt = if request.weekly_plan {
        prompts::render_weekly_plan_prompt(request)
    } else if request.is_variation && request.original_recipe.is_some() {
        prompts::render_variation_prompt(request)
    } else {
        prompts::render_recipe_prompt(request)
    };

    let response = provider.complete(&prompt).await?;

    let mut draft = match parse_recipe_response(&response) {
        Some(draft) => draft,
        None => {
            tracing::warn!(
                provider = provider.provider_name(),
                "Unparseable generation response, using fallback recipe"
            );
            fallback_draft(&request.ingredient_names)
        }
    };

    if request.weekly_plan {
        draft.title.push_str(" - Plan Semanal Día 1");
        draft
            .description
            .push_str(" (Parte de un plan semanal personalizado)");
        draft.dietary_tags.push("Plan Semanal".to_string());
    }

    draft.nutritional_info = Some(compute_nutrition(&draft.ingredients, draft.servings));
    draft.health_benefits = derive_benefits(&draft.ingredients);

    Ok(draft)
}

/// Parse a model response into a draft, tolerating markdown fences,
/// comments, and trailing commas. Returns None when no recipe object can
/// be recovered.
pub fn parse_recipe_response(response: &str) -> Option<RecipeDraft> {
    let cleaned = clean_response(response);
    let value: Value = serde_json::from_str(&cleaned).ok()?;
    if !value.is_object() {
        return None;
    }
    Some(draft_from_value(&value))
}

/// Strip the decoration models wrap around their JSON.
fn clean_response(response: &str) -> String {
    let mut text = response.replace("```json", "").replace("```", "");
    text = strip_line_comments(&text);
    text = strip_block_comments(&text);
    text = strip_trailing_commas(&text);
    text.trim().to_string()
}

fn strip_line_comments(s: &str) -> String {
    s.lines()
        .map(|line| {
            // Truncate at "//" unless it is inside a quoted string.
            let mut in_string = false;
            let mut previous = '\0';
            let chars: Vec<(usize, char)> = line.char_indices().collect();
            for (i, &(pos, c)) in chars.iter().enumerate() {
                if c == '"' && previous != '\\' {
                    in_string = !in_string;
                }
                if !in_string && c == '/' && chars.get(i + 1).map(|&(_, next)| next) == Some('/') {
                    return line[..pos].to_string();
                }
                previous = c;
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_block_comments(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        match rest[start..].find("*/") {
            Some(end) => rest = &rest[start + end + 2..],
            None => return result,
        }
    }
    result.push_str(rest);
    result
}

/// Remove commas that directly precede a closing brace or bracket.
fn strip_trailing_commas(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let chars: Vec<char> = s.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == ',' {
            let next_meaningful = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            if matches!(next_meaningful, Some('}') | Some(']')) {
                continue;
            }
        }
        result.push(c);
    }
    result
}

/// Build a draft from a parsed JSON object, substituting defaults for
/// missing or mistyped fields rather than rejecting the whole response.
fn draft_from_value(value: &Value) -> RecipeDraft {
    RecipeDraft {
        title: string_or(value, "title", "Receta sin nombre"),
        description: string_or(value, "description", "Deliciosa receta casera"),
        cooking_time: u32_or(value, "cookingTime", 30),
        servings: u32_or(value, "servings", 4),
        difficulty: string_or(value, "difficulty", "fácil"),
        ingredients: array_of(value, "ingredients"),
        instructions: array_of(value, "instructions"),
        dietary_tags: string_array(value, "dietaryTags"),
        cooking_tips: string_array(value, "cookingTips"),
        serving_suggestions: string_array(value, "servingSuggestions"),
        nutritional_info: None,
        health_benefits: Vec::new(),
    }
}

/// Fixed fallback recipe built directly from the requested ingredients.
fn fallback_draft(ingredient_names: &[String]) -> RecipeDraft {
    RecipeDraft {
        title: format!("Receta Especial con {}", ingredient_names.join(", ")),
        description: "Una deliciosa receta creada con los ingredientes disponibles".to_string(),
        cooking_time: 30,
        servings: 4,
        difficulty: "fácil".to_string(),
        ingredients: ingredient_names
            .iter()
            .map(|name| IngredientEntry {
                name: name.clone(),
                amount: Some("100g".to_string()),
                preparation: Some("Según necesidades".to_string()),
                substitutes: Vec::new(),
            })
            .collect(),
        instructions: vec![InstructionStep {
            step: 1,
            instruction: "Preparar todos los ingredientes según las indicaciones".to_string(),
            time: Some(10),
            temperature: None,
            technique: Some("preparación".to_string()),
            tips: None,
        }],
        dietary_tags: vec!["casero".to_string()],
        cooking_tips: vec!["Usar ingredientes frescos".to_string()],
        serving_suggestions: vec!["Servir caliente".to_string()],
        nutritional_info: None,
        health_benefits: Vec::new(),
    }
}

fn string_or(value: &Value, field: &str, fallback: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn u32_or(value: &Value, field: &str, fallback: u32) -> u32 {
    value
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(fallback)
}

fn string_array(value: &Value, field: &str) -> Vec<String> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn array_of<T: serde::de::DeserializeOwned>(value: &Value, field: &str) -> Vec<T> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
