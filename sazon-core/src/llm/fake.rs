//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, allowing
//! tests to run without network access or API costs.

use super::{LlmError, LlmProvider};
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider that answers every recipe prompt with a fixed
    /// well-formed recipe JSON (wrapped in a markdown fence, as real
    /// models tend to do).
    pub fn with_recipe_responses() -> Self {
        let mut provider = Self::new();

        provider.add_response(
            "CHEF",
            r#"```json
{
  "title": "Pollo salteado con arroz",
  "description": "Un plato completo y reconfortante",
  "cookingTime": 25,
  "servings": 4,
  "difficulty": "fácil",
  "ingredients": [
    {"name": "pechuga de pollo", "amount": "400g", "preparation": "en cubos"},
    {"name": "arroz", "amount": "200g"},
    {"name": "brócoli", "amount": "150g"},
    {"name": "aceite de oliva", "amount": "2 cucharadas"}
  ],
  "instructions": [
    {"step": 1, "instruction": "Saltear el pollo en el aceite", "time": 8, "technique": "salteado"},
    {"step": 2, "instruction": "Agregar el brócoli y cocinar el arroz", "time": 15}
  ],
  "dietaryTags": ["alto en proteína"],
  "cookingTips": ["Usar fuego medio-alto"],
  "servingSuggestions": ["Servir caliente"]
}
```"#,
        );

        provider
    }
}

#[async_trait::async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
