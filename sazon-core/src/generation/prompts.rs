//! Prompt rendering for recipe generation.
//!
//! One render function per prompt variant; shared blocks (chef
//! personality, advanced parameters, response format) are composed into
//! the final prompt by the caller-facing functions.

use crate::types::GenerationRequest;

/// Chef personality preamble. Unknown or missing personalities fall back
/// to the creative chef.
pub fn personality_prompt(personality: Option<&str>) -> &'static str {
    match personality.unwrap_or("creative") {
        "health" => {
            "Eres un chef especializado en nutrición funcional. Cada ingrediente tiene un propósito nutricional específico. Maximizas beneficios para la salud usando técnicas que preservan nutrientes."
        }
        "traditional" => {
            "Eres un chef maestro en técnicas clásicas. Respetas las tradiciones culinarias pero las perfeccionas. Tus recetas son atemporales y reconfortantes."
        }
        "fusion" => {
            "Eres un chef globalizado que mezcla culturas culinarias audazmente. Combinas técnicas orientales con sabores latinos, europeos con asiáticos, creando armonías únicas."
        }
        "quick" => {
            "Eres un chef eficiente y práctico. Optimizas cada paso para velocidad sin sacrificar sabor. Usas técnicas inteligentes y shortcuts profesionales."
        }
        _ => {
            "Eres un chef innovador y artístico. Combinas sabores de formas inesperadas, experimentas con texturas únicas y creas presentaciones visualmente impactantes. Siempre buscas la sorpresa culinaria."
        }
    }
}

/// Render the advanced-parameters block shared by all prompt variants.
pub fn render_parameters_block(request: &GenerationRequest) -> String {
    let mut block = format!(
        r#"
PARÁMETROS AVANZADOS:
- Tipo de comida: {meal_type}
- Tiempo máximo: {cooking_time}
- Dificultad: {difficulty}
- Porciones: {servings}
- Presupuesto: {budget}
- Enfoque de salud: {health_focus}
- Restricciones: {restrictions}"#,
        meal_type = request.meal_type.as_deref().unwrap_or("cena"),
        cooking_time = request.cooking_time.as_deref().unwrap_or("30 minutos"),
        difficulty = request.difficulty.as_deref().unwrap_or("fácil"),
        servings = request.servings.unwrap_or(4),
        budget = request.budget.as_deref().unwrap_or("medio"),
        health_focus = request.health_focus.as_deref().unwrap_or("equilibrado"),
        restrictions = join_or(&request.dietary_restrictions, "ninguna"),
    );

    if let Some(goals) = &request.nutritional_goals {
        block.push_str(&format!(
            r#"

OBJETIVOS NUTRICIONALES ESPECÍFICOS:
- Calorías por porción: {}
- Proteína: {}g
- Carbohidratos: {}g
- Grasa: {}g
- Fibra: {}g"#,
            goals.calories, goals.protein, goals.carbs, goals.fat, goals.fiber
        ));
    }

    if let Some(prefs) = &request.culinary_preferences {
        block.push_str(&format!(
            r#"

PREFERENCIAS CULINARIAS AVANZADAS:
- Estilos de cocina: {cuisines}
- Nivel de picante: {spice}
- Métodos preferidos: {methods}"#,
            cuisines = join_or(&prefs.cuisine_types, "libre"),
            spice = spice_level_name(prefs.spice_level),
            methods = join_or(&prefs.cooking_methods, "variados"),
        ));
    }

    if request.sustainability_mode {
        block.push_str(
            r#"

🌱 MODO SOSTENIBILIDAD ACTIVADO:
- Prioriza ingredientes locales y de temporada
- Minimiza desperdicio alimentario (usa tallos, cáscaras, etc.)
- Técnicas de cocción eficientes energéticamente
- Reduce huella de carbono en selección de ingredientes
- Enfoque en ingredientes orgánicos y de producción local"#,
        );
    }

    block
}

/// Render the JSON response-format block the model must follow.
pub fn render_response_format(include_nutrition: bool) -> String {
    let base = r#"
{
  "title": "Nombre creativo y apetitoso",
  "description": "Descripción detallada que incluya beneficios nutricionales y experiencia gastronómica",
  "cookingTime": 30,
  "servings": 4,
  "difficulty": "fácil",
  "ingredients": [
    {
      "name": "Ingrediente específico",
      "amount": "cantidad precisa",
      "preparation": "preparación específica (picado, rallado, etc.)",
      "substitutes": ["sustituto1", "sustituto2"]
    }
  ],
  "instructions": [
    {
      "step": 1,
      "instruction": "Instrucción muy detallada con técnicas específicas",
      "time": 5,
      "temperature": "temperatura si aplica",
      "technique": "técnica culinaria específica",
      "tips": "consejo profesional"
    }
  ],
  "dietaryTags": ["tag nutricional", "tag de cocina", "tag de dificultad"],
  "cookingTips": ["consejo profesional 1", "consejo profesional 2"],
  "servingSuggestions": ["sugerencia de acompañamiento 1", "sugerencia 2"]"#;

    if include_nutrition {
        format!(
            r#"{base},
  "nutritionalInfo": {{
    "calories": 450,
    "protein": 30,
    "carbs": 40,
    "fat": 15,
    "fiber": 5,
    "vitamins": ["vitamina principal 1", "vitamina principal 2"],
    "minerals": ["mineral principal 1", "mineral principal 2"]
  }},
  "healthBenefits": ["beneficio de salud 1", "beneficio de salud 2"]
}}

Responde únicamente con este JSON válido."#
        )
    } else {
        format!(
            r#"{base}
}}

Responde únicamente con este JSON válido."#
        )
    }
}

/// Render the standard recipe-generation prompt.
pub fn render_recipe_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Actúa como un CHEF PROFESIONAL y crea la RECETA PERFECTA con estos ingredientes: {ingredients}.

PERSONALIDAD DEL CHEF:
{personality}
{parameters}

INSTRUCCIONES ESPECIALES DEL USUARIO: {special}

MISIÓN: Crea una receta que sea perfecta según todos los parámetros especificados. Debe ser innovadora, deliciosa y perfectamente equilibrada.

Incluye consejos de cocina útiles y sugerencias de presentación.

Responde ÚNICAMENTE con un objeto JSON válido, sin explicaciones adicionales.
{format}"#,
        ingredients = request.ingredient_names.join(", "),
        personality = personality_prompt(request.ai_personality.as_deref()),
        parameters = render_parameters_block(request),
        special = request
            .special_instructions
            .as_deref()
            .unwrap_or("Crea una receta excepcional"),
        format = render_response_format(request.nutrition_optimization),
    )
}

/// Render the variation prompt for an existing recipe.
pub fn render_variation_prompt(request: &GenerationRequest) -> String {
    let (original_title, original_ingredients) = match &request.original_recipe {
        Some(original) if !original.ingredients.is_empty() => {
            (original.title.as_str(), original.ingredients.join(", "))
        }
        Some(original) => (original.title.as_str(), request.ingredient_names.join(", ")),
        None => ("", request.ingredient_names.join(", ")),
    };

    format!(
        r#"Actúa como un CHEF PROFESIONAL y crea una variación de esta receta:

RECETA ORIGINAL: "{original_title}"
INGREDIENTES BASE: {original_ingredients}

PERSONALIDAD DEL CHEF:
{personality}

INSTRUCCIONES PARA LA VARIACIÓN:
{special}
{parameters}

IMPORTANTE - VARIACIÓN INTELIGENTE:
- Transforma al menos 40% de los ingredientes o técnicas
- Mantén la esencia pero renueva la presentación
- Debe ser una receta completamente nueva
{format}"#,
        personality = personality_prompt(request.ai_personality.as_deref()),
        special = request
            .special_instructions
            .as_deref()
            .unwrap_or("Crea una variación que sorprenda manteniendo la esencia original"),
        parameters = render_parameters_block(request),
        format = render_response_format(request.nutrition_optimization),
    )
}

/// Render the weekly-plan prompt (a single standout recipe for day one).
pub fn render_weekly_plan_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Actúa como un CHEF PROFESIONAL y crea una receta especial para plan semanal usando estos ingredientes: {ingredients}.

PERSONALIDAD DEL CHEF:
{personality}

INSTRUCCIONES ESPECIALES: {special}
{parameters}

IMPORTANTE: Crea UNA receta excepcional que sea perfecta para el primer día de un plan semanal. Debe ser nutritiva, deliciosa y fácil de preparar.
{format}"#,
        ingredients = request.ingredient_names.join(", "),
        personality = personality_prompt(request.ai_personality.as_deref()),
        special = request.special_instructions.as_deref().unwrap_or(
            "Crea una receta deliciosa que forme parte de un menú semanal variado"
        ),
        parameters = render_parameters_block(request),
        format = render_response_format(request.nutrition_optimization),
    )
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn spice_level_name(level: Option<u8>) -> &'static str {
    match level {
        Some(1) => "muy suave",
        Some(2) => "suave",
        Some(3) => "medio",
        Some(4) => "picante",
        Some(5) => "muy picante",
        _ => "medio",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CulinaryPreferences, NutritionalGoals};

    fn request_with(names: &[&str]) -> GenerationRequest {
        GenerationRequest {
            ingredient_names: names.iter().map(|s| (*s).to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_personality_fallback() {
        assert_eq!(
            personality_prompt(None),
            personality_prompt(Some("creative"))
        );
        assert_eq!(
            personality_prompt(Some("desconocido")),
            personality_prompt(Some("creative"))
        );
    }

    #[test]
    fn test_parameters_defaults() {
        let block = render_parameters_block(&GenerationRequest::default());
        assert!(block.contains("Tipo de comida: cena"));
        assert!(block.contains("Porciones: 4"));
        assert!(block.contains("Restricciones: ninguna"));
        assert!(!block.contains("OBJETIVOS NUTRICIONALES"));
    }

    #[test]
    fn test_parameters_with_goals_and_preferences() {
        let mut request = request_with(&["tomate"]);
        request.nutritional_goals = Some(NutritionalGoals {
            calories: 500,
            protein: 35,
            carbs: 45,
            fat: 15,
            fiber: 8,
        });
        request.culinary_preferences = Some(CulinaryPreferences {
            cuisine_types: vec!["mediterránea".to_string()],
            spice_level: Some(4),
            cooking_methods: vec!["horno".to_string()],
        });
        request.sustainability_mode = true;

        let block = render_parameters_block(&request);
        assert!(block.contains("Calorías por porción: 500"));
        assert!(block.contains("Estilos de cocina: mediterránea"));
        assert!(block.contains("Nivel de picante: picante"));
        assert!(block.contains("MODO SOSTENIBILIDAD ACTIVADO"));
    }

    #[test]
    fn test_recipe_prompt_includes_ingredients() {
        let prompt = render_recipe_prompt(&request_with(&["pollo", "arroz"]));
        assert!(prompt.contains("pollo, arroz"));
        assert!(prompt.contains("CHEF PROFESIONAL"));
        assert!(prompt.contains("\"title\""));
    }

    #[test]
    fn test_response_format_nutrition_flag() {
        assert!(render_response_format(true).contains("nutritionalInfo"));
        assert!(!render_response_format(false).contains("nutritionalInfo"));
    }

    #[test]
    fn test_variation_prompt_uses_original() {
        let mut request = request_with(&["pollo"]);
        request.is_variation = true;
        request.original_recipe = Some(crate::types::OriginalRecipeRef {
            title: "Pollo al horno".to_string(),
            ingredients: vec!["pollo".to_string(), "limón".to_string()],
        });
        let prompt = render_variation_prompt(&request);
        assert!(prompt.contains("Pollo al horno"));
        assert!(prompt.contains("pollo, limón"));
    }
}
