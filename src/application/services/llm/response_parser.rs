//! Parsing of structured LLM replies
//!
//! Enemy and ability prompts ask the model for a small JSON object. Models do
//! not always comply, so every reply becomes a [`ParseOutcome`]: either the
//! fields we asked for, or the raw text to build a degraded result from.

use serde_json::Value;

/// Which JSON keys a reply must carry to count as structured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    /// `name` and `description`
    Enemy,
    /// `name`, `description` and `effect`
    Ability,
}

/// Fields extracted from a structured reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFields {
    pub name: String,
    pub description: String,
    /// Present only for [`ReplyShape::Ability`]
    pub effect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Structured(GeneratedFields),
    Unstructured { raw_text: String },
}

const ENEMY_DESCRIPTION_CHARS: usize = 100;
const ABILITY_DESCRIPTION_CHARS: usize = 80;
const UNSTRUCTURED_EFFECT: &str = "Efeito misterioso";

impl ParseOutcome {
    /// Parse a raw reply. Anything other than a JSON object with every
    /// required key as a string is unstructured.
    pub fn parse(raw: &str, shape: ReplyShape) -> Self {
        match extract_fields(raw, shape) {
            Some(fields) => ParseOutcome::Structured(fields),
            None => ParseOutcome::Unstructured {
                raw_text: raw.to_string(),
            },
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ParseOutcome::Structured(_))
    }

    /// `(name, description)` for an enemy of the given type
    pub fn into_enemy_text(self, enemy_type: &str) -> (String, String) {
        match self {
            ParseOutcome::Structured(fields) => (fields.name, fields.description),
            ParseOutcome::Unstructured { raw_text } => (
                enemy_type.to_string(),
                truncate_chars(&raw_text, ENEMY_DESCRIPTION_CHARS),
            ),
        }
    }

    /// `(name, description, effect)` for an ability of the given type
    pub fn into_ability_text(self, ability_type: &str) -> (String, String, String) {
        match self {
            ParseOutcome::Structured(fields) => (
                fields.name,
                fields.description,
                fields
                    .effect
                    .unwrap_or_else(|| UNSTRUCTURED_EFFECT.to_string()),
            ),
            ParseOutcome::Unstructured { raw_text } => (
                ability_type.to_string(),
                truncate_chars(&raw_text, ABILITY_DESCRIPTION_CHARS),
                UNSTRUCTURED_EFFECT.to_string(),
            ),
        }
    }
}

fn extract_fields(raw: &str, shape: ReplyShape) -> Option<GeneratedFields> {
    let value: Value = serde_json::from_str(strip_code_fence(raw)).ok()?;
    let object = value.as_object()?;
    let field = |key: &str| -> Option<String> { object.get(key)?.as_str().map(str::to_string) };

    let effect = match shape {
        ReplyShape::Enemy => None,
        ReplyShape::Ability => Some(field("effect")?),
    };

    Some(GeneratedFields {
        name: field("name")?,
        description: field("description")?,
        effect,
    })
}

/// Strips surrounding whitespace and a single Markdown code fence
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    // Opening fence may carry a language tag: ```json
    match body.split_once('\n') {
        Some((tag, inner)) if !tag.contains('{') => inner.trim(),
        _ => body.trim(),
    }
}

/// First `max` characters, never splitting a code point
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enemy_json() {
        let raw = r#"{"name": "Vírus da Amnésia", "description": "Apaga memórias."}"#;
        let outcome = ParseOutcome::parse(raw, ReplyShape::Enemy);
        assert!(outcome.is_structured());

        let (name, description) = outcome.into_enemy_text("Vírus Simbólico");
        assert_eq!(name, "Vírus da Amnésia");
        assert_eq!(description, "Apaga memórias.");
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"name\": \"Eco\", \"description\": \"Sussurra.\", \"effect\": \"Cura 10 HP\"}\n```";
        let outcome = ParseOutcome::parse(raw, ReplyShape::Ability);
        assert_eq!(
            outcome,
            ParseOutcome::Structured(GeneratedFields {
                name: "Eco".to_string(),
                description: "Sussurra.".to_string(),
                effect: Some("Cura 10 HP".to_string()),
            })
        );

        let bare = ParseOutcome::parse("```{\"name\":\"A\",\"description\":\"B\"}```", ReplyShape::Enemy);
        assert!(bare.is_structured());
    }

    #[test]
    fn test_missing_key_is_unstructured() {
        let raw = r#"{"name": "Sem Descrição"}"#;
        let outcome = ParseOutcome::parse(raw, ReplyShape::Enemy);
        assert!(!outcome.is_structured());

        let (name, description) = outcome.into_enemy_text("Bug Vivo");
        assert_eq!(name, "Bug Vivo");
        assert_eq!(description, raw);

        // enemy-shaped reply is not enough for an ability
        let enemy_only = r#"{"name": "Raio", "description": "Brilha."}"#;
        assert!(!ParseOutcome::parse(enemy_only, ReplyShape::Ability).is_structured());
    }

    #[test]
    fn test_non_string_and_non_object_are_unstructured() {
        assert!(!ParseOutcome::parse(r#"{"name": 3, "description": "x"}"#, ReplyShape::Enemy)
            .is_structured());
        assert!(!ParseOutcome::parse(r#"["name", "description"]"#, ReplyShape::Enemy)
            .is_structured());
        assert!(!ParseOutcome::parse(r#"{"name": null, "description": "x"}"#, ReplyShape::Enemy)
            .is_structured());
    }

    #[test]
    fn test_unstructured_enemy_truncates_to_100_chars() {
        let raw = "á".repeat(150);
        let (name, description) =
            ParseOutcome::parse(&raw, ReplyShape::Enemy).into_enemy_text("Sombra");
        assert_eq!(name, "Sombra");
        assert_eq!(description.chars().count(), 100);
    }

    #[test]
    fn test_unstructured_ability_defaults() {
        let raw = "Uma habilidade sem formato ".repeat(10);
        let (name, description, effect) =
            ParseOutcome::parse(&raw, ReplyShape::Ability).into_ability_text("Lógica");
        assert_eq!(name, "Lógica");
        assert_eq!(description.chars().count(), 80);
        assert!(raw.starts_with(&description));
        assert_eq!(effect, "Efeito misterioso");
    }

    #[test]
    fn test_short_unstructured_reply_kept_whole() {
        let (_, description) =
            ParseOutcome::parse("curto", ReplyShape::Enemy).into_enemy_text("Bug");
        assert_eq!(description, "curto");
    }
}
