/// Word interpreter port trait
///
/// Defines the interface for the language-model interpretation service and
/// owns the wire contract its implementations must parse model output
/// against. Implementations: Anthropic, OpenAI.
use crate::domain::models::{Interpretation, WordEntry};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// An uncertain result carries exactly this many candidate readings
pub const ALTERNATIVE_COUNT: usize = 3;

/// Port trait for word interpretation services
#[async_trait]
pub trait InterpreterPort: Send + Sync {
    /// Interpret a raw captured token into a lemma record, or a candidate
    /// set when the token is not recognizable as a real Greek word.
    ///
    /// Non-deterministic: two calls for the same token may differ.
    async fn interpret(&self, word: &str) -> Result<Interpretation>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireEntry {
    lemma: String,
    translation: String,
    example: String,
    explanation: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireUncertain {
    confident: bool,
    alternatives: Vec<WireEntry>,
}

impl WireEntry {
    fn into_entry(self) -> Result<WordEntry> {
        let fields = [
            ("lemma", &self.lemma),
            ("translation", &self.translation),
            ("example", &self.example),
            ("explanation", &self.explanation),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Interpretation(format!(
                    "failed to process word: empty {} field",
                    name
                )));
            }
        }
        Ok(WordEntry {
            lemma: self.lemma,
            translation: self.translation,
            example: self.example,
            explanation: self.explanation,
        })
    }
}

/// Parse raw model output against the interpretation wire contract.
///
/// Exactly two shapes are accepted: a bare four-field entry (confident), or
/// `{"confident": false, "alternatives": [entry x3]}` (uncertain). Unknown
/// fields, missing fields, empty fields, a wrong alternative count, or any
/// surrounding prose reject the whole response; nothing is coerced or
/// defaulted.
pub fn parse_interpretation(raw: &str) -> Result<Interpretation> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AppError::Interpretation(format!("failed to process word: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| AppError::Interpretation("failed to process word: not an object".into()))?;

    if object.contains_key("confident") || object.contains_key("alternatives") {
        let wire: WireUncertain = serde_json::from_value(value)
            .map_err(|e| AppError::Interpretation(format!("failed to process word: {}", e)))?;

        if wire.confident {
            return Err(AppError::Interpretation(
                "failed to process word: confident flag on an alternatives response".into(),
            ));
        }
        if wire.alternatives.len() != ALTERNATIVE_COUNT {
            return Err(AppError::Interpretation(format!(
                "failed to process word: expected {} alternatives, got {}",
                ALTERNATIVE_COUNT,
                wire.alternatives.len()
            )));
        }

        let entries = wire
            .alternatives
            .into_iter()
            .map(WireEntry::into_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Interpretation::Uncertain(entries))
    } else {
        let wire: WireEntry = serde_json::from_value(value)
            .map_err(|e| AppError::Interpretation(format!("failed to process word: {}", e)))?;
        Ok(Interpretation::Confident(wire.into_entry()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json(lemma: &str) -> String {
        format!(
            r#"{{"lemma":"{}","translation":"to read","example":"Διαβάζω ένα βιβλίο κάθε βράδυ πριν κοιμηθώ.","explanation":"Common verb."}}"#,
            lemma
        )
    }

    #[test]
    fn test_parses_confident_shape() {
        let parsed = parse_interpretation(&entry_json("διαβάζω")).unwrap();
        match parsed {
            Interpretation::Confident(entry) => assert_eq!(entry.lemma, "διαβάζω"),
            other => panic!("expected confident result, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_uncertain_shape_with_three_alternatives() {
        let raw = format!(
            r#"{{"confident":false,"alternatives":[{},{},{}]}}"#,
            entry_json("γράφω"),
            entry_json("γραφείο"),
            entry_json("γρήγορα")
        );
        let parsed = parse_interpretation(&raw).unwrap();
        match parsed {
            Interpretation::Uncertain(entries) => {
                assert_eq!(entries.len(), ALTERNATIVE_COUNT);
                assert_eq!(entries[1].lemma, "γραφείο");
            }
            other => panic!("expected uncertain result, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_wrong_alternative_count() {
        let raw = format!(
            r#"{{"confident":false,"alternatives":[{},{}]}}"#,
            entry_json("γράφω"),
            entry_json("γραφείο")
        );
        assert!(parse_interpretation(&raw).is_err());
    }

    #[test]
    fn test_rejects_confident_true_wrapper() {
        let raw = format!(r#"{{"confident":true,"alternatives":[{}]}}"#, entry_json("α"));
        assert!(parse_interpretation(&raw).is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let raw = r#"{"lemma":"α","translation":"a","example":"β","explanation":"γ","extra":1}"#;
        assert!(parse_interpretation(raw).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let raw = r#"{"lemma":"α","translation":"a","example":"β"}"#;
        assert!(parse_interpretation(raw).is_err());
    }

    #[test]
    fn test_rejects_empty_field() {
        let raw = r#"{"lemma":"","translation":"a","example":"β","explanation":"γ"}"#;
        assert!(parse_interpretation(raw).is_err());
    }

    #[test]
    fn test_rejects_prose_and_fenced_json() {
        assert!(parse_interpretation("Sure! Here is the entry.").is_err());
        let fenced = format!("```json\n{}\n```", entry_json("διαβάζω"));
        assert!(parse_interpretation(&fenced).is_err());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(parse_interpretation(r#"["lemma"]"#).is_err());
        assert!(parse_interpretation("42").is_err());
    }
}
