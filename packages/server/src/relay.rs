//! Model-output relay: fence stripping, JSON parsing, schema validation.
//!
//! The contract toward the extension is "always return something usable":
//! fence-wrapped JSON is unwrapped, parse failures and schema mismatches
//! degrade to a best-effort payload carrying the raw text and an error flag.
//! Fence stripping is a separate step preceding the decoder so its behavior
//! stays independently verifiable.

use serde_json::{json, Value};
use tracing::warn;

use extraction::report::{AnalysisReport, QuickSummary};
use extraction::AnalysisKind;
use openai_client::strip_code_blocks;

enum RelayError {
    Empty,
    Parse(serde_json::Error),
    Schema(serde_json::Error),
}

/// Turn the model's raw text into the response body for the extension.
pub fn shape_response(kind: AnalysisKind, raw: String) -> Value {
    match parse_model_output(kind, &raw) {
        Ok(value) => value,
        Err(RelayError::Empty) => json!({
            "title": "Analysis Error",
            "error": "model returned an empty response",
            "raw_analysis": raw,
        }),
        Err(RelayError::Parse(e)) => {
            warn!(error = %e, "model output is not valid JSON");
            json!({
                "title": "Analysis Complete",
                "raw_analysis": raw,
                "clean_result": strip_code_blocks(&raw),
                "error": "could not parse analysis as structured data",
            })
        }
        Err(RelayError::Schema(e)) => {
            warn!(error = %e, "model output does not match the expected schema");
            json!({
                "title": "Analysis Complete",
                "raw_analysis": raw,
                "clean_result": strip_code_blocks(&raw),
                "error": format!("analysis did not match the expected schema: {e}"),
            })
        }
    }
}

fn parse_model_output(kind: AnalysisKind, raw: &str) -> Result<Value, RelayError> {
    if raw.trim().is_empty() {
        return Err(RelayError::Empty);
    }

    let clean = strip_code_blocks(raw);
    let value: Value = serde_json::from_str(clean).map_err(RelayError::Parse)?;

    // Validate against the kind's schema but return the parsed value as-is,
    // extra model-provided fields included.
    match kind {
        AnalysisKind::Full => {
            serde_json::from_value::<AnalysisReport>(value.clone()).map_err(RelayError::Schema)?;
        }
        AnalysisKind::Quick => {
            serde_json::from_value::<QuickSummary>(value.clone()).map_err(RelayError::Schema)?;
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUICK_JSON: &str = r#"{
        "title": "Attention Is All You Need",
        "quick_summary": "Introduces the Transformer.",
        "main_finding": "28.4 BLEU on WMT14 En-De.",
        "relevance": "Foundation of modern NLP."
    }"#;

    #[test]
    fn test_bare_json_passes_through() {
        let out = shape_response(AnalysisKind::Quick, QUICK_JSON.to_string());
        assert_eq!(out["title"], "Attention Is All You Need");
        assert!(out.get("error").is_none());
    }

    #[test]
    fn test_fenced_json_is_unwrapped() {
        let fenced = format!("```json\n{QUICK_JSON}\n```");
        let out = shape_response(AnalysisKind::Quick, fenced);
        assert_eq!(out["title"], "Attention Is All You Need");
        assert!(out.get("error").is_none());
    }

    #[test]
    fn test_unparseable_output_degrades() {
        let raw = "Error analyzing paper: API error: rate limited".to_string();
        let out = shape_response(AnalysisKind::Full, raw.clone());
        assert_eq!(out["title"], "Analysis Complete");
        assert_eq!(out["raw_analysis"], raw);
        assert!(out.get("clean_result").is_some());
        assert_eq!(out["error"], "could not parse analysis as structured data");
    }

    #[test]
    fn test_empty_output_degrades() {
        let out = shape_response(AnalysisKind::Full, "   ".to_string());
        assert_eq!(out["title"], "Analysis Error");
        assert!(out.get("error").is_some());
    }

    #[test]
    fn test_schema_mismatch_is_flagged() {
        let out = shape_response(AnalysisKind::Full, r#"{"title": "only a title"}"#.to_string());
        assert_eq!(out["title"], "Analysis Complete");
        let error = out["error"].as_str().unwrap();
        assert!(error.contains("expected schema"));
    }

    #[test]
    fn test_extra_fields_survive_validation() {
        let with_extra = r#"{
            "title": "T",
            "quick_summary": "S",
            "main_finding": "F",
            "relevance": "R",
            "model_notes": "kept verbatim"
        }"#;
        let out = shape_response(AnalysisKind::Quick, with_extra.to_string());
        assert_eq!(out["model_notes"], "kept verbatim");
    }
}
