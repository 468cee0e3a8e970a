//! Typed shapes for model responses.
//!
//! The prompt templates instruct the model to produce these shapes; the HTTP
//! relay validates parsed output against them before passing it along, so a
//! shape mismatch surfaces as a distinct error instead of silently flowing
//! through.

use serde::{Deserialize, Serialize};

/// Color assigned to positive insights.
pub const INSIGHT_COLOR: &str = "#3b82f6";

/// Color assigned to flaws.
pub const FLAW_COLOR: &str = "#ef4444";

/// The full-analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub title: String,
    pub authors: String,
    pub source_id: String,
    pub scores: Scores,
    pub summary: AnalysisSummary,
    pub key_insights: Vec<KeyInsight>,
}

/// 1-10 ratings; the rubrics live in the prompt, the model applies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scores {
    pub methodological_rigor: u8,
    pub data_quality: u8,
    pub innovation_level: u8,
}

/// Two-register summary of the paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub technical: String,
    pub simplified: String,
}

/// One insight or flaw entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInsight {
    /// Category label, e.g. "key_findings", "data_concern"
    pub insight: String,
    pub level: InsightLevel,
    pub description: String,
    pub simplified_description: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightLevel {
    Insight,
    Flaw,
}

/// The quick-summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSummary {
    pub title: String,
    pub quick_summary: String,
    pub main_finding: String,
    pub relevance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_round_trip() {
        let json = serde_json::json!({
            "title": "Attention Is All You Need",
            "authors": "Vaswani et al.",
            "source_id": "arXiv:1706.03762",
            "scores": {
                "methodological_rigor": 9,
                "data_quality": 8,
                "innovation_level": 10
            },
            "summary": {
                "technical": "Introduces the Transformer architecture.",
                "simplified": "A robot that reads every word at once."
            },
            "key_insights": [
                {
                    "insight": "key_findings",
                    "level": "Insight",
                    "description": "Self-attention enables parallelization.",
                    "simplified_description": "It looks at all words at the same time.",
                    "color": "#3b82f6"
                }
            ]
        });

        let report: AnalysisReport = serde_json::from_value(json).unwrap();
        assert_eq!(report.key_insights[0].level, InsightLevel::Insight);
        assert_eq!(report.key_insights[0].color, INSIGHT_COLOR);
        assert_eq!(report.scores.innovation_level, 10);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let result: Result<InsightLevel, _> = serde_json::from_str("\"Observation\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_quick_summary_tolerates_extra_fields() {
        let json = serde_json::json!({
            "title": "T",
            "quick_summary": "S",
            "main_finding": "F",
            "relevance": "R",
            "error": "fetch failed"
        });
        let quick: QuickSummary = serde_json::from_value(json).unwrap();
        assert_eq!(quick.title, "T");
    }
}
