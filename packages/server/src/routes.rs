//! HTTP handlers for the extension-facing API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use extraction::report::{
    AnalysisReport, AnalysisSummary, InsightLevel, KeyInsight, Scores, INSIGHT_COLOR,
};
use extraction::{AnalysisKind, AnalysisRequest};

use crate::app::AppState;
use crate::relay::shape_response;

#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, rename = "type")]
    pub analysis_type: Option<String>,

    #[serde(default)]
    pub eli12: bool,
}

/// `POST /api/analyze` - run the pipeline for a paper URL.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> (StatusCode, Json<Value>) {
    let Some(url) = body.url.filter(|u| !u.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "URL is required"})),
        );
    };

    let kind = body
        .analysis_type
        .as_deref()
        .map(AnalysisKind::from_type_str)
        .unwrap_or_default();

    let request = AnalysisRequest {
        url,
        kind,
        eli12: body.eli12,
    };

    info!(url = %request.url, kind = ?request.kind, eli12 = request.eli12, "analyze request");

    let raw = state.analyzer.analyze(&request).await;
    (StatusCode::OK, Json(shape_response(kind, raw)))
}

/// `GET /api/health` - liveness plus whether a model key is present.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "openai_configured": state.config.openai_configured(),
    }))
}

/// `POST /api/test` - canned full-analysis payload so the extension UI can
/// be developed without spending API credit.
pub async fn test_handler() -> Json<AnalysisReport> {
    Json(AnalysisReport {
        title: "Test Paper Analysis".into(),
        authors: "Doe et al.".into(),
        source_id: "arXiv:2023.01234".into(),
        scores: Scores {
            methodological_rigor: 8,
            data_quality: 9,
            innovation_level: 7,
        },
        summary: AnalysisSummary {
            technical: "This is a test summary of the paper with technical details \
                        about the methodology and findings."
                .into(),
            simplified: "This is a simple explanation that anyone could understand, \
                         using analogies and plain language."
                .into(),
        },
        key_insights: vec![
            KeyInsight {
                insight: "key_findings".into(),
                level: InsightLevel::Insight,
                description: "Novel approach shows significant improvements over baseline methods."
                    .into(),
                simplified_description: "The new method works much better than the old ways of \
                                         doing things."
                    .into(),
                color: INSIGHT_COLOR.into(),
            },
            KeyInsight {
                insight: "methodology_strength".into(),
                level: InsightLevel::Insight,
                description: "Comprehensive evaluation across multiple datasets and metrics."
                    .into(),
                simplified_description: "The scientists tested their idea in many different ways \
                                         to make sure it works."
                    .into(),
                color: INSIGHT_COLOR.into(),
            },
        ],
    })
}
