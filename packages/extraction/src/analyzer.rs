//! Analysis orchestration: one fetch, one prompt, one model call.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::ai::ChatModel;
use crate::classify::{classify, paper_id};
use crate::fetch::ContentFetcher;
use crate::normalize::normalize_extracted;
use crate::prompts;

/// Which analysis the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisKind {
    #[default]
    Full,
    Quick,
}

impl AnalysisKind {
    /// Parse the wire/CLI form. Anything that is not "quick" means full,
    /// matching the lenient contract of the analyze endpoint.
    pub fn from_type_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("quick") {
            AnalysisKind::Quick
        } else {
            AnalysisKind::Full
        }
    }
}

/// One analysis request; fully determines the generated prompt.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub url: String,
    pub kind: AnalysisKind,
    pub eli12: bool,
}

enum Prepared {
    /// Prompt to send to the model
    Prompt(String),
    /// Locally produced response; the model is not contacted
    Local(String),
}

/// Runs the pipeline: classify, fetch, build the prompt, call the model.
///
/// Both collaborators are injected so tests can stub the network and the
/// model independently. Model failures are absorbed into a textual error
/// result rather than escalated.
pub struct Analyzer {
    fetcher: Arc<dyn ContentFetcher>,
    model: Arc<dyn ChatModel>,
}

impl Analyzer {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, model: Arc<dyn ChatModel>) -> Self {
        Self { fetcher, model }
    }

    /// Analyze a paper, returning the model's raw text content. The content
    /// is expected to be JSON but not guaranteed; the relay deals with that.
    pub async fn analyze(&self, request: &AnalysisRequest) -> String {
        match self.prepare(request).await {
            Prepared::Prompt(prompt) => {
                match self.model.complete(prompts::SYSTEM_PROMPT, &prompt).await {
                    Ok(content) => content,
                    Err(e) => format!("Error analyzing paper: {e}"),
                }
            }
            Prepared::Local(response) => response,
        }
    }

    /// The prompt that `analyze` would send, without contacting the model.
    /// On the local quick-failure path this is the canned response itself.
    pub async fn build_prompt(&self, request: &AnalysisRequest) -> String {
        match self.prepare(request).await {
            Prepared::Prompt(prompt) => prompt,
            Prepared::Local(response) => response,
        }
    }

    async fn prepare(&self, request: &AnalysisRequest) -> Prepared {
        let source = classify(&request.url);
        let id = paper_id(&request.url);

        // Normalization happens here, at the one point every fetcher's
        // output flows through, so the prompt budget holds for any
        // ContentFetcher implementation.
        let text = self
            .fetcher
            .fetch(source, &request.url)
            .await
            .map(|raw| normalize_extracted(&raw));

        debug!(
            url = %request.url,
            source = ?source,
            id = ?id,
            extracted = text.is_some(),
            "prepared analysis input"
        );

        match (request.kind, text) {
            (AnalysisKind::Full, text) => Prepared::Prompt(prompts::full_analysis_prompt(
                &request.url,
                id.as_ref(),
                text.as_deref(),
                request.eli12,
            )),
            (AnalysisKind::Quick, Some(text)) => Prepared::Prompt(prompts::quick_summary_prompt(
                &request.url,
                &text,
                request.eli12,
            )),
            // Zero-cost local error path: no fetch result, no model call.
            (AnalysisKind::Quick, None) => Prepared::Local(quick_unavailable_response(&request.url)),
        }
    }
}

/// Deterministic quick-summary shaped payload for a failed fetch, with an
/// explicit error flag so callers can tell it apart from a real summary.
fn quick_unavailable_response(url: &str) -> String {
    json!({
        "title": "Paper Unavailable",
        "quick_summary": format!(
            "The paper content at {url} could not be retrieved, so no summary is available."
        ),
        "main_finding": "Content could not be fetched from the source.",
        "relevance": "Retry later or open the paper directly.",
        "error": "paper content could not be fetched"
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFetcher, MockModel};

    const URL: &str = "https://arxiv.org/abs/1706.03762";

    fn analyzer(fetcher: MockFetcher, model: Arc<MockModel>) -> Analyzer {
        Analyzer::new(Arc::new(fetcher), model)
    }

    #[tokio::test]
    async fn test_full_analysis_calls_model_with_text() {
        let model = Arc::new(MockModel::returning("{\"ok\":true}"));
        let a = analyzer(
            MockFetcher::new().with_page(URL, "Attention is all you need."),
            model.clone(),
        );

        let out = a
            .analyze(&AnalysisRequest {
                url: URL.into(),
                kind: AnalysisKind::Full,
                eli12: false,
            })
            .await;

        assert_eq!(out, "{\"ok\":true}");
        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].user.contains("Attention is all you need."));
        assert_eq!(calls[0].system, prompts::SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn test_model_failure_absorbed() {
        let model = Arc::new(MockModel::failing("rate limited"));
        let a = analyzer(MockFetcher::new().with_page(URL, "text"), model);

        let out = a
            .analyze(&AnalysisRequest {
                url: URL.into(),
                kind: AnalysisKind::Full,
                eli12: false,
            })
            .await;

        assert!(out.starts_with("Error analyzing paper:"));
        assert!(out.contains("rate limited"));
    }

    #[tokio::test]
    async fn test_quick_without_text_skips_model() {
        let model = Arc::new(MockModel::returning("should never be seen"));
        let a = analyzer(MockFetcher::new(), model.clone());

        let out = a
            .analyze(&AnalysisRequest {
                url: URL.into(),
                kind: AnalysisKind::Quick,
                eli12: false,
            })
            .await;

        assert_eq!(model.call_count(), 0);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed.get("error").is_some());
        assert_eq!(parsed["title"], "Paper Unavailable");
    }

    #[tokio::test]
    async fn test_build_prompt_does_not_call_model() {
        let model = Arc::new(MockModel::returning("unused"));
        let a = analyzer(MockFetcher::new(), model.clone());

        let prompt = a
            .build_prompt(&AnalysisRequest {
                url: URL.into(),
                kind: AnalysisKind::Full,
                eli12: false,
            })
            .await;

        assert_eq!(model.call_count(), 0);
        assert!(prompt.contains(URL));
        assert!(prompt.contains(prompts::URL_FALLBACK_INSTRUCTION));
    }

    #[test]
    fn test_kind_parsing_is_lenient() {
        assert_eq!(AnalysisKind::from_type_str("quick"), AnalysisKind::Quick);
        assert_eq!(AnalysisKind::from_type_str("QUICK"), AnalysisKind::Quick);
        assert_eq!(AnalysisKind::from_type_str("full"), AnalysisKind::Full);
        assert_eq!(AnalysisKind::from_type_str("banana"), AnalysisKind::Full);
    }
}
