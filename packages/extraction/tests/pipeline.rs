//! Pipeline tests: classification through prompt generation with stubbed
//! collaborators.

use std::sync::Arc;

use extraction::testing::{MockFetcher, MockModel};
use extraction::{
    AnalysisKind, AnalysisRequest, Analyzer, MAX_TEXT_CHARS, TRUNCATION_MARKER,
};

const ARXIV_URL: &str = "https://arxiv.org/abs/1706.03762";

fn request(url: &str, kind: AnalysisKind) -> AnalysisRequest {
    AnalysisRequest {
        url: url.into(),
        kind,
        eli12: false,
    }
}

#[tokio::test]
async fn full_prompt_embeds_normalized_text() {
    let model = Arc::new(MockModel::returning("{}"));
    let fetcher = MockFetcher::new().with_page(ARXIV_URL, "Attention   is\n\nall you  need.");
    let analyzer = Analyzer::new(Arc::new(fetcher), model.clone());

    analyzer.analyze(&request(ARXIV_URL, AnalysisKind::Full)).await;

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    // Whitespace runs collapsed before the text reaches the template.
    assert!(calls[0].user.contains("Attention is all you need."));
    assert!(calls[0].user.contains("arXiv:1706.03762"));
}

#[tokio::test]
async fn oversized_text_is_capped_before_prompting() {
    let model = Arc::new(MockModel::returning("{}"));
    let huge = "word ".repeat(10_000);
    let fetcher = MockFetcher::new().with_page(ARXIV_URL, huge);
    let analyzer = Analyzer::new(Arc::new(fetcher), model.clone());

    analyzer.analyze(&request(ARXIV_URL, AnalysisKind::Full)).await;

    let user = model.calls()[0].user.clone();
    let marker_at = user.find(TRUNCATION_MARKER).expect("truncation marker in prompt");
    // The marker sits right after the capped text, not at the raw length.
    assert!(marker_at < user.len());
    assert!(user.contains(&"word ".repeat(100)));
    let embedded_start = user.find("word").unwrap();
    let embedded = &user[embedded_start..marker_at + TRUNCATION_MARKER.len()];
    assert_eq!(
        embedded.chars().count(),
        MAX_TEXT_CHARS + TRUNCATION_MARKER.chars().count()
    );
}

#[tokio::test]
async fn failed_fetch_falls_back_to_url_prompting() {
    let model = Arc::new(MockModel::returning("{}"));
    let analyzer = Analyzer::new(Arc::new(MockFetcher::new()), model.clone());

    analyzer.analyze(&request(ARXIV_URL, AnalysisKind::Full)).await;

    let user = model.calls()[0].user.clone();
    assert!(user.contains(ARXIV_URL));
    assert!(user.contains("If you cannot access the URL directly"));
    assert!(!user.contains("PAPER CONTENT:"));
}

#[tokio::test]
async fn quick_with_text_gets_compact_prompt() {
    let model = Arc::new(MockModel::returning("{}"));
    let fetcher = MockFetcher::new().with_page(ARXIV_URL, "Transformers.");
    let analyzer = Analyzer::new(Arc::new(fetcher), model.clone());

    analyzer.analyze(&request(ARXIV_URL, AnalysisKind::Quick)).await;

    let user = model.calls()[0].user.clone();
    assert!(user.contains("quick 2-minute summary"));
    assert!(user.contains("Transformers."));
    assert!(!user.contains("SCORING GUIDELINES"));
}
