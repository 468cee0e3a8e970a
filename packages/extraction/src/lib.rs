//! Paper content extraction and analysis pipeline.
//!
//! Given a paper URL, this crate classifies the source, fetches and extracts
//! the content (PDF or HTML), normalizes it to a fixed character budget,
//! builds an analysis prompt, and runs a single chat-completion call. Every
//! stage degrades gracefully: a failed fetch falls back to URL-only
//! prompting, a failed model call becomes a textual error result.
//!
//! # Modules
//!
//! - [`classify`] - URL classification and paper identifiers
//! - [`sources`] - source kinds and their extraction profiles
//! - [`fetch`] - source fetchers (PDF and HTML)
//! - [`html`] - selector-list HTML extraction
//! - [`normalize`] - whitespace collapsing and length capping
//! - [`prompts`] - analysis prompt templates
//! - [`report`] - typed response schemas
//! - [`analyzer`] - orchestration
//! - [`ai`] - chat-model abstraction
//! - [`testing`] - mocks for tests

pub mod ai;
pub mod analyzer;
pub mod classify;
pub mod error;
pub mod fetch;
pub mod html;
pub mod normalize;
pub mod prompts;
pub mod report;
pub mod sources;
pub mod testing;

// Re-export core types at crate root
pub use ai::{ChatModel, ModelError, UnconfiguredModel};
pub use analyzer::{AnalysisKind, AnalysisRequest, Analyzer};
pub use classify::{arxiv_id, classify, paper_id, PaperId};
pub use error::{FetchError, FetchResult};
pub use fetch::{arxiv_pdf_url, ContentFetcher, HttpFetcher};
pub use normalize::{normalize_extracted, MAX_TEXT_CHARS, TRUNCATION_MARKER};
pub use report::{AnalysisReport, KeyInsight, QuickSummary, Scores};
pub use sources::{SourceKind, SourceProfile};

#[cfg(feature = "openai")]
pub use ai::OpenAiModel;
