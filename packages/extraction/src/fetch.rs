//! Source fetchers: retrieve a paper (PDF or HTML) and produce plain text.
//!
//! One fetch routine serves every source; the per-source differences live in
//! [`crate::sources::SourceProfile`] data. All failures are absorbed at the
//! [`ContentFetcher`] boundary: the cause is logged, the caller sees
//! "no text".

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::html::{compose_sections, PageExtract};
use crate::sources::SourceKind;

/// Request timeout for scraping fetches, in seconds. No retry after it.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Some publishers refuse requests with obvious bot user agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Retrieves and extracts paper text for a classified URL.
///
/// Implementations absorb their own failures; `None` means "no text
/// extracted" and the pipeline degrades to URL-only prompting.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, kind: SourceKind, url: &str) -> Option<String>;
}

/// The real fetcher: one HTTP round trip per document, no retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    async fn try_fetch(&self, kind: SourceKind, url: &str) -> FetchResult<String> {
        match kind {
            SourceKind::Arxiv => self.fetch_pdf_text(&arxiv_pdf_url(url)).await,
            _ if url.to_ascii_lowercase().ends_with(".pdf") => self.fetch_pdf_text(url).await,
            _ => self.fetch_page_text(kind, url).await,
        }
    }

    async fn get(&self, url: &str) -> FetchResult<reqwest::Response> {
        debug!(url = %url, "fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Download a PDF and decode its text.
    async fn fetch_pdf_text(&self, url: &str) -> FetchResult<String> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| FetchError::Pdf(e.to_string()))
    }

    /// Fetch an HTML page and reduce it to title/abstract/content sections.
    ///
    /// When the profile allows it and no content container matched, the
    /// first linked PDF stands in for the content.
    async fn fetch_page_text(&self, kind: SourceKind, url: &str) -> FetchResult<String> {
        let html = self
            .get(url)
            .await?
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let page = PageExtract::from_html(kind.profile(), &html, url);

        let content = match (page.content, page.pdf_link) {
            (Some(content), _) => Some(content),
            (None, Some(pdf_url)) => {
                debug!(url = %url, pdf_url = %pdf_url, "no content container, chasing linked PDF");
                Some(self.fetch_pdf_text(&pdf_url).await?)
            }
            (None, None) => None,
        };

        compose_sections(page.title, page.abstract_text, content).ok_or_else(|| {
            FetchError::NoContent {
                url: url.to_string(),
            }
        })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, kind: SourceKind, url: &str) -> Option<String> {
        match self.try_fetch(kind, url).await {
            Ok(text) => {
                debug!(url = %url, chars = text.chars().count(), "extracted paper text");
                Some(text)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed");
                None
            }
        }
    }
}

/// Map an arXiv URL to its PDF form.
///
/// Abstract pages swap `/abs/` for `/pdf/` and gain a `.pdf` suffix;
/// extensionless `/pdf/` URLs gain the suffix; anything else is already a
/// direct document URL.
pub fn arxiv_pdf_url(url: &str) -> String {
    if url.contains("/abs/") {
        format!("{}.pdf", url.replace("/abs/", "/pdf/"))
    } else if url.contains("/pdf/") && !url.ends_with(".pdf") {
        format!("{url}.pdf")
    } else {
        url.to_string()
    }
}
