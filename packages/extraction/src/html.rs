//! HTML text extraction via CSS selector lists.
//!
//! A page is reduced to up to three sections (title, abstract, content)
//! according to the source's [`SourceProfile`]. Selector lists are tried in
//! order; when no content container matches, the concatenated text of every
//! paragraph element is the fallback.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::sources::SourceProfile;

/// Sections pulled out of one HTML page.
///
/// `pdf_link` is only populated when the profile asks for it and no content
/// was found; the caller decides whether to chase it.
#[derive(Debug)]
pub struct PageExtract {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub content: Option<String>,
    pub pdf_link: Option<String>,
}

impl PageExtract {
    /// Extract sections from an HTML document according to `profile`.
    ///
    /// `base_url` resolves relative PDF links.
    pub fn from_html(profile: &SourceProfile, html: &str, base_url: &str) -> Self {
        let doc = Html::parse_document(html);

        let title = page_title(&doc);
        let abstract_text = first_selector_text(&doc, profile.abstract_selectors);
        let content =
            first_selector_text(&doc, profile.content_selectors).or_else(|| paragraphs_text(&doc));

        let pdf_link = if content.is_none() && profile.follow_pdf_links {
            first_pdf_link(&doc, base_url)
        } else {
            None
        };

        Self {
            title,
            abstract_text,
            content,
            pdf_link,
        }
    }
}

/// Join the extracted sections into the text handed to the normalizer.
///
/// Returns `None` when every section is empty, meaning the page had nothing
/// usable.
pub fn compose_sections(
    title: Option<String>,
    abstract_text: Option<String>,
    content: Option<String>,
) -> Option<String> {
    let mut sections = Vec::new();
    if let Some(title) = title {
        sections.push(format!("Title: {title}"));
    }
    if let Some(abstract_text) = abstract_text {
        sections.push(format!("Abstract: {abstract_text}"));
    }
    if let Some(content) = content {
        sections.push(format!("Content: {content}"));
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

/// Title from the first `h1`, falling back to the document `<title>`.
fn page_title(doc: &Html) -> Option<String> {
    first_selector_text(doc, &["h1"]).or_else(|| first_selector_text(doc, &["title"]))
}

/// Text of the first element matching any selector in the list, in order.
pub fn first_selector_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(element) = doc.select(&selector).next() {
            if let Some(text) = non_empty(element_text(&element)) {
                return Some(text);
            }
        }
    }
    None
}

/// Concatenated text of every paragraph element.
pub fn paragraphs_text(doc: &Html) -> Option<String> {
    let selector = Selector::parse("p").ok()?;
    let text = doc
        .select(&selector)
        .map(|p| element_text(&p))
        .collect::<Vec<_>>()
        .join("\n");
    non_empty(text)
}

/// First anchor whose href ends in `.pdf`, resolved against `base_url`.
pub fn first_pdf_link(doc: &Html, base_url: &str) -> Option<String> {
    let selector = Selector::parse("a[href]").ok()?;
    let base = Url::parse(base_url).ok()?;

    for anchor in doc.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.to_ascii_lowercase().ends_with(".pdf") {
            continue;
        }
        if let Ok(resolved) = base.join(href) {
            return Some(resolved.to_string());
        }
    }
    None
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
