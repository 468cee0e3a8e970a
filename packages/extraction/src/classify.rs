//! URL classification and paper identifiers.
//!
//! Classification is pure and total: every URL maps to exactly one
//! [`SourceKind`], defaulting to [`SourceKind::Generic`]. Identifier
//! extraction is best-effort; a miss is not an error.

use std::fmt;

use regex::Regex;

use crate::sources::SourceKind;

/// A displayable paper identifier derived from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperId {
    pub source: SourceKind,
    pub id: String,
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source.id_prefix(), self.id)
    }
}

/// Classify a URL into a source kind.
///
/// Precedence: arXiv (host patterns and bare identifiers), then PhilPapers,
/// then Harvard math, then personal-essay paths, else generic.
pub fn classify(url: &str) -> SourceKind {
    if url.contains("arxiv.org") || is_bare_arxiv_id(url) {
        SourceKind::Arxiv
    } else if url.contains("philpapers.org") {
        SourceKind::PhilPapers
    } else if url.contains("math.harvard.edu") {
        SourceKind::HarvardMath
    } else if url.contains("/essays/") || url.contains("/essay/") {
        SourceKind::Essay
    } else {
        SourceKind::Generic
    }
}

/// Extract a displayable identifier for a URL, if one can be recognized.
pub fn paper_id(url: &str) -> Option<PaperId> {
    let source = classify(url);
    let id = match source {
        SourceKind::Arxiv => arxiv_id(url),
        SourceKind::PhilPapers => capture(r"philpapers\.org/rec/([A-Za-z0-9_-]+)", url),
        SourceKind::HarvardMath => capture(r"math\.harvard\.edu/~?([A-Za-z0-9_.-]+)", url),
        SourceKind::Essay => capture(r"/essays?/([A-Za-z0-9_-]+)", url),
        SourceKind::Generic => None,
    }?;
    Some(PaperId { source, id })
}

/// Extract an arXiv identifier from a URL.
///
/// Tries path forms first (abstract and PDF, new- and old-style ids), then
/// bare identifiers anywhere in the string.
pub fn arxiv_id(url: &str) -> Option<String> {
    const PATTERNS: &[&str] = &[
        r"arxiv\.org/abs/(\d+\.\d+)",
        r"arxiv\.org/pdf/(\d+\.\d+)",
        r"arxiv\.org/abs/(cs/\d+)",
        r"arxiv\.org/pdf/(cs/\d+)",
        r"(\d{4}\.\d{4,5})",
        r"(cs/\d+)",
    ];

    for pattern in PATTERNS {
        if let Some(id) = capture(pattern, url) {
            return Some(id);
        }
    }
    None
}

fn is_bare_arxiv_id(url: &str) -> bool {
    let bare = Regex::new(r"^(\d{4}\.\d{4,5})(v\d+)?$").unwrap();
    let old_style = Regex::new(r"^cs/\d+$").unwrap();
    bare.is_match(url) || old_style.is_match(url)
}

fn capture(pattern: &str, url: &str) -> Option<String> {
    Regex::new(pattern)
        .unwrap()
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_arxiv() {
        assert_eq!(classify("https://arxiv.org/abs/1706.03762"), SourceKind::Arxiv);
        assert_eq!(
            classify("https://arxiv.org/pdf/1706.03762.pdf"),
            SourceKind::Arxiv
        );
        assert_eq!(classify("1706.03762"), SourceKind::Arxiv);
        assert_eq!(classify("cs/9901001"), SourceKind::Arxiv);
    }

    #[test]
    fn test_classify_other_sources() {
        assert_eq!(
            classify("https://philpapers.org/rec/ABC123"),
            SourceKind::PhilPapers
        );
        assert_eq!(
            classify("https://people.math.harvard.edu/~knill/papers/dynamics.pdf"),
            SourceKind::HarvardMath
        );
        assert_eq!(
            classify("https://www.example.org/essays/on-thinking"),
            SourceKind::Essay
        );
        assert_eq!(classify("https://example.com/page"), SourceKind::Generic);
    }

    #[test]
    fn test_paper_id_arxiv() {
        let id = paper_id("https://arxiv.org/abs/1706.03762").unwrap();
        assert_eq!(id.to_string(), "arXiv:1706.03762");

        let pdf = paper_id("https://arxiv.org/pdf/2301.07041.pdf").unwrap();
        assert_eq!(pdf.to_string(), "arXiv:2301.07041");

        let old = paper_id("https://arxiv.org/abs/cs/9901001").unwrap();
        assert_eq!(old.to_string(), "arXiv:cs/9901001");
    }

    #[test]
    fn test_paper_id_philpapers() {
        let id = paper_id("https://philpapers.org/rec/ABC123").unwrap();
        assert_eq!(id.to_string(), "PhilPapers:ABC123");
    }

    #[test]
    fn test_paper_id_harvard_and_essay() {
        let harvard = paper_id("https://people.math.harvard.edu/~knill/papers/x.pdf").unwrap();
        assert_eq!(harvard.to_string(), "Harvard:knill");

        let essay = paper_id("https://example.org/essays/on-thinking").unwrap();
        assert_eq!(essay.to_string(), "Essay:on-thinking");
    }

    #[test]
    fn test_unrelated_url_has_no_id() {
        assert_eq!(paper_id("https://example.com/page"), None);
        assert_eq!(classify("https://example.com/page"), SourceKind::Generic);
    }
}
