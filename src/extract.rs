use regex::{Regex, RegexBuilder};

/// The literal anchor text to look for, compared case-insensitively.
/// Must be non-empty; an empty literal would match every anchor on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionQuery {
    pub anchor_text: String,
}

impl ExtractionQuery {
    pub fn new(anchor_text: &str) -> Self {
        ExtractionQuery {
            anchor_text: anchor_text.to_string(),
        }
    }

    /// Builds the anchor pattern with the target text embedded as an escaped
    /// literal. The skeleton around it is fixed, so escaping keeps the whole
    /// pattern valid for any input text.
    pub(crate) fn pattern(&self) -> Regex {
        let pattern = format!(
            r#"<a[^>]*href=["'](.*?)["'][^>]*>{}"#,
            regex::escape(&self.anchor_text)
        );
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("Invalid anchor pattern")
    }
}

/// Scans the raw html text and collects the href of every anchor tag whose
/// text follows the opening tag, in document order. Duplicates are kept.
///
/// This is a plain regex scan, not an html parse. Markup sitting between the
/// `>` and the anchor text breaks the match, as does an href using no quotes
/// at all. That sensitivity is intended.
pub fn extract_links(html: &str, query: &ExtractionQuery) -> Vec<String> {
    query
        .pattern()
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
