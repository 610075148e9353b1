use std::sync::OnceLock;

use regex::Regex;

/// Blockquote opener with owned delimiter knowledge.
///
/// A quote opens on `>` followed by at least one whitespace character and
/// stays open for following lines until an empty line.
pub struct BlockQuote;

/// Captured pieces of a blockquote opener line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteParts<'a> {
    /// `>` plus the whitespace that follows it.
    pub marker: &'a str,
    pub text: &'a str,
}

impl BlockQuote {
    fn pattern() -> &'static Regex {
        static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
        QUOTE_REGEX.get_or_init(|| Regex::new(r"^(>\s+)(.*)$").expect("Invalid blockquote regex"))
    }

    pub fn parse(line: &str) -> Option<QuoteParts<'_>> {
        let caps = Self::pattern().captures(line)?;
        Some(QuoteParts {
            marker: caps.get(1)?.as_str(),
            text: caps.get(2)?.as_str(),
        })
    }

    /// An empty line ends a quote that is carried across lines.
    pub fn ends_on(line: &str) -> bool {
        line.is_empty()
    }
}
