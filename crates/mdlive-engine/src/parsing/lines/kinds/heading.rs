use std::sync::OnceLock;

use regex::Regex;

/// ATX heading with owned delimiter knowledge.
pub struct Heading;

/// Captured pieces of a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingParts<'a> {
    pub level: u8,
    /// The `#` run plus the whitespace that follows it.
    pub marker: &'a str,
    pub text: &'a str,
}

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        // No space is required after the hashes, so "#tag" is a heading too.
        HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6}[ \t]*)(.*)$").expect("Invalid heading regex"))
    }

    /// Splits a heading line into level, marker and text.
    ///
    /// More than six `#` yields a level-6 heading whose text starts with the
    /// surplus `#`.
    pub fn parse(line: &str) -> Option<HeadingParts<'_>> {
        let caps = Self::pattern().captures(line)?;
        let marker = caps.get(1)?.as_str();
        let text = caps.get(2)?.as_str();
        let level = marker.chars().take_while(|c| *c == Self::MARKER).count();
        Some(HeadingParts {
            level: level.min(Self::MAX_LEVEL) as u8,
            marker,
            text,
        })
    }
}
