use std::sync::OnceLock;

use regex::Regex;

/// List items with owned marker knowledge.
///
/// Bullet items accept `-`, `*`, `+` and also `>` when no quote is open.
/// Ordered items are ASCII digits followed by `.`. Both require whitespace
/// after the marker.
pub struct ListItem;

/// Captured pieces of a bullet item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletParts<'a> {
    pub indent: &'a str,
    pub marker: char,
    pub gap: &'a str,
    pub text: &'a str,
}

/// Captured pieces of an ordered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedParts<'a> {
    pub indent: &'a str,
    /// The literal digits, leading zeros included.
    pub number: &'a str,
    pub gap: &'a str,
    pub text: &'a str,
}

/// The structural prefix of a list line, as used to continue it on Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPrefix<'a> {
    Ordered { indent: &'a str, number: &'a str },
    Bullet { indent: &'a str, marker: char },
}

impl ListItem {
    pub const ORDERED_DELIMITER: char = '.';

    fn bullet_pattern() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| {
            Regex::new(r"^(\s*)([>\-*+])(\s+)(.*)$").expect("Invalid bullet item regex")
        })
    }

    fn ordered_pattern() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX.get_or_init(|| {
            Regex::new(r"^(\s*)([0-9]+)\.(\s+)(.*)$").expect("Invalid ordered item regex")
        })
    }

    fn ordered_prefix_pattern() -> &'static Regex {
        static ORDERED_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_PREFIX_REGEX.get_or_init(|| {
            Regex::new(r"^(\s*)([0-9]+)\.\s+").expect("Invalid ordered prefix regex")
        })
    }

    fn bullet_prefix_pattern() -> &'static Regex {
        static BULLET_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_PREFIX_REGEX.get_or_init(|| {
            Regex::new(r"^(\s*)([>\-*+])\s+").expect("Invalid bullet prefix regex")
        })
    }

    pub fn parse_bullet(line: &str) -> Option<BulletParts<'_>> {
        let caps = Self::bullet_pattern().captures(line)?;
        Some(BulletParts {
            indent: caps.get(1)?.as_str(),
            marker: caps.get(2)?.as_str().chars().next()?,
            gap: caps.get(3)?.as_str(),
            text: caps.get(4)?.as_str(),
        })
    }

    pub fn parse_ordered(line: &str) -> Option<OrderedParts<'_>> {
        let caps = Self::ordered_pattern().captures(line)?;
        Some(OrderedParts {
            indent: caps.get(1)?.as_str(),
            number: caps.get(2)?.as_str(),
            gap: caps.get(3)?.as_str(),
            text: caps.get(4)?.as_str(),
        })
    }

    /// Detects a list prefix at the start of a (possibly partial) line.
    ///
    /// Ordered prefixes are tried first, so `"1. - x"` continues as ordered.
    pub fn prefix(line: &str) -> Option<ListPrefix<'_>> {
        if let Some(caps) = Self::ordered_prefix_pattern().captures(line) {
            return Some(ListPrefix::Ordered {
                indent: caps.get(1)?.as_str(),
                number: caps.get(2)?.as_str(),
            });
        }
        let caps = Self::bullet_prefix_pattern().captures(line)?;
        Some(ListPrefix::Bullet {
            indent: caps.get(1)?.as_str(),
            marker: caps.get(2)?.as_str().chars().next()?,
        })
    }
}
