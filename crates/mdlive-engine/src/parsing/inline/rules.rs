use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{CodeSpan, Emphasis, Escape, Link};
use super::types::{Decorated, InlineSpan};

/// One inline substitution rule.
///
/// Rules run one after another over the whole line. Each finds leftmost,
/// non-overlapping, shortest matches and ignores marks placed by earlier
/// rules, so a later rule can match inside an earlier span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    StrongAsterisk,
    StrongUnderscore,
    EmphasisAsterisk,
    EmphasisUnderscore,
    DoubleTickCode,
    TickCode,
    Image,
    Link,
}

impl Rule {
    /// Application order.
    pub const ORDER: [Rule; 8] = [
        Rule::StrongAsterisk,
        Rule::StrongUnderscore,
        Rule::EmphasisAsterisk,
        Rule::EmphasisUnderscore,
        Rule::DoubleTickCode,
        Rule::TickCode,
        Rule::Image,
        Rule::Link,
    ];

    fn body(self) -> &'static str {
        match self {
            Rule::StrongAsterisk => Emphasis::STRONG_ASTERISK_PATTERN,
            Rule::StrongUnderscore => Emphasis::STRONG_UNDERSCORE_PATTERN,
            Rule::EmphasisAsterisk => Emphasis::ASTERISK_PATTERN,
            Rule::EmphasisUnderscore => Emphasis::UNDERSCORE_PATTERN,
            Rule::DoubleTickCode => CodeSpan::DOUBLE_PATTERN,
            Rule::TickCode => CodeSpan::SINGLE_PATTERN,
            Rule::Image => Link::IMAGE_PATTERN,
            Rule::Link => Link::LINK_PATTERN,
        }
    }

    fn pattern(self) -> &'static Regex {
        static RULE_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
        let all = RULE_REGEXES.get_or_init(|| {
            Rule::ORDER
                .iter()
                .map(|rule| {
                    Regex::new(&format!("{}{}", Escape::GUARD, rule.body()))
                        .expect("Invalid inline rule regex")
                })
                .collect()
        });
        &all[self as usize]
    }

    /// Applies this rule to `decorated`, adding marks for every match.
    ///
    /// The span starts after the one-character guard, so the guard character
    /// itself stays outside the styled text.
    pub fn apply(self, decorated: &mut Decorated) {
        let found: Vec<(usize, usize, InlineSpan, Option<String>)> = self
            .pattern()
            .captures_iter(decorated.text())
            .filter_map(|caps| {
                let start = caps.get(1)?.end();
                let end = caps.get(0)?.end();
                let (span, preview) = match self {
                    Rule::StrongAsterisk
                    | Rule::StrongUnderscore
                    | Rule::EmphasisAsterisk
                    | Rule::EmphasisUnderscore => (InlineSpan::Bold, None),
                    Rule::DoubleTickCode | Rule::TickCode => (InlineSpan::InlineCode, None),
                    Rule::Image => {
                        let src = caps.get(3)?.as_str().to_string();
                        (InlineSpan::Link { href: src.clone() }, Some(src))
                    }
                    Rule::Link => (
                        InlineSpan::Link {
                            href: caps.get(3)?.as_str().to_string(),
                        },
                        None,
                    ),
                };
                Some((start, end, span, preview))
            })
            .collect();

        for (start, end, span, preview) in found {
            decorated.wrap(start, end, span, preview);
        }
    }
}
