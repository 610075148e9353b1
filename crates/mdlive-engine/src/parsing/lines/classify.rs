use super::kinds::{BlockQuote, CodeFence, FenceSide, Heading, ListItem, ThematicBreak};

/// State carried from one line to the next while classifying a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    /// Between an opening and a closing fence.
    pub in_code_block: bool,
    /// After a blockquote opener and before the next empty line.
    pub in_quote: bool,
}

/// Classification of a single line with its captured groups.
///
/// Captures borrow from the classified line, and concatenating every field
/// of a variant in declaration order reproduces the line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Fence {
        side: FenceSide,
        text: &'a str,
    },
    Heading {
        level: u8,
        marker: &'a str,
        text: &'a str,
    },
    QuoteStart {
        marker: &'a str,
        text: &'a str,
    },
    QuoteContinue {
        text: &'a str,
    },
    Bullet {
        indent: &'a str,
        marker: char,
        gap: &'a str,
        text: &'a str,
    },
    Ordered {
        indent: &'a str,
        number: &'a str,
        gap: &'a str,
        text: &'a str,
    },
    Rule {
        text: &'a str,
    },
    Plain {
        text: &'a str,
    },
}

/// Classifies lines in document order, first matching rule wins.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies `line` and advances `state` for the next line.
    ///
    /// Rule order: fence toggle, heading (outside fences only), quote
    /// opener, quote continuation, bullet item, ordered item, horizontal
    /// rule, plain text.
    pub fn classify<'a>(&self, line: &'a str, state: &mut ClassifierState) -> LineClass<'a> {
        if CodeFence::toggles(line) {
            let side = FenceSide::after(state.in_code_block);
            state.in_code_block = side == FenceSide::Open;
            return LineClass::Fence { side, text: line };
        }

        if !state.in_code_block
            && let Some(h) = Heading::parse(line)
        {
            return LineClass::Heading {
                level: h.level,
                marker: h.marker,
                text: h.text,
            };
        }

        if let Some(q) = BlockQuote::parse(line) {
            state.in_quote = true;
            return LineClass::QuoteStart {
                marker: q.marker,
                text: q.text,
            };
        }

        if state.in_quote {
            if BlockQuote::ends_on(line) {
                state.in_quote = false;
            }
            return LineClass::QuoteContinue { text: line };
        }

        if let Some(b) = ListItem::parse_bullet(line) {
            return LineClass::Bullet {
                indent: b.indent,
                marker: b.marker,
                gap: b.gap,
                text: b.text,
            };
        }

        if let Some(o) = ListItem::parse_ordered(line) {
            return LineClass::Ordered {
                indent: o.indent,
                number: o.number,
                gap: o.gap,
                text: o.text,
            };
        }

        if ThematicBreak::matches(line) {
            return LineClass::Rule { text: line };
        }

        LineClass::Plain { text: line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify_all(lines: &[&'static str]) -> Vec<LineClass<'static>> {
        let classifier = MarkdownLineClassifier;
        let mut state = ClassifierState::default();
        lines
            .iter()
            .map(|l| classifier.classify(l, &mut state))
            .collect()
    }

    #[test]
    fn heading_and_bullets() {
        assert_eq!(
            classify_all(&["# Title", "- item one", "- item two"]),
            vec![
                LineClass::Heading {
                    level: 1,
                    marker: "# ",
                    text: "Title"
                },
                LineClass::Bullet {
                    indent: "",
                    marker: '-',
                    gap: " ",
                    text: "item one"
                },
                LineClass::Bullet {
                    indent: "",
                    marker: '-',
                    gap: " ",
                    text: "item two"
                },
            ]
        );
    }

    #[test]
    fn fence_toggles_and_guards_headings() {
        assert_eq!(
            classify_all(&["```", "# not heading", "```", "# heading"]),
            vec![
                LineClass::Fence {
                    side: FenceSide::Open,
                    text: "```"
                },
                LineClass::Plain {
                    text: "# not heading"
                },
                LineClass::Fence {
                    side: FenceSide::Close,
                    text: "```"
                },
                LineClass::Heading {
                    level: 1,
                    marker: "# ",
                    text: "heading"
                },
            ]
        );
    }

    #[test]
    fn fence_body_still_tags_list_items() {
        let classes = classify_all(&["```", "- x", "```"]);
        assert!(matches!(classes[1], LineClass::Bullet { marker: '-', .. }));
    }

    #[test]
    fn quote_carries_until_empty_line() {
        assert_eq!(
            classify_all(&["> start", "- still quoted", "", "- listed"]),
            vec![
                LineClass::QuoteStart {
                    marker: "> ",
                    text: "start"
                },
                LineClass::QuoteContinue {
                    text: "- still quoted"
                },
                LineClass::QuoteContinue { text: "" },
                LineClass::Bullet {
                    indent: "",
                    marker: '-',
                    gap: " ",
                    text: "listed"
                },
            ]
        );
    }

    #[test]
    fn heading_wins_inside_quote() {
        let classes = classify_all(&["> q", "## h", "tail"]);
        assert!(matches!(classes[1], LineClass::Heading { level: 2, .. }));
        assert_eq!(classes[2], LineClass::QuoteContinue { text: "tail" });
    }

    #[test]
    fn ordered_rule_and_plain() {
        assert_eq!(
            classify_all(&["12. twelve", "---", "text"]),
            vec![
                LineClass::Ordered {
                    indent: "",
                    number: "12",
                    gap: " ",
                    text: "twelve"
                },
                LineClass::Rule { text: "---" },
                LineClass::Plain { text: "text" },
            ]
        );
    }

    #[test]
    fn fence_state_survives_quote() {
        let classifier = MarkdownLineClassifier;
        let mut state = ClassifierState::default();
        classifier.classify("> a", &mut state);
        classifier.classify("```", &mut state);
        assert_eq!(
            state,
            ClassifierState {
                in_code_block: true,
                in_quote: true
            }
        );
    }
}
