use crate::parsing::lines::kinds::{ListItem, ListPrefix};

/// What a new line should start with after Enter on a list or quote line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// `N. ` with the number one past the current item.
    Ordered { indent: String, next: u64 },
    /// The same bullet (or `>`) as the current line.
    Bullet { indent: String, marker: char },
}

impl Continuation {
    /// Inspects the text of the current line up to the caret.
    ///
    /// Ordered items are checked first. An item number too large to
    /// increment yields no continuation.
    pub fn detect(line_before_caret: &str) -> Option<Self> {
        match ListItem::prefix(line_before_caret)? {
            ListPrefix::Ordered { indent, number } => {
                let next = number.parse::<u64>().ok()?.checked_add(1)?;
                Some(Continuation::Ordered {
                    indent: indent.to_string(),
                    next,
                })
            }
            ListPrefix::Bullet { indent, marker } => Some(Continuation::Bullet {
                indent: indent.to_string(),
                marker,
            }),
        }
    }

    /// Text inserted after the newline.
    pub fn prefix(&self) -> String {
        match self {
            Continuation::Ordered { indent, next } => {
                format!("{indent}{next}{} ", ListItem::ORDERED_DELIMITER)
            }
            Continuation::Bullet { indent, marker } => format!("{indent}{marker} "),
        }
    }
}
