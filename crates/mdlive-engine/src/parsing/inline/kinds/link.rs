/// Inline links and images: `[text](url)` and `![alt](url)`.
///
/// Capture group 2 of each pattern is the label, group 3 the target, once
/// the escape guard has been prepended as group 1.
pub struct Link;

impl Link {
    pub const IMAGE_PATTERN: &'static str = r"!\[([^\r]+?)\]\(([^\r]+?)\)";
    pub const LINK_PATTERN: &'static str = r"\[([^\r]+?)\]\(([^\r]+?)\)";
}

/// A backslash before an opening delimiter keeps it literal.
pub struct Escape;

impl Escape {
    /// One character of look-behind: start of line, or anything but `\`.
    pub const GUARD: &'static str = r"(^|[^\\])";
}
