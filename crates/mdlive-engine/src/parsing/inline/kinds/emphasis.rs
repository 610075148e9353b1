/// Strong and emphasis delimiters.
///
/// Both strengths are displayed bold; only the delimiter differs.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG_ASTERISK_PATTERN: &'static str = r"\*\*([^\r]+?)\*\*";
    pub const STRONG_UNDERSCORE_PATTERN: &'static str = r"__([^\r]+?)__";
    pub const ASTERISK_PATTERN: &'static str = r"\*([^\r]+?)\*";
    pub const UNDERSCORE_PATTERN: &'static str = r"_([^\r]+?)_";
}
