/// Inline code with owned delimiter knowledge.
///
/// Double-backtick spans are matched before single ones so that a literal
/// backtick can sit inside ``` ``a`b`` ```.
pub struct CodeSpan;

impl CodeSpan {
    pub const DOUBLE_PATTERN: &'static str = r"``([^\r]+?)``";
    pub const SINGLE_PATTERN: &'static str = r"`([^\r]+?)`";
}
