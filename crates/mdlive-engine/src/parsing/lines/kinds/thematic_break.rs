/// Horizontal rule: a line made only of three or more `-`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const DASH: char = '-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        line.len() >= Self::MIN_LEN && line.chars().all(|c| c == Self::DASH)
    }
}
