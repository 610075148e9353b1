/// Fenced code delimiter with owned syntax knowledge.
///
/// Only backtick fences are recognised, and only at column zero. The info
/// string after the fence is kept as ordinary line text.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if `line` toggles the fenced-code state.
    pub fn toggles(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}

/// Which side of a fenced block a fence line sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSide {
    Open,
    Close,
}

impl FenceSide {
    /// The side a fence lands on given whether a block was already open.
    pub fn after(in_code_block: bool) -> Self {
        if in_code_block {
            FenceSide::Close
        } else {
            FenceSide::Open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::toggles("```rust"));
        assert!(CodeFence::toggles("````"));
    }

    #[test]
    fn indented_fence_does_not_toggle() {
        assert!(!CodeFence::toggles("  ```"));
    }

    #[test]
    fn tilde_fence_not_recognised() {
        assert!(!CodeFence::toggles("~~~"));
    }

    #[test]
    fn side_follows_state() {
        assert_eq!(FenceSide::after(false), FenceSide::Open);
        assert_eq!(FenceSide::after(true), FenceSide::Close);
    }
}
