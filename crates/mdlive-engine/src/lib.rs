pub mod editing;
pub mod io;
pub mod parsing;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, HistoryEntry, HistoryStack, Patch};
pub use io::{Export, FileStore, MemoryStore, Store};
pub use parsing::{Rendering, decorate, decorate_text};
pub use view::{CaretMapper, View, ViewState};
