//! Collaborators at the edge of the engine: session persistence and export.

pub mod export;
pub mod store;

pub use export::{Export, ExportError};
pub use store::{FileStore, MemoryStore, Store, StoreError, keys};
