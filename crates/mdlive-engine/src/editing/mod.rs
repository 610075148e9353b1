/*!
 * # Editing Core
 *
 * The document model behind the editor surface.
 *
 * ## Single Source of Truth
 * - The raw Markdown lives in one **`xi_rope::Rope`**, always ending with `\n`
 * - It is never regenerated from the decorated form; the decorated lines
 *   concatenate back to it exactly
 *
 * ## Command-Based Editing
 * - Key handling, paste and composition arrive as [`Cmd`] values
 * - Text commands compile to rope **Deltas** against the current buffer, with
 *   an optional history checkpoint applied before the visible change
 * - Every change funnels through [`Document::set`]: persist, decorate,
 *   display, caret, history
 *
 * ## History
 * - [`HistoryStack`] keeps up to 100 past states and a redo stack
 * - A new edit clears the redo stack; undo/redo replay states without
 *   recording them again
 *
 * ## Module Structure
 *
 * - **`document`**: `Document`, the set/undo/redo/apply entry points
 * - **`commands`**: `Cmd` and its delta compilation
 * - **`continuation`**: list and quote continuation on Enter
 * - **`history`**: `HistoryStack` and its stored JSON form
 * - **`patch`**: what changed after a command
 */

pub mod commands;
pub mod continuation;
pub mod document;
pub mod history;
pub mod patch;

pub use commands::{Cmd, Compiled, Edit};
pub use continuation::Continuation;
pub use document::{DEFAULT_CONTENT, Document};
pub use history::{HISTORY_LIMIT, HistoryEntry, HistoryStack};
pub use patch::Patch;
