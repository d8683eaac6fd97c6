//! Todo Core
//!
//! Framework-free half of the todo widget:
//! - item: the todo entity and id generation
//! - list: collection controller (mutation + persistence)
//! - editor: inline edit state machine for a single row
//! - storage / codec: key-value persistence and the JSON blob format

mod codec;
mod config;
mod editor;
mod error;
mod item;
mod list;
mod storage;

pub use codec::{decode, encode};
pub use config::TodoConfig;
pub use editor::{EditKey, EditState, ItemEditor};
pub use error::{StoreError, StoreResult};
pub use item::{Item, ItemId};
pub use list::{Progress, TodoList, TodoSnapshot};
pub use storage::{KeyValueStore, MemoryStore};
