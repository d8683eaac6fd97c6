//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store only
//! ever receives whole snapshots from the controller; views never write it.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Item, Progress, TodoSnapshot};

/// Latest snapshot of the todo collection
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items, most recent first
    pub items: Vec<Item>,
    /// Completed/total counts
    pub progress: Progress,
}

impl From<TodoSnapshot> for TodoState {
    fn from(snapshot: TodoSnapshot) -> Self {
        Self {
            items: snapshot.items,
            progress: snapshot.progress,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the store contents with a fresh snapshot
pub fn store_apply_snapshot(store: &TodoStore, snapshot: TodoSnapshot) {
    let TodoState { items, progress } = snapshot.into();
    *store.items().write() = items;
    *store.progress().write() = progress;
}

/// Items in display order (tracked)
pub fn store_items(store: &TodoStore) -> Vec<Item> {
    store.items().get()
}

/// Header counts (tracked)
pub fn store_progress(store: &TodoStore) -> Progress {
    store.progress().get()
}

/// Whether the collection is empty (tracked)
pub fn store_is_empty(store: &TodoStore) -> bool {
    store.items().with(|items| items.is_empty())
}
