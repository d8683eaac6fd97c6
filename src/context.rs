//! Application Context
//!
//! Shared state provided via Leptos Context API. Views send intents here;
//! the controller mutates and persists, then the store gets a new snapshot.

use leptos::prelude::*;
use todo_core::{ItemId, TodoConfig, TodoList};

use crate::local_storage::BrowserStorage;
use crate::store::{store_apply_snapshot, TodoState, TodoStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Collection controller, single source of truth
    list: StoredValue<TodoList<BrowserStorage>>,
    /// Snapshot the views render from
    pub store: TodoStore,
}

impl TodoContext {
    /// Hydrate the controller from local storage and seed the store
    pub fn init(config: &TodoConfig) -> Self {
        let list = TodoList::load(BrowserStorage, config);
        tracing::info!(count = list.len(), key = %config.storage_key, "todo list ready");
        let store = TodoStore::new(TodoState::from(list.snapshot()));
        Self {
            list: StoredValue::new(list),
            store,
        }
    }

    /// Add an item; false when the text was rejected
    pub fn add(&self, text: &str) -> bool {
        let mut added = None;
        self.list.update_value(|list| added = list.add(text));
        self.refresh();
        added.is_some()
    }

    pub fn toggle(&self, id: &ItemId) {
        self.list.update_value(|list| list.toggle(id));
        self.refresh();
    }

    pub fn edit(&self, id: &ItemId, text: &str) {
        self.list.update_value(|list| list.edit(id, text));
        self.refresh();
    }

    pub fn delete(&self, id: &ItemId) {
        self.list.update_value(|list| list.delete(id));
        self.refresh();
    }

    /// Push a fresh snapshot to the views
    fn refresh(&self) {
        let snapshot = self.list.with_value(|list| list.snapshot());
        store_apply_snapshot(&self.store, snapshot);
    }
}

/// Get the todo context
pub fn use_todos() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
