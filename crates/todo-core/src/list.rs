//! Collection Controller
//!
//! Single owner of the todo collection. Every mutation is followed by a
//! write of the whole collection to the key-value store; none of them
//! reports failure to the caller.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::codec;
use crate::config::TodoConfig;
use crate::item::{normalize_text, Item, ItemId};
use crate::storage::KeyValueStore;

/// Completed/total counts shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(items: &[Item]) -> Self {
        Self {
            completed: items.iter().filter(|item| item.completed).count(),
            total: items.len(),
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// Immutable copy of the collection handed to the view layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoSnapshot {
    pub items: Vec<Item>,
    pub progress: Progress,
}

/// The todo collection plus its persistence target
#[derive(Debug)]
pub struct TodoList<S: KeyValueStore> {
    items: Vec<Item>,
    storage: S,
    storage_key: String,
    /// Highest numeric id handed out or loaded this session
    last_issued: Option<i64>,
}

impl<S: KeyValueStore> TodoList<S> {
    /// Hydrate from storage. Absent, unreadable or malformed data starts empty.
    pub fn load(storage: S, config: &TodoConfig) -> Self {
        let key = config.storage_key.clone();
        let items = match storage.get(&key) {
            Ok(Some(raw)) => codec::decode(&raw).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "discarding persisted todos");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "todo storage not readable");
                Vec::new()
            }
        };
        let items = retain_valid(items);
        debug!(key = %key, count = items.len(), "loaded todos");
        let last_issued = items.iter().filter_map(|item| item.id.millis()).max();
        Self {
            items,
            storage,
            storage_key: key,
            last_issued,
        }
    }

    /// Add a new item at the front; blank text is ignored
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        self.add_at(text, Utc::now())
    }

    /// `add` with an explicit creation time
    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<ItemId> {
        let text = normalize_text(text)?;
        let mut last = self.last_issued;
        let (id, issued) = loop {
            let (id, issued) = ItemId::generate(now, last);
            if self.get(&id).is_none() {
                break (id, issued);
            }
            last = Some(issued);
        };
        self.last_issued = Some(self.last_issued.map_or(issued, |prev| prev.max(issued)));
        debug!(id = %id, "add todo");
        self.items.insert(0, Item::new(id.clone(), text, now));
        self.persist();
        Some(id)
    }

    /// Flip the completed flag of `id`
    pub fn toggle(&mut self, id: &ItemId) {
        if let Some(item) = self.find_mut(id) {
            item.completed = !item.completed;
            debug!(id = %id, completed = item.completed, "toggle todo");
        }
        self.persist();
    }

    /// Replace the text of `id`. Blank text leaves the item untouched.
    pub fn edit(&mut self, id: &ItemId, new_text: &str) {
        if let Some(text) = normalize_text(new_text) {
            if let Some(item) = self.find_mut(id) {
                debug!(id = %id, "edit todo");
                item.text = text;
            }
        }
        self.persist();
    }

    pub fn delete(&mut self, id: &ItemId) {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() != before {
            debug!(id = %id, "delete todo");
        }
        self.persist();
    }

    /// Write the whole collection under the configured key
    pub fn persist(&self) {
        let result = codec::encode(&self.items)
            .and_then(|raw| self.storage.set(&self.storage_key, &raw));
        if let Err(e) = result {
            warn!(key = %self.storage_key, error = %e, "failed to persist todos");
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }

    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            items: self.items.clone(),
            progress: self.progress(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn find_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }
}

/// Trim loaded text and drop records whose text is blank
fn retain_valid(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .filter_map(|mut item| match normalize_text(&item.text) {
            Some(text) => {
                item.text = text;
                Some(item)
            }
            None => {
                warn!(id = %item.id, "dropping persisted todo with blank text");
                None
            }
        })
        .collect()
}
