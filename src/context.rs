//! Application Context
//!
//! Shared state provided via Leptos Context API. Components reach the
//! persisted store only through the methods here.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::bookmark_store::{BookmarkStore, StoreResult};
use crate::drag::DropAction;
use crate::models::{Bookmark, BookmarkDraft, BookmarkPatch, Category, CategoryDraft};
use crate::store::{store_set_categories, AppStore};

/// Which bookmark the edit modal is open for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub category_id: String,
    pub bookmark_id: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    persisted: StoredValue<BookmarkStore>,
    pub dnd: DndSignals,
    /// Category the add-bookmark modal targets - read
    pub adding_to: ReadSignal<Option<String>>,
    /// Category the add-bookmark modal targets - write
    set_adding_to: WriteSignal<Option<String>>,
    /// Bookmark open in the edit modal - read
    pub editing: ReadSignal<Option<EditTarget>>,
    /// Bookmark open in the edit modal - write
    set_editing: WriteSignal<Option<EditTarget>>,
}

impl AppContext {
    pub fn new(store: AppStore, persisted: BookmarkStore, dnd: DndSignals) -> Self {
        let (adding_to, set_adding_to) = signal(None::<String>);
        let (editing, set_editing) = signal(None::<EditTarget>);
        Self {
            store,
            persisted: StoredValue::new(persisted),
            dnd,
            adding_to,
            set_adding_to,
            editing,
            set_editing,
        }
    }

    /// Run a store operation and publish the resulting snapshot.
    /// Failures are logged; the board keeps its last committed state.
    fn mutate<T>(&self, label: &str, op: impl FnOnce(&mut BookmarkStore) -> StoreResult<T>) -> Option<T> {
        let mut snapshot = None;
        let result = self.persisted.try_update_value(|persisted| {
            let result = op(persisted);
            snapshot = Some(persisted.categories().to_vec());
            result
        });
        match result {
            Some(Ok(value)) => {
                if let Some(categories) = snapshot {
                    store_set_categories(&self.store, &categories);
                }
                Some(value)
            }
            Some(Err(e)) => {
                log::error!("[STORE] {} failed: {}", label, e);
                None
            }
            None => {
                log::error!("[STORE] {} skipped: store disposed", label);
                None
            }
        }
    }

    pub fn add_bookmark(&self, category_id: &str, draft: BookmarkDraft) -> Option<Bookmark> {
        self.mutate("add_bookmark", |s| s.add_bookmark(category_id, draft)).flatten()
    }

    pub fn update_bookmark(&self, category_id: &str, bookmark_id: &str, patch: BookmarkPatch) {
        self.mutate("update_bookmark", |s| s.update_bookmark(category_id, bookmark_id, patch));
    }

    pub fn remove_bookmark(&self, category_id: &str, bookmark_id: &str) {
        self.mutate("remove_bookmark", |s| s.remove_bookmark(category_id, bookmark_id));
    }

    pub fn add_category(&self, draft: CategoryDraft) -> Option<Category> {
        self.mutate("add_category", |s| s.add_category(draft)).flatten()
    }

    pub fn remove_category(&self, category_id: &str) {
        self.mutate("remove_category", |s| s.remove_category(category_id));
    }

    pub fn apply_drop(&self, action: &DropAction) {
        self.mutate("apply_drop", |s| s.apply_drop(action));
    }

    /// Untracked lookup for forms
    pub fn bookmark(&self, category_id: &str, bookmark_id: &str) -> Option<Bookmark> {
        self.persisted
            .with_value(|s| s.bookmark(category_id, bookmark_id).cloned())
    }

    /// Icon URL the store would assign to `url`
    pub fn favicon_url(&self, url: &str) -> String {
        self.persisted
            .try_with_value(|s| s.get_favicon_url(url))
            .unwrap_or_default()
    }

    pub fn open_add_modal(&self, category_id: String) {
        self.set_adding_to.set(Some(category_id));
    }

    pub fn close_add_modal(&self) {
        self.set_adding_to.set(None);
    }

    pub fn open_edit_modal(&self, category_id: String, bookmark_id: String) {
        self.set_editing.set(Some(EditTarget { category_id, bookmark_id }));
    }

    pub fn close_edit_modal(&self) {
        self.set_editing.set(None);
    }

    /// Escape dismisses whichever modal is open
    pub fn close_modals(&self) {
        if self.adding_to.get_untracked().is_some() {
            self.close_add_modal();
        }
        if self.editing.get_untracked().is_some() {
            self.close_edit_modal();
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::storage::MemoryStorage;
    use crate::store::{store_category, AppState};
    use leptos_dragdrop::create_dnd_signals;
    use reactive_stores::Store;

    fn make_context() -> AppContext {
        let config = BoardConfig::default();
        let persisted = BookmarkStore::load(Box::new(MemoryStorage::new()), &config);
        let store = Store::new(AppState::new(persisted.categories().to_vec()));
        let dnd = create_dnd_signals(config.drag_threshold_px, config.click_suppress_ms);
        AppContext::new(store, persisted, dnd)
    }

    #[test]
    fn test_close_modals() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();

        ctx.open_add_modal("ai-chat".to_string());
        ctx.close_modals();
        assert_eq!(ctx.adding_to.get_untracked(), None);

        ctx.open_edit_modal("ai-chat".to_string(), "gemini".to_string());
        ctx.close_modals();
        assert_eq!(ctx.editing.get_untracked(), None);
    }

    #[test]
    fn test_mutation_publishes_snapshot() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();

        ctx.remove_bookmark("ai-chat", "gemini");
        assert!(ctx.bookmark("ai-chat", "gemini").is_none());
        let rendered = store_category(&ctx.store, "ai-chat").unwrap();
        assert!(rendered.bookmark("gemini").is_none());
    }
}
