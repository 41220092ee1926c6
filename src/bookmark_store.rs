//! Persisted Bookmark Store
//!
//! Single source of truth for the board. Every mutation computes a new
//! snapshot, writes it to storage, and only then swaps it in. Missing ids
//! are no-ops, never errors.

use thiserror::Error;
use uuid::Uuid;

use crate::collection;
use crate::config::BoardConfig;
use crate::defaults::{default_bookmark, default_categories};
use crate::drag::DropAction;
use crate::migration::migrate_bookmarks;
use crate::models::{Bookmark, BookmarkDraft, BookmarkPatch, Category, CategoryDraft};
use crate::storage::{decode_record, encode_record, StorageBackend, StorageError};
use crate::url_utils::{get_favicon_url, title_from_url};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub struct BookmarkStore {
    categories: Vec<Category>,
    storage: Box<dyn StorageBackend>,
    storage_key: String,
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("categories", &self.categories.len())
            .field("storage_key", &self.storage_key)
            .finish()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Favicon for a bookmark that has none
fn fill_favicon(bookmark: &mut Bookmark) {
    let missing = bookmark.favicon.as_deref().map_or(true, str::is_empty);
    if missing {
        let derived = get_favicon_url(&bookmark.url);
        bookmark.favicon = if derived.is_empty() { None } else { Some(derived) };
    }
}

impl BookmarkStore {
    /// Rehydrate from storage and migrate. Falls back to the built-in board
    /// when there is no record or it cannot be read.
    pub fn load(storage: Box<dyn StorageBackend>, config: &BoardConfig) -> Self {
        let key = config.storage_key.clone();
        let stored = match storage.read(&key) {
            Ok(Some(raw)) => match decode_record(&raw) {
                Ok(Some(categories)) => Some(categories),
                Ok(None) => {
                    log::warn!("[STORE] Record under {} has another version, ignoring", key);
                    None
                }
                Err(e) => {
                    log::warn!("[STORE] Could not decode {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("[STORE] Could not read {}: {}", key, e);
                None
            }
        };

        let categories = match stored {
            Some(categories) => {
                log::info!("[STORE] Rehydrated {} categories", categories.len());
                migrate_bookmarks(categories, default_bookmark)
            }
            None => {
                log::info!("[STORE] No stored board, using defaults");
                default_categories()
            }
        };

        Self {
            categories,
            storage,
            storage_key: key,
        }
    }

    /// Current snapshot
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn bookmark(&self, category_id: &str, bookmark_id: &str) -> Option<&Bookmark> {
        self.category(category_id)?.bookmark(bookmark_id)
    }

    /// Write `next` and swap it in. `None` leaves everything untouched.
    fn commit(&mut self, next: Option<Vec<Category>>) -> StoreResult<bool> {
        let Some(next) = next else {
            return Ok(false);
        };
        let encoded = encode_record(&next)?;
        self.storage.write(&self.storage_key, &encoded)?;
        self.categories = next;
        Ok(true)
    }

    /// Append a new bookmark to the category. `None` when the category is gone.
    pub fn add_bookmark(&mut self, category_id: &str, draft: BookmarkDraft) -> StoreResult<Option<Bookmark>> {
        let url = draft.url.trim().to_string();
        let title = match draft.title.trim() {
            "" => title_from_url(&url),
            title => title.to_string(),
        };
        let mut bookmark = Bookmark {
            id: new_id(),
            title,
            url,
            favicon: draft.favicon,
            description: draft.description,
            quota_info: draft.quota_info,
            app_url: draft.app_url,
        };
        fill_favicon(&mut bookmark);

        let next = collection::with_bookmark_added(&self.categories, category_id, bookmark.clone());
        if self.commit(next)? {
            log::debug!("[STORE] Added bookmark {} to {}", bookmark.id, category_id);
            Ok(Some(bookmark))
        } else {
            log::debug!("[STORE] add_bookmark: no category {}", category_id);
            Ok(None)
        }
    }

    pub fn remove_bookmark(&mut self, category_id: &str, bookmark_id: &str) -> StoreResult<bool> {
        let next = collection::without_bookmark(&self.categories, category_id, bookmark_id);
        let changed = self.commit(next)?;
        if changed {
            log::debug!("[STORE] Removed bookmark {} from {}", bookmark_id, category_id);
        }
        Ok(changed)
    }

    /// Merge `patch` into the bookmark. A blank title falls back to the
    /// url's host; a bookmark left without an icon gets one derived.
    pub fn update_bookmark(&mut self, category_id: &str, bookmark_id: &str, patch: BookmarkPatch) -> StoreResult<bool> {
        let next = collection::with_bookmark_updated(&self.categories, category_id, bookmark_id, &patch, |bookmark| {
            if bookmark.title.trim().is_empty() {
                bookmark.title = title_from_url(&bookmark.url);
            }
            fill_favicon(bookmark);
        });
        self.commit(next)
    }

    /// Remove from `from` and append to `to`. Callers check `from != to`;
    /// the store treats it as a no-op either way.
    pub fn move_bookmark(&mut self, from_category_id: &str, to_category_id: &str, bookmark_id: &str) -> StoreResult<bool> {
        let next = collection::with_bookmark_moved(&self.categories, from_category_id, to_category_id, bookmark_id);
        let changed = self.commit(next)?;
        if changed {
            log::debug!("[STORE] Moved {} from {} to {}", bookmark_id, from_category_id, to_category_id);
        }
        Ok(changed)
    }

    pub fn reorder_bookmarks(&mut self, category_id: &str, active_id: &str, over_id: &str) -> StoreResult<bool> {
        let next = collection::with_bookmarks_reordered(&self.categories, category_id, active_id, over_id);
        let changed = self.commit(next)?;
        if changed {
            log::debug!("[STORE] Reordered {} onto {} in {}", active_id, over_id, category_id);
        }
        Ok(changed)
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> StoreResult<Option<Category>> {
        let category = Category {
            id: new_id(),
            title: draft.title,
            color: draft.color,
            bookmarks: Vec::new(),
        };
        let next = collection::with_category_added(&self.categories, category.clone());
        Ok(self.commit(next)?.then_some(category))
    }

    pub fn remove_category(&mut self, category_id: &str) -> StoreResult<bool> {
        let next = collection::without_category(&self.categories, category_id);
        self.commit(next)
    }

    /// Apply the mutation a drop was classified as
    pub fn apply_drop(&mut self, action: &DropAction) -> StoreResult<bool> {
        match action {
            DropAction::Move { from_category_id, to_category_id, bookmark_id } => {
                self.move_bookmark(from_category_id, to_category_id, bookmark_id)
            }
            DropAction::Reorder { category_id, active_id, over_id } => {
                self.reorder_bookmarks(category_id, active_id, over_id)
            }
        }
    }

    /// Preview helper for forms
    pub fn get_favicon_url(&self, url: &str) -> String {
        get_favicon_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STORAGE_KEY;
    use crate::drag::classify_drop;
    use crate::storage::MemoryStorage;
    use leptos_dragdrop::{DragEnd, DragSource, DropTarget};
    use std::sync::Arc;

    /// Storage whose writes can be switched off
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: std::sync::atomic::AtomicBool,
    }

    impl StorageBackend for FlakyStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.inner.write(key, value)
        }
    }

    fn config() -> BoardConfig {
        BoardConfig::default()
    }

    fn setup_store() -> (BookmarkStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = BookmarkStore::load(Box::new(storage.clone()), &config());
        (store, storage)
    }

    fn stored(storage: &MemoryStorage) -> Vec<Category> {
        let raw = storage.read(&config().storage_key).unwrap().expect("record written");
        decode_record(&raw).unwrap().unwrap()
    }

    fn ids(store: &BookmarkStore, category_id: &str) -> Vec<String> {
        store.category(category_id).unwrap().bookmarks.iter().map(|b| b.id.clone()).collect()
    }

    fn drop_on(store: &mut BookmarkStore, category_id: &str, bookmark_id: &str, over: Option<DropTarget>) -> bool {
        let end = DragEnd {
            source: DragSource::new(category_id, bookmark_id),
            over,
        };
        match classify_drop(&end) {
            Some(action) => store.apply_drop(&action).unwrap(),
            None => false,
        }
    }

    #[test]
    fn test_first_run_uses_defaults_without_writing() {
        let (store, storage) = setup_store();
        assert_eq!(store.categories(), default_categories().as_slice());
        assert_eq!(storage.read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_bookmark_derives_title_and_favicon() {
        let (mut store, storage) = setup_store();
        let added = store
            .add_bookmark("ai-chat", BookmarkDraft::new("  ", " https://app.kuse.ai/path "))
            .unwrap()
            .expect("category exists");

        assert_eq!(added.title, "app.kuse.ai");
        assert_eq!(added.url, "https://app.kuse.ai/path");
        assert_eq!(
            added.favicon.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=app.kuse.ai&sz=32")
        );
        assert_eq!(store.category("ai-chat").unwrap().bookmarks.last(), Some(&added));
        assert_eq!(stored(&storage), store.categories());
    }

    #[test]
    fn test_add_bookmark_ids_are_fresh() {
        let (mut store, _) = setup_store();
        let a = store.add_bookmark("ide", BookmarkDraft::new("A", "https://a.dev")).unwrap().unwrap();
        let b = store.add_bookmark("ide", BookmarkDraft::new("A", "https://a.dev")).unwrap().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_bookmark_unparseable_url() {
        let (mut store, _) = setup_store();
        let added = store.add_bookmark("ide", BookmarkDraft::new("", "localhost")).unwrap().unwrap();
        assert_eq!(added.title, "localhost");
        assert_eq!(added.favicon, None);
    }

    #[test]
    fn test_add_bookmark_missing_category() {
        let (mut store, storage) = setup_store();
        let before = store.categories().to_vec();
        let added = store.add_bookmark("nope", BookmarkDraft::new("A", "https://a.dev")).unwrap();
        assert!(added.is_none());
        assert_eq!(store.categories(), before.as_slice());
        assert_eq!(storage.read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_twice() {
        let (mut store, storage) = setup_store();
        assert!(store.remove_bookmark("ai-chat", "claude").unwrap());
        assert_eq!(stored(&storage), store.categories());
        let after_first = store.categories().to_vec();
        assert!(!store.remove_bookmark("ai-chat", "claude").unwrap());
        assert_eq!(store.categories(), after_first.as_slice());

        assert!(store.remove_category("ide").unwrap());
        assert_eq!(stored(&storage), store.categories());
        let after_first = store.categories().to_vec();
        assert!(!store.remove_category("ide").unwrap());
        assert_eq!(store.categories(), after_first.as_slice());
    }

    #[test]
    fn test_update_bookmark() {
        let (mut store, storage) = setup_store();
        let patch = BookmarkPatch {
            description: Some(Some("daily driver".to_string())),
            app_url: Some(Some("https://chatgpt.com/apps".to_string())),
            ..Default::default()
        };
        assert!(store.update_bookmark("ai-chat", "chatgpt", patch).unwrap());

        let chatgpt = store.bookmark("ai-chat", "chatgpt").unwrap();
        assert_eq!(chatgpt.title, "ChatGPT");
        assert_eq!(chatgpt.description.as_deref(), Some("daily driver"));
        assert_eq!(chatgpt.quota_info.as_deref(), Some("免費版每月有使用限制"));
        // Defaults carry no icon, so one is derived on edit
        assert_eq!(
            chatgpt.favicon.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=chat.openai.com&sz=32")
        );
        assert_eq!(stored(&storage), store.categories());
    }

    #[test]
    fn test_update_keeps_existing_favicon() {
        let (mut store, _) = setup_store();
        let added = store.add_bookmark("ide", BookmarkDraft::new("Zed", "https://zed.dev")).unwrap().unwrap();
        let patch = BookmarkPatch {
            url: Some("https://zed.dev/download".to_string()),
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(store.update_bookmark("ide", &added.id, patch).unwrap());

        let updated = store.bookmark("ide", &added.id).unwrap();
        assert_eq!(updated.favicon, added.favicon);
        assert_eq!(updated.title, "zed.dev");
    }

    #[test]
    fn test_edit_to_new_host_keeps_cached_favicon() {
        let (mut store, storage) = setup_store();
        let added = store.add_bookmark("ide", BookmarkDraft::new("Zed", "https://zed.dev")).unwrap().unwrap();
        let patch = BookmarkPatch::from_edit_form("Zed", "https://other.dev", "", "");
        assert!(store.update_bookmark("ide", &added.id, patch).unwrap());

        let updated = store.bookmark("ide", &added.id).unwrap();
        assert_eq!(updated.url, "https://other.dev");
        assert_eq!(
            updated.favicon.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=zed.dev&sz=32")
        );
        assert_eq!(stored(&storage), store.categories());
    }

    #[test]
    fn test_update_missing_is_noop() {
        let (mut store, _) = setup_store();
        let patch = BookmarkPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!store.update_bookmark("ai-chat", "missing", patch).unwrap());
    }

    #[test]
    fn test_move_bookmark_preserves_fields() {
        let (mut store, _) = setup_store();
        let gemini = store.bookmark("ai-chat", "gemini").unwrap().clone();
        assert!(store.move_bookmark("ai-chat", "ai-browser", "gemini").unwrap());

        assert!(store.bookmark("ai-chat", "gemini").is_none());
        let browser = store.category("ai-browser").unwrap();
        assert_eq!(browser.bookmarks.last(), Some(&gemini));
        assert_eq!(browser.bookmarks.iter().filter(|b| b.id == "gemini").count(), 1);
    }

    #[test]
    fn test_move_same_category_keeps_bookmark() {
        let (mut store, _) = setup_store();
        assert!(!store.move_bookmark("ai-chat", "ai-chat", "gemini").unwrap());
        assert!(store.bookmark("ai-chat", "gemini").is_some());
    }

    #[test]
    fn test_reorder_bookmarks() {
        let (mut store, storage) = setup_store();
        assert!(store.reorder_bookmarks("ai-browser", "fello-browser", "comet-browser").unwrap());
        assert_eq!(ids(&store, "ai-browser"), ["fello-browser", "comet-browser", "atlas-browser"]);
        assert_eq!(stored(&storage), store.categories());
        assert!(!store.reorder_bookmarks("ai-browser", "fello-browser", "fello-browser").unwrap());
    }

    #[test]
    fn test_add_category() {
        let (mut store, storage) = setup_store();
        let draft = CategoryDraft {
            title: "Reading".to_string(),
            color: "bg-teal-500".to_string(),
        };
        let created = store.add_category(draft).unwrap().unwrap();
        assert!(created.bookmarks.is_empty());
        assert_eq!(store.categories().last(), Some(&created));
        assert_eq!(stored(&storage).len(), 11);
    }

    #[test]
    fn test_drop_on_other_category_moves() {
        let (mut store, _) = setup_store();
        assert!(drop_on(&mut store, "ai-chat", "gemini", Some(DropTarget::category("ai-browser"))));
        assert!(!ids(&store, "ai-chat").contains(&"gemini".to_string()));
        assert_eq!(ids(&store, "ai-browser").last().map(String::as_str), Some("gemini"));
    }

    #[test]
    fn test_drop_outside_targets_changes_nothing() {
        let (mut store, storage) = setup_store();
        store.add_bookmark("ide", BookmarkDraft::new("Zed", "https://zed.dev")).unwrap();
        let before = storage.read(STORAGE_KEY).unwrap();

        assert!(!drop_on(&mut store, "ai-chat", "claude", None));
        assert_eq!(storage.read(STORAGE_KEY).unwrap(), before);
        assert_eq!(encode_record(store.categories()).unwrap(), before.unwrap());
    }

    #[test]
    fn test_drop_on_bookmark_same_category_reorders() {
        let (mut store, _) = setup_store();
        assert!(drop_on(&mut store, "ai-chat", "claude", Some(DropTarget::bookmark("ai-chat", "chatgpt"))));
        assert_eq!(&ids(&store, "ai-chat")[..3], ["claude", "chatgpt", "gemini"]);
    }

    #[test]
    fn test_drop_on_bookmark_other_category_appends() {
        let (mut store, _) = setup_store();
        assert!(drop_on(&mut store, "ai-chat", "claude", Some(DropTarget::bookmark("ide", "vscode"))));
        assert_eq!(ids(&store, "ide").last().map(String::as_str), Some("claude"));
    }

    #[test]
    fn test_drop_on_own_column_is_noop() {
        let (mut store, _) = setup_store();
        assert!(!drop_on(&mut store, "ai-chat", "claude", Some(DropTarget::category("ai-chat"))));
    }

    #[test]
    fn test_reload_roundtrip() {
        let (mut store, storage) = setup_store();
        store.add_bookmark("ide", BookmarkDraft::new("Zed", "https://zed.dev")).unwrap();
        store.move_bookmark("ai-chat", "ide", "grok").unwrap();

        let reloaded = BookmarkStore::load(Box::new(storage.clone()), &config());
        assert_eq!(reloaded.categories(), store.categories());
    }

    #[test]
    fn test_reload_migrates_old_record() {
        let mut old = default_categories();
        for category in old.iter_mut() {
            for bookmark in category.bookmarks.iter_mut() {
                bookmark.quota_info = None;
            }
        }
        old[0].bookmarks[1].quota_info = Some("custom".to_string());
        let storage = MemoryStorage::with_entry(STORAGE_KEY, &encode_record(&old).unwrap());

        let store = BookmarkStore::load(Box::new(storage), &config());
        assert_eq!(
            store.bookmark("ai-chat", "chatgpt").unwrap().quota_info.as_deref(),
            Some("免費版每月有使用限制")
        );
        assert_eq!(store.bookmark("ai-chat", "gemini").unwrap().quota_info.as_deref(), Some("custom"));
    }

    #[test]
    fn test_corrupt_record_falls_back_to_defaults() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "{\"state\":");
        let store = BookmarkStore::load(Box::new(storage), &config());
        assert_eq!(store.categories(), default_categories().as_slice());
    }

    #[test]
    fn test_failed_write_keeps_snapshot() {
        let storage = Arc::new(FlakyStorage::default());
        let mut store = BookmarkStore::load(Box::new(storage.clone()), &config());
        storage.fail_writes.store(true, std::sync::atomic::Ordering::SeqCst);

        let result = store.move_bookmark("ai-chat", "ai-browser", "gemini");
        assert!(matches!(result, Err(StoreError::Storage(StorageError::Write(_)))));
        assert!(store.bookmark("ai-chat", "gemini").is_some());
        assert!(store.bookmark("ai-browser", "gemini").is_none());
    }
}
