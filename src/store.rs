//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! rendered copy of the board; the persisted store owns the truth and
//! pushes each committed snapshot here.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Category;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Board snapshot in display order
    pub categories: Vec<Category>,
}

impl AppState {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered snapshot
pub fn store_set_categories(store: &AppStore, categories: &[Category]) {
    *store.categories().write() = categories.to_vec();
}

/// Look up a category by ID (untracked)
pub fn store_category(store: &AppStore, category_id: &str) -> Option<Category> {
    store
        .categories()
        .read_untracked()
        .iter()
        .find(|c| c.id == category_id)
        .cloned()
}
