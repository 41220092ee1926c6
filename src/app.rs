//! Bookmark Board App
//!
//! Root component: loads the persisted board, provides context and lays out
//! the category columns.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::bookmark_store::BookmarkStore;
use crate::components::{AddBookmarkModal, CategorySection, DragPreview, EditBookmarkModal, NewCategoryForm};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::drag::classify_drop;
use crate::models::Category;
use crate::storage::{BrowserStorage, MemoryStorage, StorageBackend};
use crate::store::{AppState, AppStateStoreFields};

fn pick_storage() -> Box<dyn StorageBackend> {
    if BrowserStorage::available() {
        Box::new(BrowserStorage)
    } else {
        log::warn!("[APP] localStorage unavailable, changes will not survive a reload");
        Box::new(MemoryStorage::new())
    }
}

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let persisted = BookmarkStore::load(pick_storage(), &config);
    log::info!("[APP] Board loaded with {} categories", persisted.categories().len());

    // Rendered snapshot
    let store = Store::new(AppState::new(persisted.categories().to_vec()));
    provide_context(store);

    let dnd = create_dnd_signals(config.drag_threshold_px, config.click_suppress_ms);
    let ctx = AppContext::new(store, persisted, dnd);
    provide_context(ctx);

    bind_global_mouseup(dnd, move |end| match classify_drop(&end) {
        Some(action) => {
            log::debug!("[DND] Drop: {:?}", action);
            ctx.apply_drop(&action);
        }
        None => log::debug!("[DND] Drop discarded: over={:?}", end.over),
    });

    // Escape closes the add and edit modals
    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_modals();
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Bookmarks"</h1>
                <NewCategoryForm />
            </header>

            <main class="board">
                <For
                    each=move || store.categories().get()
                    key=|category: &Category| category.id.clone()
                    children=|category| view! { <CategorySection category_id=category.id /> }
                />
            </main>

            <DragPreview />
            <AddBookmarkModal />
            <EditBookmarkModal />
        </div>
    }
}
