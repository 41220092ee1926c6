//! Category Section Component
//!
//! One column of the board: color bar header plus its droppable bookmark list.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{BookmarkCard, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::models::Bookmark;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategorySection(category_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = ctx.dnd;

    let lookup_id = category_id.clone();
    let category = Memo::new(move |_| {
        store
            .categories()
            .with(|categories| categories.iter().find(|c| c.id == lookup_id).cloned())
    });
    let title = move || category.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let color_class = move || {
        category.with(|c| format!("category-color-bar {}", c.as_ref().map_or("", |c| c.color.as_str())))
    };

    let bookmarks = move || category.with(|c| c.as_ref().map(|c| c.bookmarks.clone()).unwrap_or_default());
    let is_empty = move || category.with(|c| c.as_ref().map_or(true, |c| c.bookmarks.is_empty()));

    // Column-level DnD handlers
    let on_mouseenter = make_on_category_mouseenter(dnd, category_id.clone());
    let on_mouseleave = make_on_category_mouseleave(dnd);
    let target = DropTarget::category(category_id.clone());
    let list_class = move || {
        if dnd.is_over(&target) { "bookmark-list drop-target" } else { "bookmark-list" }
    };

    let add_id = category_id.clone();
    let remove_id = category_id.clone();
    let card_category = category_id.clone();

    view! {
        <section class="category-section">
            <header class="category-header">
                <div class=color_class></div>
                <h3 class="category-title">{title}</h3>
                <div class="category-actions">
                    <button
                        type="button"
                        class="category-action add-bookmark-btn"
                        title="Add bookmark"
                        on:click=move |_| ctx.open_add_modal(add_id.clone())
                    >
                        "+"
                    </button>
                    <DeleteConfirmButton
                        button_class="category-action delete-category-btn"
                        on_confirm=move |_: ()| ctx.remove_category(&remove_id)
                    />
                </div>
            </header>

            <div
                class=list_class
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
            >
                <For
                    each=bookmarks
                    key=|bookmark: &Bookmark| bookmark.clone()
                    children=move |bookmark| {
                        view! { <BookmarkCard bookmark=bookmark category_id=card_category.clone() /> }
                    }
                />
                <Show when=is_empty>
                    <div class="empty-category">"Drop bookmarks here"</div>
                </Show>
            </div>
        </section>
    }
}
