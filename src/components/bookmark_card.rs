//! Bookmark Card Component
//!
//! A draggable bookmark row. Click opens the link; dragging past the
//! threshold picks it up instead.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::models::Bookmark;
use crate::url_utils::{display_host, get_favicon_url};

/// Shown when a bookmark carries no quota note
const QUOTA_FALLBACK: &str = "請查看官網了解額度限制";

fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.open_with_url_and_target(url, "_blank") {
            log::warn!("Could not open {}: {:?}", url, e);
        }
    }
}

/// Icon for a bookmark, falling back to a globe when none can be derived
#[component]
pub fn Favicon(bookmark: Bookmark) -> impl IntoView {
    let src = bookmark
        .favicon
        .clone()
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| get_favicon_url(&bookmark.url));
    let (broken, set_broken) = signal(false);

    view! {
        {move || if src.is_empty() || broken.get() {
            view! { <span class="favicon favicon-placeholder">"🌐"</span> }.into_any()
        } else {
            view! {
                <img class="favicon" src=src.clone() alt="" on:error=move |_| set_broken.set(true) />
            }.into_any()
        }}
    }
}

#[component]
pub fn BookmarkCard(bookmark: Bookmark, category_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let (expanded, set_expanded) = signal(false);

    let id = bookmark.id.clone();
    let url = bookmark.url.clone();
    let app_url = bookmark.app_url.clone();
    let quota = bookmark.quota_info.clone().unwrap_or_else(|| QUOTA_FALLBACK.to_string());
    let description = bookmark.description.clone();
    let tooltip = {
        let mut lines = vec![bookmark.title.clone(), display_host(&bookmark.url)];
        lines.extend(bookmark.description.clone());
        lines.push(quota.clone());
        lines.retain(|l| !l.is_empty());
        lines.join("\n")
    };

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, DragSource::new(category_id.clone(), id.clone()));
    let on_mouseenter = make_on_bookmark_mouseenter(dnd, category_id.clone(), id.clone());
    let on_mouseleave = make_on_bookmark_mouseleave(dnd, category_id.clone());

    // Visual state
    let drag_id = id.clone();
    let target = DropTarget::bookmark(category_id.clone(), id.clone());
    let card_class = move || {
        let mut c = String::from("bookmark-card");
        if dnd.is_dragging_bookmark(&drag_id) { c.push_str(" dragging"); }
        if dnd.is_over(&target) { c.push_str(" drop-target"); }
        c
    };

    let on_click = move |_| {
        // A drop also ends with a click on the card under the pointer
        if dnd.drag_just_ended.get_untracked() {
            return;
        }
        open_in_new_tab(&url);
    };

    let edit_category = category_id.clone();
    let edit_id = id.clone();

    view! {
        <div
            class=card_class
            title=tooltip
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="bookmark-row" on:click=on_click>
                <Favicon bookmark=bookmark.clone() />
                <span class="bookmark-title">{bookmark.title.clone()}</span>

                {app_url.map(|app_url| view! {
                    <button
                        type="button"
                        class="bookmark-action app-link-btn"
                        title="開啟應用"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            open_in_new_tab(&app_url);
                        }
                    >
                        "↗"
                    </button>
                })}

                <button
                    type="button"
                    class="bookmark-action edit-btn"
                    title="編輯"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.open_edit_modal(edit_category.clone(), edit_id.clone());
                    }
                >
                    "✎"
                </button>

                <button
                    type="button"
                    class="bookmark-action expand-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_expanded.update(|v| *v = !*v);
                    }
                >
                    {move || if expanded.get() { "▲" } else { "▼" }}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="bookmark-details">
                    {description.clone().map(|d| view! { <div class="bookmark-description">{d}</div> })}
                    <div class="bookmark-quota">{quota.clone()}</div>
                </div>
            </Show>
        </div>
    }
}
