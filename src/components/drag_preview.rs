//! Drag Preview Component
//!
//! Floating copy of the dragged bookmark that follows the pointer.

use leptos::prelude::*;

use crate::components::Favicon;
use crate::context::use_app_context;
use crate::store::{store_category, use_app_store};

/// Offset from the pointer so the preview never sits under it
const PREVIEW_OFFSET_PX: i32 = 12;

#[component]
pub fn DragPreview() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = ctx.dnd;

    let dragged = Memo::new(move |_| {
        let source = dnd.phase.with(|p| p.dragging_source().cloned())?;
        store_category(&store, &source.category_id)?
            .bookmark(&source.bookmark_id)
            .cloned()
    });

    let style = move || {
        let (x, y) = dnd.phase.with(|p| p.pointer()).unwrap_or_default();
        format!("left: {}px; top: {}px;", x + PREVIEW_OFFSET_PX, y + PREVIEW_OFFSET_PX)
    };

    view! {
        {move || dragged.get().map(|bookmark| view! {
            <div class="drag-preview" style=style>
                <Favicon bookmark=bookmark.clone() />
                <span class="bookmark-title">{bookmark.title.clone()}</span>
            </div>
        })}
    }
}
