//! Edit Bookmark Modal Component
//!
//! Edits the fields of one bookmark, or deletes it.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, FaviconPreview};
use crate::context::{use_app_context, EditTarget};
use crate::models::BookmarkPatch;

#[component]
pub fn EditBookmarkModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.editing.get().map(|target| view! { <EditBookmarkForm target=target /> })}
    }
}

/// Form body, rebuilt whenever a different bookmark is opened
#[component]
fn EditBookmarkForm(target: EditTarget) -> impl IntoView {
    let ctx = use_app_context();
    let Some(bookmark) = ctx.bookmark(&target.category_id, &target.bookmark_id) else {
        log::warn!("[EDIT] Bookmark {} no longer exists", target.bookmark_id);
        ctx.close_edit_modal();
        return ().into_any();
    };

    let (title, set_title) = signal(bookmark.title.clone());
    let (url, set_url) = signal(bookmark.url.clone());
    let (description, set_description) = signal(bookmark.description.clone().unwrap_or_default());
    let (app_url, set_app_url) = signal(bookmark.app_url.clone().unwrap_or_default());

    let EditTarget { category_id, bookmark_id } = target;
    let target = StoredValue::new((category_id, bookmark_id));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = url.get_untracked();
        if url.trim().is_empty() { return; }

        let patch = BookmarkPatch::from_edit_form(
            &title.get_untracked(),
            &url,
            &description.get_untracked(),
            &app_url.get_untracked(),
        );
        target.with_value(|(category_id, bookmark_id)| {
            ctx.update_bookmark(category_id, bookmark_id, patch);
        });
        ctx.close_edit_modal();
    };

    let on_delete = move |_: ()| {
        target.with_value(|(category_id, bookmark_id)| ctx.remove_bookmark(category_id, bookmark_id));
        ctx.close_edit_modal();
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| ctx.close_edit_modal()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"編輯書籤"</h2>
                    <FaviconPreview url=url />
                    <button type="button" class="modal-close" on:click=move |_| ctx.close_edit_modal()>"×"</button>
                </div>

                <form class="modal-form" on:submit=on_submit>
                    <input
                        type="url"
                        required
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="標題"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="描述"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="應用網址"
                        prop:value=move || app_url.get()
                        on:input=move |ev| set_app_url.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <DeleteConfirmButton
                            button_class="danger"
                            label="刪除"
                            on_confirm=on_delete
                        />
                        <button type="button" on:click=move |_| ctx.close_edit_modal()>"取消"</button>
                        <button type="submit" class="primary">"儲存"</button>
                    </div>
                </form>
            </div>
        </div>
    }
    .into_any()
}
