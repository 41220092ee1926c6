//! Add Bookmark Modal Component
//!
//! Form for creating a bookmark in the category picked from its column header.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{non_blank, BookmarkDraft};
use crate::url_utils::title_from_url;

/// Live icon preview for a URL being typed
#[component]
pub fn FaviconPreview(#[prop(into)] url: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let src = move || ctx.favicon_url(&url.get());
    view! {
        {move || {
            let src = src();
            if src.is_empty() {
                view! { <span class="favicon favicon-placeholder">"🌐"</span> }.into_any()
            } else {
                view! { <img class="favicon" src=src alt="" /> }.into_any()
            }
        }}
    }
}

#[component]
pub fn AddBookmarkModal() -> impl IntoView {
    let ctx = use_app_context();

    let (url, set_url) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let reset_and_close = move || {
        set_url.set(String::new());
        set_title.set(String::new());
        set_description.set(String::new());
        ctx.close_add_modal();
    };

    let on_url_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        // Autofill the title while the user has not typed one
        if title.get_untracked().is_empty() && !value.is_empty() {
            set_title.set(title_from_url(&value));
        }
        set_url.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(category_id) = ctx.adding_to.get_untracked() else { return; };
        let url = url.get_untracked();
        if url.trim().is_empty() { return; }

        let draft = BookmarkDraft {
            title: title.get_untracked(),
            url,
            description: non_blank(&description.get_untracked()),
            ..Default::default()
        };
        ctx.add_bookmark(&category_id, draft);
        reset_and_close();
    };

    view! {
        <Show when=move || ctx.adding_to.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| reset_and_close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"新增書籤"</h2>
                        <FaviconPreview url=url />
                        <button type="button" class="modal-close" on:click=move |_| reset_and_close()>"×"</button>
                    </div>

                    <form class="modal-form" on:submit=on_submit>
                        <input
                            type="url"
                            placeholder="https://app.kuse.ai/"
                            required
                            prop:value=move || url.get()
                            on:input=on_url_input
                            on:blur=move |_| {
                                if title.get_untracked().is_empty() && !url.get_untracked().is_empty() {
                                    set_title.set(title_from_url(&url.get_untracked()));
                                }
                            }
                        />
                        <input
                            type="text"
                            placeholder="kuse.ai"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="描述"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="button" on:click=move |_| reset_and_close()>"取消"</button>
                            <button type="submit" class="primary">"儲存"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
