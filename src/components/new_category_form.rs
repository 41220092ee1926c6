//! New Category Form Component
//!
//! Form for creating a category with a color selector.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{CategoryDraft, CATEGORY_COLORS};

#[component]
pub fn NewCategoryForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_title, set_new_title) = signal(String::new());
    let (color, set_color) = signal(String::from(CATEGORY_COLORS[0].0));

    let create_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked().trim().to_string();
        if title.is_empty() { return; }

        let draft = CategoryDraft { title, color: color.get_untracked() };
        if ctx.add_category(draft).is_some() {
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="new-category-form" on:submit=create_category>
            <div class="new-category-row">
                <input
                    type="text"
                    placeholder="新增分類..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit">"新增"</button>
            </div>

            <div class="color-selector-row">
                {CATEGORY_COLORS.iter().map(|(class, label)| {
                    let value = class.to_string();
                    let pick = value.clone();
                    let is_selected = move || color.get() == value;
                    view! {
                        <button
                            type="button"
                            title=*label
                            class=move || {
                                if is_selected() {
                                    format!("color-btn {} active", class)
                                } else {
                                    format!("color-btn {}", class)
                                }
                            }
                            on:click=move |_| set_color.set(pick.clone())
                        ></button>
                    }
                }).collect_view()}
            </div>
        </form>
    }
}
