//! Delete Confirm Button Component
//!
//! Two-step trigger for removing a bookmark or a whole category.

use leptos::prelude::*;

/// Trigger that asks "刪除?" before running `on_confirm`.
/// Leaving the control with the pointer backs out of the prompt.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    let trigger = move || {
        view! {
            <button
                type="button"
                class=button_class.clone()
                title="刪除"
                on:click=move |ev| {
                    ev.stop_propagation();
                    armed.set(true);
                }
            >
                {label.clone()}
            </button>
        }
    };

    view! {
        <Show when=move || armed.get() fallback=trigger>
            <span class="delete-confirm" on:mouseleave=move |_| armed.set(false)>
                "刪除?"
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
