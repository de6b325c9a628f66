//! Filter Toggle Component
//!
//! "Show Completed" checkbox.

use leptos::prelude::*;

/// Stateless checkbox reporting its checked state upward
#[component]
pub fn FilterToggle(
    #[prop(into)] on_filter: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="filter">
            <label>
                <input
                    type="checkbox"
                    class="filter-checkbox"
                    on:change=move |ev| on_filter.run(event_target_checked(&ev))
                />
                "Show Completed"
            </label>
        </div>
    }
}
