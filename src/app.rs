//! Company Todo List App
//!
//! Root component: owns the state store, seeds it from the todo feed on
//! mount, and wires child callbacks to store transitions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FilterToggle, TodoList};
use crate::config::use_app_config;
use crate::state::TodoState;
use crate::store::*;

#[component]
pub fn App() -> impl IntoView {
    let config = use_app_config();
    let store: AppStore = Store::new(TodoState::new());

    // Load todos on mount; a failed load leaves the list empty
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match api::fetch_todos(&config).await {
                Ok(todos) => {
                    log::info!("[APP] Loaded {} todos", todos.len());
                    store_install_todos(&store, todos);
                }
                Err(e) => log::warn!("[APP] {}", e),
            }
        });
    });

    // Derived on every read, not memoized
    let visible_todos = Signal::derive(move || store.with(|state| state.visible_todos()));
    let editing_id = Signal::derive(move || store.with(|state| state.editing_id()));
    let draft = Signal::derive(move || {
        store.with(|state| state.draft().unwrap_or_default().to_string())
    });

    view! {
        <div class="app-container">
            <div class="app">
                <h1 class="app-title">"Company Todo List"</h1>

                <FilterToggle on_filter=Callback::new(move |show: bool| store_set_show_completed(&store, show)) />

                <TodoList
                    todos=visible_todos
                    editing_id=editing_id
                    draft=draft
                    on_delete=Callback::new(move |id: u32| store_delete_todo(&store, id))
                    on_toggle=Callback::new(move |(id, completed): (u32, bool)| store_set_completed(&store, id, completed))
                    on_edit=Callback::new(move |id: u32| store_begin_edit(&store, id))
                    on_draft=Callback::new(move |text: String| store_set_draft(&store, text))
                    on_save=Callback::new(move |id: u32| store_save_edit(&store, id))
                    on_cancel=Callback::new(move |_: ()| store_cancel_edit(&store))
                />
            </div>
        </div>
    }
}
