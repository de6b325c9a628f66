//! Todo List Component
//!
//! Renders each todo as a read-only row, or as an edit row when it is the
//! todo under edit. All interaction is forwarded to the callbacks.

use leptos::prelude::*;

use crate::models::TodoRecord;

#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<TodoRecord>>,
    #[prop(into)] editing_id: Signal<Option<u32>>,
    /// Uncommitted title shown in the edit row
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] on_delete: Callback<u32>,
    /// Receives the id and the requested completion flag
    #[prop(into)] on_toggle: Callback<(u32, bool)>,
    #[prop(into)] on_edit: Callback<u32>,
    #[prop(into)] on_draft: Callback<String>,
    #[prop(into)] on_save: Callback<u32>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        let editing = editing_id.get();
        todos
            .get()
            .into_iter()
            .map(|todo| {
                let is_editing = editing == Some(todo.id);
                (todo, is_editing)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="todo-list">
            <For
                each=rows
                // Every rendered field is part of the key so changes re-render the row
                key=|(todo, is_editing)| (todo.id, todo.title.clone(), todo.completed, *is_editing)
                children=move |(todo, is_editing)| {
                    if is_editing {
                        view! {
                            <EditRow
                                todo=todo
                                draft=draft
                                on_draft=on_draft
                                on_save=on_save
                                on_cancel=on_cancel
                            />
                        }.into_any()
                    } else {
                        view! {
                            <TodoRow
                                todo=todo
                                on_toggle=on_toggle
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }.into_any()
                    }
                }
            />
        </ul>
    }
}

fn item_class(completed: bool) -> &'static str {
    if completed { "todo-item completed" } else { "todo-item" }
}

/// Read-only row
#[component]
fn TodoRow(
    todo: TodoRecord,
    on_toggle: Callback<(u32, bool)>,
    on_edit: Callback<u32>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=item_class(completed)>
            <div class="todo-content">
                <input
                    type="checkbox"
                    class="checkbox"
                    prop:checked=completed
                    on:change=move |_| on_toggle.run((id, !completed))
                />
                <span class="todo-text">{todo.title}</span>
                <div class="actions">
                    <button class="edit-btn" title="Edit" on:click=move |_| on_edit.run(id)>"✎"</button>
                    <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(id)>"×"</button>
                </div>
            </div>
        </li>
    }
}

/// Row of the todo under edit, bound to the draft title
#[component]
fn EditRow(
    todo: TodoRecord,
    draft: Signal<String>,
    on_draft: Callback<String>,
    on_save: Callback<u32>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = todo.id;

    view! {
        <li class=item_class(todo.completed)>
            <div class="todo-content">
                <input
                    type="text"
                    class="edit-input"
                    prop:value=move || draft.get()
                    on:input=move |ev| on_draft.run(event_target_value(&ev))
                />
                <div class="edit-actions">
                    <button class="save-btn" title="Save" on:click=move |_| on_save.run(id)>"✓"</button>
                    <button class="cancel-btn" title="Cancel" on:click=move |_| on_cancel.run(())>"✗"</button>
                </div>
            </div>
        </li>
    }
}
