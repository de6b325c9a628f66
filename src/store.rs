//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoRecord;
use crate::state::TodoState;

/// Type alias for the store
pub type AppStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Install the fetched todos
pub fn store_install_todos(store: &AppStore, todos: Vec<TodoRecord>) {
    store.update(|state| state.install(todos));
}

/// Remove a todo by ID
pub fn store_delete_todo(store: &AppStore, id: u32) {
    log::debug!("[STORE] delete {}", id);
    store.update(|state| state.delete_todo(id));
}

pub fn store_set_completed(store: &AppStore, id: u32, completed: bool) {
    log::debug!("[STORE] set completed {} = {}", id, completed);
    store.update(|state| state.set_completed(id, completed));
}

pub fn store_set_show_completed(store: &AppStore, show: bool) {
    store.update(|state| state.set_show_completed(show));
}

/// Open a todo for editing
pub fn store_begin_edit(store: &AppStore, id: u32) {
    log::debug!("[STORE] edit {}", id);
    store.update(|state| state.begin_edit(id));
}

/// Update the uncommitted title of the todo under edit
pub fn store_set_draft(store: &AppStore, text: String) {
    store.update(|state| state.set_draft(text));
}

/// Commit the draft and leave edit mode
pub fn store_save_edit(store: &AppStore, id: u32) {
    log::debug!("[STORE] save {}", id);
    store.update(|state| state.save_edit(id));
}

/// Leave edit mode, discarding the draft
pub fn store_cancel_edit(store: &AppStore) {
    store.update(|state| state.cancel_edit());
}
