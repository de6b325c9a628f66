//! Todo State
//!
//! Pure state transitions for the todo view. Every change to the collection
//! builds a new `Vec`; records are never patched in place.

use reactive_stores::Store;

use crate::models::TodoRecord;

/// Edit mode of the list
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Editing {
    #[default]
    Viewing,
    /// One record is open for editing; `draft` is its uncommitted title
    Editing { id: u32, draft: String },
}

/// Root-owned view state
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct TodoState {
    /// Committed records in feed order
    pub todos: Vec<TodoRecord>,
    /// Whether completed records are listed
    pub show_completed: bool,
    pub editing: Editing,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with a freshly fetched one
    pub fn install(&mut self, todos: Vec<TodoRecord>) {
        self.todos = todos;
    }

    pub fn delete_todo(&mut self, id: u32) {
        self.todos = self.todos.iter().filter(|todo| todo.id != id).cloned().collect();
        if self.editing_id() == Some(id) {
            self.editing = Editing::Viewing;
        }
    }

    /// Merge `title` and `completed` into the record with `id`
    pub fn update_todo(&mut self, id: u32, title: &str, completed: bool) {
        self.todos = self
            .todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    TodoRecord { id, title: title.to_string(), completed }
                } else {
                    todo.clone()
                }
            })
            .collect();
    }

    pub fn rename_todo(&mut self, id: u32, title: &str) {
        if let Some(completed) = self.find(id).map(|todo| todo.completed) {
            self.update_todo(id, title, completed);
        }
    }

    pub fn set_completed(&mut self, id: u32, completed: bool) {
        if let Some(title) = self.find(id).map(|todo| todo.title.clone()) {
            self.update_todo(id, &title, completed);
        }
    }

    pub fn toggle_completed(&mut self, id: u32) {
        if let Some(completed) = self.find(id).map(|todo| todo.completed) {
            self.set_completed(id, !completed);
        }
    }

    pub fn set_show_completed(&mut self, show: bool) {
        self.show_completed = show;
    }

    /// Open `id` for editing, dropping any draft held for another record
    pub fn begin_edit(&mut self, id: u32) {
        if let Some(title) = self.find(id).map(|todo| todo.title.clone()) {
            self.editing = Editing::Editing { id, draft: title };
        }
    }

    pub fn set_draft(&mut self, text: String) {
        if let Editing::Editing { draft, .. } = &mut self.editing {
            *draft = text;
        }
    }

    /// Commit the draft if `id` is the record under edit, then stop editing
    pub fn save_edit(&mut self, id: u32) {
        if let Editing::Editing { id: editing_id, draft } = std::mem::take(&mut self.editing) {
            if editing_id == id {
                self.rename_todo(id, &draft);
            }
        }
    }

    /// Stop editing without touching the collection
    pub fn cancel_edit(&mut self) {
        self.editing = Editing::Viewing;
    }

    pub fn editing_id(&self) -> Option<u32> {
        match &self.editing {
            Editing::Viewing => None,
            Editing::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.editing {
            Editing::Viewing => None,
            Editing::Editing { draft, .. } => Some(draft.as_str()),
        }
    }

    /// Records to render: everything when `show_completed`, otherwise only open ones
    pub fn visible_todos(&self) -> Vec<TodoRecord> {
        if self.show_completed {
            self.todos.clone()
        } else {
            self.todos.iter().filter(|todo| !todo.completed).cloned().collect()
        }
    }

    fn find(&self, id: u32) -> Option<&TodoRecord> {
        self.todos.iter().find(|todo| todo.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> TodoRecord {
        TodoRecord::new(id, format!("Todo {}", id), completed)
    }

    fn state_with(todos: Vec<TodoRecord>) -> TodoState {
        let mut state = TodoState::new();
        state.install(todos);
        state
    }

    fn ids(todos: &[TodoRecord]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = TodoState::new();
        assert!(state.todos.is_empty());
        assert!(!state.show_completed);
        assert_eq!(state.editing, Editing::Viewing);
    }

    #[test]
    fn test_delete_sequences() {
        let original: Vec<TodoRecord> = (1..=10).map(|id| make_todo(id, id % 3 == 0)).collect();
        let original_ids = ids(&original);
        let sequences: &[&[u32]] = &[&[1], &[10, 1, 5], &[3, 3, 3], &[42], &[2, 4, 6, 8, 10, 1, 3, 5, 7, 9]];

        for deletes in sequences {
            let mut state = state_with(original.clone());
            for id in deletes.iter() {
                state.delete_todo(*id);
            }
            for todo in &state.todos {
                assert!(!deletes.contains(&todo.id));
                assert!(original_ids.contains(&todo.id));
            }
            let expected: Vec<u32> = original_ids.iter().copied().filter(|id| !deletes.contains(id)).collect();
            assert_eq!(ids(&state.todos), expected);
        }
    }

    #[test]
    fn test_delete_single_record() {
        let mut state = state_with(vec![make_todo(1, false)]);
        state.delete_todo(1);
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_delete_record_under_edit_stops_editing() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, false)]);
        state.begin_edit(1);
        state.delete_todo(1);
        assert_eq!(state.editing, Editing::Viewing);

        state.begin_edit(2);
        state.delete_todo(1);
        assert_eq!(state.editing_id(), Some(2));
    }

    #[test]
    fn test_update_merges_title_and_completed() {
        let mut state = state_with(vec![TodoRecord::new(1, "A", false)]);
        state.update_todo(1, "B", true);
        assert_eq!(state.todos, vec![TodoRecord::new(1, "B", true)]);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let todos = vec![make_todo(1, false), make_todo(2, true)];
        let mut state = state_with(todos.clone());
        state.update_todo(9, "X", true);
        state.rename_todo(9, "X");
        state.set_completed(9, true);
        state.toggle_completed(9);
        state.delete_todo(9);
        state.begin_edit(9);
        assert_eq!(state.todos, todos);
        assert_eq!(state.editing, Editing::Viewing);
    }

    #[test]
    fn test_rename_keeps_completed() {
        let mut state = state_with(vec![TodoRecord::new(1, "A", true)]);
        state.rename_todo(1, "B");
        assert_eq!(state.todos, vec![TodoRecord::new(1, "B", true)]);
    }

    #[test]
    fn test_toggle_twice_restores_record() {
        for completed in [false, true] {
            let original = TodoRecord::new(4, "Walk dog", completed);
            let mut state = state_with(vec![make_todo(3, false), original.clone()]);
            state.toggle_completed(4);
            assert_eq!(state.todos[1].completed, !completed);
            assert_eq!(state.todos[1].title, "Walk dog");
            state.toggle_completed(4);
            assert_eq!(state.todos[1], original);
        }
    }

    #[test]
    fn test_filter_property() {
        let todos = vec![make_todo(1, false), make_todo(2, true), make_todo(3, false), make_todo(4, true)];
        let mut state = state_with(todos.clone());

        state.set_show_completed(true);
        assert_eq!(state.visible_todos(), todos);

        state.set_show_completed(false);
        let visible = state.visible_todos();
        assert_eq!(ids(&visible), vec![1, 3]);
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_filter_never_adds_records() {
        let todos: Vec<TodoRecord> = (1..=10).map(|id| make_todo(id, false)).collect();
        let mut state = state_with(todos.clone());
        assert_eq!(state.visible_todos(), todos);
        state.set_show_completed(true);
        assert_eq!(state.visible_todos(), todos);
    }

    #[test]
    fn test_save_and_cancel_idempotent_when_viewing() {
        let mut state = state_with(vec![make_todo(1, false)]);
        let before = state.clone();
        state.save_edit(1);
        assert_eq!(state, before);
        state.cancel_edit();
        assert_eq!(state, before);
    }

    #[test]
    fn test_edit_state_machine() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, false)]);
        state.begin_edit(1);
        assert_eq!(state.editing_id(), Some(1));
        assert_eq!(state.draft(), Some("Todo 1"));

        state.begin_edit(2);
        assert_eq!(state.editing_id(), Some(2));
        assert_eq!(state.draft(), Some("Todo 2"));

        state.cancel_edit();
        assert_eq!(state.editing_id(), None);
        assert_eq!(state.draft(), None);
    }

    #[test]
    fn test_save_commits_draft() {
        let mut state = state_with(vec![TodoRecord::new(1, "A", true)]);
        state.begin_edit(1);
        state.set_draft("Ab".to_string());
        assert_eq!(state.todos[0].title, "A");
        state.save_edit(1);
        assert_eq!(state.todos, vec![TodoRecord::new(1, "Ab", true)]);
        assert_eq!(state.editing, Editing::Viewing);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = state_with(vec![TodoRecord::new(1, "A", false)]);
        state.begin_edit(1);
        state.set_draft("changed".to_string());
        state.cancel_edit();
        assert_eq!(state.todos, vec![TodoRecord::new(1, "A", false)]);
    }

    #[test]
    fn test_switching_edit_target_discards_draft() {
        let mut state = state_with(vec![TodoRecord::new(1, "A", false), TodoRecord::new(2, "B", false)]);
        state.begin_edit(1);
        state.set_draft("A2".to_string());
        state.begin_edit(2);
        assert_eq!(state.editing_id(), Some(2));
        assert_eq!(state.todos[0], TodoRecord::new(1, "A", false));
    }

    #[test]
    fn test_save_for_other_id_only_exits_edit() {
        let mut state = state_with(vec![TodoRecord::new(1, "A", false), TodoRecord::new(2, "B", false)]);
        state.begin_edit(1);
        state.set_draft("A2".to_string());
        state.save_edit(2);
        assert_eq!(state.editing, Editing::Viewing);
        assert_eq!(state.todos[0].title, "A");
        assert_eq!(state.todos[1].title, "B");
    }

    #[test]
    fn test_set_draft_ignored_when_viewing() {
        let mut state = state_with(vec![make_todo(1, false)]);
        state.set_draft("x".to_string());
        assert_eq!(state.editing, Editing::Viewing);
    }
}
