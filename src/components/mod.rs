//! UI Components
//!
//! Stateless Leptos components driven by the app root.

mod filter_toggle;
mod todo_list;

pub use filter_toggle::FilterToggle;
pub use todo_list::TodoList;
