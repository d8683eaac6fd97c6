//! UI Components
//!
//! Reusable Leptos components.

mod empty_state;
mod new_todo_form;
mod progress_header;
mod todo_list_view;
mod todo_row;

pub use empty_state::EmptyState;
pub use new_todo_form::NewTodoForm;
pub use progress_header::ProgressHeader;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
