//! Todo List App
//!
//! Single card: header with progress, add form, item list.

use leptos::prelude::*;
use todo_core::TodoConfig;

use crate::components::{NewTodoForm, ProgressHeader, TodoListView};
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::default();

    // Load persisted items once, then provide to all children
    provide_context(TodoContext::init(&config));

    view! {
        <div class="todo-container">
            <div class="todo-card">
                <ProgressHeader />
                <div class="todo-body">
                    <NewTodoForm />
                    <TodoListView />
                </div>
            </div>
        </div>
    }
}
