//! Progress Header Component
//!
//! Title plus the completed/total line.

use leptos::prelude::*;
use todo_core::Progress;

use crate::context::use_todos;
use crate::store::store_progress;

/// Header line for the given counts
pub fn progress_text(progress: Progress) -> String {
    if progress.total > 0 {
        format!("已完成 {} 项任务", progress)
    } else {
        "开始添加你的第一个任务".to_string()
    }
}

#[component]
pub fn ProgressHeader() -> impl IntoView {
    let store = use_todos().store;

    view! {
        <header class="todo-header">
            <h1 class="todo-title">"我的待办事项"</h1>
            <p class="todo-progress">{move || progress_text(store_progress(&store))}</p>
        </header>
    }
}
