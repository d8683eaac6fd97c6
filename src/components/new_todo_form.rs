//! New Todo Form Component
//!
//! Text input plus submit button. Enter submits through the form.

use leptos::prelude::*;

use crate::context::use_todos;

/// Form for adding a todo at the top of the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todos();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                class="new-todo-input"
                placeholder="添加新任务..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" title="添加">"+"</button>
        </form>
    }
}
