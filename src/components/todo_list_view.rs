//! Todo List View Component
//!
//! Renders the current snapshot, or the empty state when there is nothing
//! to show.

use leptos::prelude::*;

use crate::components::{EmptyState, TodoRow};
use crate::context::use_todos;
use crate::store::{store_is_empty, store_items};

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_todos();
    let store = ctx.store;

    view! {
        <div class="todo-list">
            <Show when=move || !store_is_empty(&store) fallback=|| view! { <EmptyState /> }>
                <For
                    each=move || store_items(&store)
                    // Mutable fields are part of the key so edits re-render the row.
                    // A rebuilt row starts in viewing mode; TodoRow disables the
                    // checkbox while editing so a toggle cannot drop the buffer.
                    key=|item| (item.id.clone(), item.text.clone(), item.completed)
                    children=move |item| view! { <TodoRow item=item /> }
                />
            </Show>
        </div>
    }
}
