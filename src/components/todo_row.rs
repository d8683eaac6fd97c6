//! Todo Row Component
//!
//! One item in the list. Switches between display and inline edit; the
//! edit buffer is local to the row until it is confirmed.

use leptos::html;
use leptos::prelude::*;
use todo_core::{EditKey, Item, ItemEditor};

use crate::context::use_todos;

/// A single todo row
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_todos();

    let editor = RwSignal::new(ItemEditor::new());
    let input_ref = NodeRef::<html::Input>::new();

    let completed = item.completed;
    let id = StoredValue::new(item.id);
    let text = StoredValue::new(item.text);

    // Confirm/cancel, from buttons or keyboard
    let apply = move |key: EditKey| {
        let mut committed = None;
        editor.update(|e| committed = e.handle_key(key));
        if let Some(new_text) = committed {
            id.with_value(|id| ctx.edit(id, &new_text));
        }
    };

    // Focus the edit field once it is mounted
    Effect::new(move |_| {
        if editor.with(|e| e.is_editing()) {
            if let Some(input) = input_ref.get() {
                if let Err(e) = input.focus() {
                    tracing::debug!(error = ?e, "edit field did not take focus");
                }
            }
        }
    });

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                prop:disabled=move || !editor.with(|e| e.can_toggle())
                on:change=move |_| id.with_value(|id| ctx.toggle(id))
            />

            <Show
                when=move || editor.with(|e| e.is_editing())
                fallback=move || view! {
                    <span class="todo-text">{text.get_value()}</span>
                    <div class="todo-actions">
                        <button
                            class="edit-btn"
                            title="编辑"
                            on:click=move |_| editor.update(|e| e.begin(&text.get_value()))
                        >
                            "✎"
                        </button>
                        <button
                            class="delete-btn"
                            title="删除"
                            on:click=move |_| id.with_value(|id| ctx.delete(id))
                        >
                            "×"
                        </button>
                    </div>
                }
            >
                <div class="todo-edit">
                    <input
                        type="text"
                        class="todo-edit-input"
                        node_ref=input_ref
                        prop:value=move || editor.with(|e| e.buffer().to_string())
                        on:input=move |ev| editor.update(|e| e.set_buffer(event_target_value(&ev)))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if let Some(key) = EditKey::from_key_name(&ev.key()) {
                                ev.prevent_default();
                                apply(key);
                            }
                        }
                    />
                    <button class="confirm-btn" on:click=move |_| apply(EditKey::Confirm)>"✓"</button>
                    <button class="cancel-btn" on:click=move |_| apply(EditKey::Cancel)>"✗"</button>
                </div>
            </Show>
        </div>
    }
}
