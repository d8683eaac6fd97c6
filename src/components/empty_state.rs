//! Empty State Component

use leptos::prelude::*;

/// Shown when the collection has no items
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-title">"还没有任务"</p>
            <p class="empty-hint">"添加一个任务开始管理你的待办事项"</p>
        </div>
    }
}
