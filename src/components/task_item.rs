//! Task Item Component
//!
//! A single row in the task list.

use leptos::prelude::*;

use crate::models::Task;

/// Checkbox, text and delete button for one task
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    let row_class = if completed { "task-row completed" } else { "task-row" };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| on_toggle.run(id)
            />

            <span class="task-text">{task.text}</span>

            <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
