//! New Task Form Component
//!
//! Text input plus Add button. Enter submits the form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let add_task = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.add_task();
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || store.new_task_text().get()
                on:input=move |ev| ctx.set_new_task_text(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
