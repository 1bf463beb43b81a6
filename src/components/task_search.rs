//! Task Search Box

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Filters the task list as the user types
#[component]
pub fn TaskSearch() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="task-search">
            <input
                type="text"
                placeholder="Search tasks..."
                prop:value=move || store.search_term().get()
                on:input=move |ev| ctx.set_search_term(event_target_value(&ev))
            />
        </div>
    }
}
