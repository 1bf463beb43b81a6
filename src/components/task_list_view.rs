//! Task List View Component
//!
//! Shows the tasks matching the search term, in insertion order.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

const EMPTY_MESSAGE: &str = "No tasks yet. Add one above!";
const NO_MATCH_MESSAGE: &str = "No tasks found";

/// Message for an empty list, depending on whether a search is active
pub fn empty_message(search_term: &str) -> &'static str {
    if search_term.is_empty() {
        EMPTY_MESSAGE
    } else {
        NO_MATCH_MESSAGE
    }
}

#[component]
pub fn TaskListView(
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let store = use_app_store();

    let filtered = Memo::new(move |_| {
        let term = store.search_term().get();
        store.tasks().with(|tasks| tasks.filtered(&term))
    });

    view! {
        <div class="task-list">
            <Show
                when=move || !filtered.with(|tasks| tasks.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        {move || empty_message(&store.search_term().get())}
                    </div>
                }
            >
                <For
                    each=move || filtered.get()
                    // Completion is part of the key so a toggled row re-renders
                    key=|task| (task.id, task.completed)
                    children=move |task| view! {
                        <TaskItem task=task on_toggle=on_toggle on_delete=on_delete />
                    }
                />
            </Show>
        </div>
    }
}
