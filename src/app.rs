//! Todo + Posts Frontend App
//!
//! Top-level component with the two-panel layout. Owns the store and hands
//! task callbacks down to the list.

use browser_kv::AnyStore;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, PostListView, TaskListView, TaskSearch, TaskStatsBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::tasks::TaskList;

#[component]
pub fn App(config: AppConfig, storage: AnyStore, tasks: TaskList) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(tasks));
    let ctx = AppContext::new(store, config, storage);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load posts on mount
    Effect::new(move |_| ctx.load_posts());

    let on_toggle = Callback::new(move |id: u64| ctx.toggle_task(id));
    let on_delete = Callback::new(move |id: u64| ctx.delete_task(id));
    let on_retry = Callback::new(move |_: ()| ctx.load_posts());

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Todo + Fetch App"</h1>

            <div class="panels">
                // Left: tasks
                <section class="panel task-panel">
                    <h2>"Todo List"</h2>
                    <NewTaskForm />
                    <TaskSearch />
                    <TaskListView on_toggle=on_toggle on_delete=on_delete />
                    <TaskStatsBar />
                </section>

                // Right: posts
                <section class="panel post-panel">
                    <h2>"Tech Blog Posts"</h2>
                    <PostListView on_retry=on_retry />
                </section>
            </div>
        </div>
    }
}
