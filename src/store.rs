//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::posts::{ContentLoadError, PostFeed};
use crate::models::Post;
use crate::tasks::TaskList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in insertion order
    pub tasks: TaskList,
    /// Pending text of the add-task input
    pub new_task_text: String,
    /// Case-insensitive filter over task text
    pub search_term: String,
    /// Post panel load cycle
    pub posts: PostFeed,
}

impl AppState {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the pending input as a task. Clears the input on success.
pub fn store_add_task(store: &AppStore, now_ms: u64) -> Option<u64> {
    let text = store.new_task_text().get_untracked();
    let id = store.tasks().write().add(&text, now_ms)?;
    store.new_task_text().set(String::new());
    Some(id)
}

/// Toggle a task's completion by ID
pub fn store_toggle_task(store: &AppStore, id: u64) -> bool {
    store.tasks().write().toggle(id)
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: u64) -> bool {
    store.tasks().write().delete(id)
}

/// Start a post load cycle, returning its generation
pub fn store_begin_post_load(store: &AppStore) -> u64 {
    store.posts().write().begin()
}

/// Land a post load result; false when the cycle was superseded
pub fn store_finish_post_load(
    store: &AppStore,
    generation: u64,
    result: Result<Vec<Post>, ContentLoadError>,
) -> bool {
    // Stale results must not notify subscribers
    if store.posts().with_untracked(|feed| feed.generation()) != generation {
        return false;
    }
    store.posts().write().finish(generation, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.set();
        test(Store::new(AppState::default()));
    }

    #[test]
    fn test_add_task_clears_input() {
        with_store(|store| {
            store.new_task_text().set("Buy milk".to_string());

            let id = store_add_task(&store, 1_000);

            assert_eq!(id, Some(1_000));
            assert_eq!(store.new_task_text().get_untracked(), "");
            store.tasks().with_untracked(|tasks| {
                assert_eq!(tasks.len(), 1);
                assert_eq!(tasks.tasks()[0].text, "Buy milk");
                assert!(!tasks.tasks()[0].completed);
            });
        });
    }

    #[test]
    fn test_blank_add_keeps_input_and_tasks() {
        with_store(|store| {
            store.new_task_text().set("   ".to_string());

            assert_eq!(store_add_task(&store, 1_000), None);
            assert_eq!(store.new_task_text().get_untracked(), "   ");
            assert!(store.tasks().with_untracked(|tasks| tasks.is_empty()));
        });
    }

    #[test]
    fn test_stale_post_load_is_ignored() {
        with_store(|store| {
            let first = store_begin_post_load(&store);
            let second = store_begin_post_load(&store);

            assert!(!store_finish_post_load(&store, first, Ok(Vec::new())));
            assert!(store.posts().with_untracked(|feed| feed.state().is_loading()));
            assert!(store_finish_post_load(&store, second, Ok(Vec::new())));
        });
    }
}
