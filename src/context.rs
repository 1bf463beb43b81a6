//! Application Context
//!
//! Shared handles provided via Leptos Context API: the store, the resolved
//! config and the storage backend tasks are mirrored to.

use browser_kv::AnyStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::posts::{FixedPosts, PostSource};
use crate::store::{
    store_add_task, store_begin_post_load, store_finish_post_load, store_remove_task,
    store_toggle_task, AppStateStoreFields, AppStore,
};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: StoredValue<AppConfig>,
    /// web_sys::Storage is not Send, so it lives in local arena storage
    storage: StoredValue<AnyStore, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig, storage: AnyStore) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            storage: StoredValue::new_local(storage),
        }
    }

    /// Add the pending input as a new task
    pub fn add_task(&self) {
        if let Some(id) = store_add_task(&self.store, now_ms()) {
            debug!(id, "task added");
            self.persist();
        }
    }

    pub fn toggle_task(&self, id: u64) {
        if store_toggle_task(&self.store, id) {
            debug!(id, "task toggled");
            self.persist();
        }
    }

    pub fn delete_task(&self, id: u64) {
        if store_remove_task(&self.store, id) {
            debug!(id, "task deleted");
            self.persist();
        }
    }

    pub fn set_new_task_text(&self, text: String) {
        self.store.new_task_text().set(text);
    }

    pub fn set_search_term(&self, term: String) {
        self.store.search_term().set(term);
    }

    /// Mirror the task list to storage, overwriting the previous value.
    /// Failures are logged; in-memory state stays authoritative.
    fn persist(&self) {
        let key = self.config.with_value(|c| c.storage_key.clone());
        let result = self.storage.with_value(|storage| {
            self.store
                .tasks()
                .with_untracked(|tasks| tasks.persist(storage, &key))
        });
        if let Err(e) = result {
            error!(error = %e, key = %key, "failed to persist tasks");
        }
    }

    /// Start a post load cycle. Also used by the retry button.
    pub fn load_posts(&self) {
        let store = self.store;
        let source = self.config.with_value(|c| FixedPosts {
            delay_ms: c.posts.load_delay_ms,
            simulate_failure: c.posts.simulate_failure,
        });
        let generation = store_begin_post_load(&store);
        info!(generation, "loading posts");

        spawn_local(async move {
            let result = source.fetch().await;
            match &result {
                Ok(posts) => info!(generation, count = posts.len(), "posts loaded"),
                Err(e) => warn!(generation, error = %e, "post load failed"),
            }
            if !store_finish_post_load(&store, generation, result) {
                debug!(generation, "discarding result of superseded post load");
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
