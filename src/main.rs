#![allow(warnings)]
//! Todo + Posts Frontend Entry Point

mod models;
mod config;
mod tasks;
mod posts;
mod store;
mod context;
mod components;
mod app;

use app::App;
use browser_kv::{AnyStore, KeyValueStore};
use leptos::prelude::*;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::tasks::TaskList;

fn main() {
    console_error_panic_hook::set_once();

    let (storage, storage_err) = AnyStore::open_or_memory();
    let (config, config_err) = AppConfig::load(&storage);

    if let Err(e) = console_logger::init(&config.log_level) {
        web_sys::console::error_1(&format!("[APP] logging disabled: {}", e).into());
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.log_level,
        backend = storage.backend(),
        "app start"
    );
    if let Some(e) = storage_err {
        warn!(error = %e, "local storage unavailable, tasks will not survive a reload");
    }
    if let Some(e) = config_err {
        warn!(error = %e, "ignoring config override");
    }

    let tasks = restore_tasks(&storage, &config.storage_key);

    mount_to_body(move || {
        view! { <App config=config.clone() storage=storage.clone() tasks=tasks.clone() /> }
    });
}

/// Read persisted tasks. A corrupt value is dropped and the list starts empty.
fn restore_tasks<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> TaskList {
    match TaskList::restore(storage, key) {
        Ok(tasks) => {
            info!(count = tasks.len(), "tasks restored");
            tasks
        }
        Err(e) => {
            error!(error = %e, "error loading tasks, starting empty");
            if e.is_corrupt() {
                if let Err(e) = storage.remove(key) {
                    warn!(error = %e, "could not discard corrupt tasks");
                }
            }
            TaskList::new()
        }
    }
}
