//! Task Stats Bar Component

use leptos::prelude::*;

use crate::models::TaskStats;
use crate::store::{use_app_store, AppStateStoreFields};

/// The footer only shows once at least one task exists
pub fn is_visible(stats: &TaskStats) -> bool {
    stats.total > 0
}

/// Total / Completed / Remaining counters, hidden while there are no tasks
#[component]
pub fn TaskStatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.tasks().with(|tasks| tasks.stats()));

    view! {
        <Show when=move || { stats.with(is_visible) }>
            <div class="task-stats">
                <span class="stat total">"Total: " {move || stats.get().total}</span>
                <span class="stat completed">"Completed: " {move || stats.get().completed}</span>
                <span class="stat remaining">"Remaining: " {move || stats.get().remaining}</span>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_without_tasks() {
        assert!(!is_visible(&TaskStats::default()));
        assert!(is_visible(&TaskStats {
            total: 3,
            completed: 1,
            remaining: 2
        }));
        // All done still shows the footer
        assert!(is_visible(&TaskStats {
            total: 2,
            completed: 2,
            remaining: 0
        }));
    }
}
