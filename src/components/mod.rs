//! UI Components
//!
//! Leptos components for the task and post panels.

mod task_form;
mod task_search;
mod task_item;
mod task_list_view;
mod task_stats;
mod post_item;
mod load_status;
mod post_list_view;

pub use task_form::NewTaskForm;
pub use task_search::TaskSearch;
pub use task_item::TaskItem;
pub use task_list_view::TaskListView;
pub use task_stats::TaskStatsBar;
pub use post_item::PostItem;
pub use load_status::{ErrorState, LoadingState};
pub use post_list_view::PostListView;
