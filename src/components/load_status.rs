//! Load Status Components
//!
//! Placeholders shown while posts are loading or after a failed load.

use leptos::prelude::*;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state">
            <div class="spinner"></div>
            <span>"Loading posts..."</span>
        </div>
    }
}

/// Error box with a retry button
#[component]
pub fn ErrorState(
    #[prop(into)] detail: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-state" title=detail>
            <div class="error-icon">"⚠"</div>
            <p>"Failed to load posts"</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
