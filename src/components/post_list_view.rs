//! Post List View Component
//!
//! Renders the current load cycle: spinner, error with retry, or the posts.

use leptos::prelude::*;

use crate::components::{ErrorState, LoadingState, PostItem};
use crate::context::use_app_context;
use crate::posts::LoadState;
use crate::store::AppStateStoreFields;

#[component]
pub fn PostListView(#[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let preview_chars = ctx.config.with_value(|c| c.posts.preview_chars);

    let state = Memo::new(move |_| store.posts().with(|feed| feed.state().clone()));

    let busy = move || state.with(|s| s.is_loading()).to_string();

    view! {
        <div class="post-panel-body" aria-busy=busy>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingState /> }.into_any(),
                LoadState::Failed(e) => view! {
                    <ErrorState detail=e.to_string() on_retry=on_retry />
                }.into_any(),
                LoadState::Loaded(posts) => view! {
                    <div class="post-list">
                        {posts
                            .into_iter()
                            .map(|post| view! { <PostItem post=post preview_chars=preview_chars /> })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
