//! Post Item Component
//!
//! One blog post with a View More / Show Less toggle for long bodies.

use leptos::prelude::*;

use crate::models::Post;
use crate::posts::{is_truncated, preview};

#[component]
pub fn PostItem(post: Post, preview_chars: usize) -> impl IntoView {
    // Expanded flag lives and dies with this row
    let (show_full, set_show_full) = signal(false);

    let collapsible = is_truncated(&post.body, preview_chars);
    let short = preview(&post.body, preview_chars).into_owned();
    let full = post.body;
    let body = move || if show_full.get() { full.clone() } else { short.clone() };

    view! {
        <article class="post-item">
            <h3 class="post-title">{post.title}</h3>
            <p class="post-body">{body}</p>
            <Show when=move || collapsible>
                <button
                    class="post-toggle"
                    on:click=move |_| set_show_full.update(|v| *v = !*v)
                >
                    {move || if show_full.get() { "Show Less" } else { "View More" }}
                </button>
            </Show>
        </article>
    }
}
