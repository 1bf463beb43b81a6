//! Blog Posts
//!
//! Content for the right-hand panel: the embedded post table, the source that
//! serves it after a simulated delay, and the per-cycle load state machine.

use std::borrow::Cow;

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::models::Post;

const ELLIPSIS: &str = "...";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentLoadError {
    #[error("posts unavailable: {0}")]
    Unavailable(String),
}

/// Something that can produce the post list.
pub trait PostSource {
    async fn fetch(&self) -> Result<Vec<Post>, ContentLoadError>;
}

/// Serves the embedded posts after `delay_ms`.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosts {
    pub delay_ms: u32,
    /// Fail every load instead of returning posts.
    pub simulate_failure: bool,
}

impl FixedPosts {
    /// What a fetch resolves to once the delay has elapsed.
    pub fn resolve(&self) -> Result<Vec<Post>, ContentLoadError> {
        if self.simulate_failure {
            return Err(ContentLoadError::Unavailable(
                "simulated failure".to_string(),
            ));
        }
        Ok(fixed_posts())
    }
}

impl PostSource for FixedPosts {
    async fn fetch(&self) -> Result<Vec<Post>, ContentLoadError> {
        TimeoutFuture::new(self.delay_ms).await;
        self.resolve()
    }
}

/// Result of the current load cycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(ContentLoadError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Post list state across load cycles.
///
/// Every `begin` opens a new generation; `finish` only lands for the newest
/// one, so a retry racing a slow earlier load cannot be overwritten by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFeed {
    state: LoadState<Vec<Post>>,
    generation: u64,
}

impl PostFeed {
    pub fn state(&self) -> &LoadState<Vec<Post>> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter `Loading` and return the generation to hand back to `finish`.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply a fetch result. Returns false and drops it when `generation` is stale.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<Vec<Post>, ContentLoadError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(posts) => LoadState::Loaded(posts),
            Err(e) => LoadState::Failed(e),
        };
        true
    }
}

/// Whether `body` is long enough to need a View More toggle.
pub fn is_truncated(body: &str, limit: usize) -> bool {
    body.chars().count() > limit
}

/// First `limit` characters of `body` plus an ellipsis, or all of it if short.
pub fn preview(body: &str, limit: usize) -> Cow<'_, str> {
    match body.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &body[..cut], ELLIPSIS)),
        None => Cow::Borrowed(body),
    }
}

const POSTS: &[(u32, &str, &str)] = &[
    (
        1,
        "10 Tips for Better React Development",
        "React has become one of the most popular JavaScript libraries for building user interfaces. Here are some essential tips to improve your React development skills: Use functional components with hooks instead of class components, implement proper state management with useState and useReducer, leverage useEffect for side effects, and always remember to clean up subscriptions to prevent memory leaks. Additionally, consider using React.memo for performance optimization and keep your components small and focused on a single responsibility.",
    ),
    (
        2,
        "The Future of Web Development in 2024",
        "Web development continues to evolve rapidly with new technologies and frameworks emerging constantly. In 2024, we're seeing increased adoption of TypeScript for better code reliability, the rise of server-side rendering with Next.js and similar frameworks, and growing interest in WebAssembly for performance-critical applications. Progressive Web Apps (PWAs) are becoming more sophisticated, and the focus on web accessibility and performance optimization remains stronger than ever.",
    ),
    (
        3,
        "Building Responsive Designs with TailwindCSS",
        "TailwindCSS has revolutionized how developers approach styling in web applications. Unlike traditional CSS frameworks, Tailwind provides utility-first classes that allow for rapid prototyping and consistent design systems. The framework includes responsive design utilities, dark mode support, and extensive customization options. By using classes like 'md:grid-cols-2' and 'hover:bg-blue-700', developers can create beautiful, responsive interfaces without writing custom CSS.",
    ),
    (
        4,
        "JavaScript ES2024: New Features You Should Know",
        "JavaScript continues to evolve with ES2024 bringing several exciting new features to the language. The new Array.prototype.with() method allows for immutable array updates, while the Object.groupBy() method simplifies data transformation tasks. Additionally, improvements to async/await error handling and new built-in decorators make JavaScript development more powerful and expressive. These features help developers write cleaner, more maintainable code while improving application performance.",
    ),
    (
        5,
        "API Design Best Practices for Modern Applications",
        "Designing robust APIs is crucial for modern web applications. Follow RESTful principles with proper HTTP methods and status codes, implement comprehensive error handling with meaningful error messages, and always include proper authentication and authorization mechanisms. Use consistent naming conventions for endpoints, implement pagination for large datasets, and provide clear API documentation. Consider using GraphQL for complex data fetching requirements and always version your APIs to maintain backward compatibility.",
    ),
];

/// The embedded post table
pub fn fixed_posts() -> Vec<Post> {
    POSTS
        .iter()
        .map(|(id, title, body)| Post {
            id: *id,
            title: title.to_string(),
            body: body.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(simulate_failure: bool) -> FixedPosts {
        FixedPosts {
            delay_ms: 0,
            simulate_failure,
        }
    }

    #[test]
    fn test_fixed_posts() {
        let posts = fixed_posts();
        assert_eq!(posts.len(), 5);
        let ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(posts.iter().all(|p| is_truncated(&p.body, 100)));
    }

    #[test]
    fn test_feed_starts_loading() {
        let feed = PostFeed::default();
        assert!(feed.state().is_loading());
    }

    #[test]
    fn test_feed_loads_five_posts() {
        let mut feed = PostFeed::default();
        let gen = feed.begin();
        assert!(feed.state().is_loading());

        assert!(feed.finish(gen, source(false).resolve()));
        match feed.state() {
            LoadState::Loaded(posts) => assert_eq!(posts.len(), 5),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_retry_from_failed_reenters_loading() {
        let mut feed = PostFeed::default();
        let gen = feed.begin();
        feed.finish(gen, source(true).resolve());
        assert!(matches!(feed.state(), LoadState::Failed(_)));

        let retry = feed.begin();
        assert!(retry > gen);
        assert!(feed.state().is_loading());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut feed = PostFeed::default();
        let first = feed.begin();
        let second = feed.begin();

        assert!(feed.finish(second, source(false).resolve()));
        assert!(!feed.finish(first, source(true).resolve()));
        assert!(matches!(feed.state(), LoadState::Loaded(_)));
        assert_eq!(feed.generation(), second);
    }

    #[test]
    fn test_preview_truncates_long_body() {
        let body = "x".repeat(150);
        assert!(is_truncated(&body, 100));

        let short = preview(&body, 100);
        assert_eq!(short.len(), 103);
        assert!(short.ends_with("..."));
        assert_eq!(&short[..100], &body[..100]);
    }

    #[test]
    fn test_preview_keeps_short_body() {
        let body = "y".repeat(100);
        assert!(!is_truncated(&body, 100));
        assert!(matches!(preview(&body, 100), Cow::Borrowed(_)));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let body = "é".repeat(101);
        let short = preview(&body, 100);
        assert_eq!(short.chars().count(), 103);
        assert!(short.starts_with(&"é".repeat(100)));
    }
}
