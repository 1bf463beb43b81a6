//! Task List
//!
//! In-memory to-do collection plus its local-storage round trip. Kept free of
//! Leptos so the store helpers stay thin and this logic runs in host tests.

use browser_kv::{load_json, save_json, KeyValueStore, StorageResult};
use std::collections::HashSet;
use tracing::warn;

use crate::models::{Task, TaskStats};

/// Ordered task collection. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self { tasks, last_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and return its id. Blank text is ignored.
    ///
    /// Ids follow the millisecond clock but never repeat: two adds in the same
    /// tick get consecutive ids. Once `u64::MAX` has been issued, the smallest
    /// id not in the list is reused instead.
    pub fn add(&mut self, text: &str, now_ms: u64) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = match self.last_id.checked_add(1) {
            Some(next) => {
                let id = now_ms.max(next);
                self.last_id = id;
                id
            }
            None => {
                let id = self.smallest_unused_id();
                warn!(id, "task ids exhausted, reusing a free id");
                id
            }
        };
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    // At most len() ids are taken, so one of 1..=len()+1 is free.
    fn smallest_unused_id(&self) -> u64 {
        let taken: HashSet<u64> = self.tasks.iter().map(|t| t.id).collect();
        (1..).find(|id| !taken.contains(id)).unwrap_or(1)
    }

    /// Flip `completed`. Returns false if no task has `id`.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove by id. Returns false if no task has `id`.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Tasks whose text contains `search_term`, ignoring case.
    pub fn filtered(&self, search_term: &str) -> Vec<Task> {
        if search_term.is_empty() {
            return self.tasks.clone();
        }
        let needle = search_term.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| matches_term(&t.text, &needle))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            completed,
            remaining: total - completed,
        }
    }

    /// Load the persisted collection. A missing key yields an empty list.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StorageResult<Self> {
        let tasks: Option<Vec<Task>> = load_json(store, key)?;
        Ok(Self::from_tasks(tasks.unwrap_or_default()))
    }

    /// Overwrite the persisted collection with the current one.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> StorageResult<()> {
        save_json(store, key, &self.tasks)
    }
}

fn matches_term(text: &str, lowered_needle: &str) -> bool {
    text.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use browser_kv::MemoryStore;

    const KEY: &str = "todos";

    fn list_of(texts: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for (i, text) in texts.iter().enumerate() {
            list.add(text, 1_000 + i as u64);
        }
        list
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = list_of(&["Walk dog"]);
        let before = list.clone();

        assert_eq!(list.add("", 5_000), None);
        assert_eq!(list.add("   \t\n", 5_000), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_creates_open_task() {
        let mut list = TaskList::new();
        let id = list.add("Buy milk", 1_700_000_000_000).unwrap();

        assert_eq!(list.len(), 1);
        let task = &list.tasks()[0];
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        list.add("  Buy milk  ", 1);
        assert_eq!(list.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn test_ids_unique_within_same_tick() {
        let mut list = TaskList::new();
        let a = list.add("a", 42).unwrap();
        let b = list.add("b", 42).unwrap();
        let c = list.add("c", 10).unwrap(); // clock went backwards

        assert_eq!((a, b, c), (42, 43, 44));
    }

    #[test]
    fn test_ids_continue_after_restored_max() {
        let mut list = TaskList::from_tasks(vec![Task {
            id: 9_000,
            text: "old".into(),
            completed: true,
        }]);
        assert_eq!(list.add("new", 100), Some(9_001));
    }

    #[test]
    fn test_add_after_max_id_reuses_free_id() {
        let mut list = TaskList::from_tasks(vec![
            Task {
                id: u64::MAX,
                text: "x".into(),
                completed: false,
            },
            Task {
                id: 1,
                text: "one".into(),
                completed: false,
            },
        ]);

        assert_eq!(list.add("y", 5), Some(2));
        assert_eq!(list.add("z", 5), Some(3));
        assert_eq!(list.len(), 4);

        let mut ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = list_of(&["Buy milk"]);
        let id = list.tasks()[0].id;

        assert!(list.toggle(id));
        assert!(list.tasks()[0].completed);
        assert!(list.toggle(id));
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut list = list_of(&["Buy milk"]);
        let before = list.clone();
        assert!(!list.toggle(1));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete() {
        let mut list = list_of(&["a", "b", "c"]);
        let id = list.tasks()[1].id;

        assert!(list.delete(id));
        assert_eq!(texts(list.tasks()), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(!list.delete(77));
        assert_eq!(list, before);
    }

    #[test]
    fn test_filtered_empty_term_keeps_order() {
        let list = list_of(&["Buy milk", "Walk dog", "Call mom"]);
        assert_eq!(
            texts(&list.filtered("")),
            vec!["Buy milk", "Walk dog", "Call mom"]
        );
    }

    #[test]
    fn test_filtered_case_insensitive() {
        let list = list_of(&["Buy milk", "Walk dog"]);
        assert_eq!(texts(&list.filtered("milk")), vec!["Buy milk"]);
        assert_eq!(texts(&list.filtered("MILK")), vec!["Buy milk"]);
        assert_eq!(texts(&list.filtered("bUy M")), vec!["Buy milk"]);
        assert!(list.filtered("cat").is_empty());
    }

    #[test]
    fn test_filtered_does_not_reorder_after_toggle() {
        let mut list = list_of(&["milk a", "dog", "milk b"]);
        let first = list.tasks()[0].id;
        list.toggle(first);

        assert_eq!(texts(&list.filtered("milk")), vec!["milk a", "milk b"]);
    }

    #[test]
    fn test_stats() {
        let mut list = list_of(&["a", "b", "c"]);
        let id = list.tasks()[2].id;
        list.toggle(id);

        assert_eq!(
            list.stats(),
            TaskStats {
                total: 3,
                completed: 1,
                remaining: 2
            }
        );
        assert_eq!(TaskList::new().stats(), TaskStats::default());
    }

    #[test]
    fn test_persist_restore_round_trip() {
        let store = MemoryStore::new();
        let mut list = list_of(&["Buy milk", "Walk dog"]);
        let id = list.tasks()[0].id;
        list.toggle(id);

        list.persist(&store, KEY).unwrap();
        let restored = TaskList::restore(&store, KEY).unwrap();
        assert_eq!(restored, list);
    }

    #[test]
    fn test_restore_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(TaskList::restore(&store, KEY).unwrap().is_empty());
    }

    #[test]
    fn test_restore_corrupt_is_error() {
        let store = MemoryStore::new();
        store.set(KEY, "[{\"id\":1,").unwrap();

        let err = TaskList::restore(&store, KEY).unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_restore_reads_existing_format() {
        let store = MemoryStore::new();
        store
            .set(
                KEY,
                r#"[{"id":1717171717171,"text":"Buy milk","completed":false},
                    {"id":1717171717999,"text":"Walk dog","completed":true}]"#,
            )
            .unwrap();

        let list = TaskList::restore(&store, KEY).unwrap();
        assert_eq!(texts(list.tasks()), vec!["Buy milk", "Walk dog"]);
        assert_eq!(list.stats().completed, 1);
    }
}
