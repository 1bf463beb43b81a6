//! Frontend Models
//!
//! Records shown by the two panels.

use serde::{Deserialize, Serialize};

/// A to-do entry. Serialized as-is into local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// A blog post from the content panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Task counters for the summary footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}
