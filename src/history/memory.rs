//! In-memory navigation history.
//!
//! # Responsibilities
//! - Track the current path and the back/forward stack
//! - Deliver one navigation at a time, synchronously
//!
//! # Design Decisions
//! - Stand-in for browser history: push truncates the forward stack, the
//!   way a link click does after going back
//! - Boundary moves (back at the start, forward at the end) are no-ops
//!   returning None, not errors
//! - The history knows nothing about routes; it stores raw paths

use tracing::debug;

/// Browser-style visit stack with a cursor.
///
/// A fresh history starts at `/`.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    /// Index of the current entry. Always valid: `entries` is never empty.
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_string()],
            cursor: 0,
        }
    }

    /// Start the history at a specific path instead of `/`.
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: vec![path.into()],
            cursor: 0,
        }
    }

    /// The active path.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Visit a new path. Discards any forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
        debug!(path = self.current(), depth = self.entries.len(), "history push");
    }

    /// Replace the current entry without growing the stack.
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    /// Move one entry back. Returns the new current path, or None if
    /// already at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Move one entry forward. Returns the new current path, or None if
    /// already at the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false // there is always at least the initial entry
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let history = MemoryHistory::new();
        assert_eq!(history.current(), "/");
    }

    #[test]
    fn test_push_and_back() {
        let mut history = MemoryHistory::new();
        history.push("/watchers");
        history.push("/list-rendering");
        assert_eq!(history.current(), "/list-rendering");

        assert_eq!(history.back(), Some("/watchers"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), "/");
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = MemoryHistory::new();
        history.push("/watchers");
        history.back();
        assert_eq!(history.forward(), Some("/watchers"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_stack() {
        let mut history = MemoryHistory::new();
        history.push("/watchers");
        history.back();
        history.push("/form-bindings");

        // The /watchers entry is gone.
        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), "/form-bindings");
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut history = MemoryHistory::new();
        history.push("/watchers");
        history.replace("/computed-property");
        assert_eq!(history.current(), "/computed-property");
        assert_eq!(history.len(), 2);
        assert_eq!(history.back(), Some("/"));
    }
}
