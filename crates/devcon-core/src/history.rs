//! Bounded history of submitted lines, most recent first.

use std::collections::VecDeque;

/// Maximum number of history entries to retain when not configured.
pub const DEFAULT_HISTORY_SIZE: usize = 75;

/// Submitted lines, newest at index 0.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl History {
    /// Create an empty history keeping at most `capacity` entries. Storage
    /// grows with use, not with the capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Record a submitted line.
    ///
    /// The line is trimmed. Empty lines and repeats of the most recent entry
    /// are not recorded. Returns whether an entry was added.
    pub fn push(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || self.capacity == 0 {
            return false;
        }
        if self.entries.front().is_some_and(|last| last == line) {
            return false;
        }
        self.entries.push_front(line.to_string());
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        true
    }

    /// Entry `index` steps back, 0 being the most recent.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut h = History::new(10);
        h.push("a");
        h.push("b");
        h.push("c");
        assert_eq!(h.iter().collect::<Vec<_>>(), vec!["c", "b", "a"]);
        assert_eq!(h.get(0), Some("c"));
        assert_eq!(h.get(3), None);
    }

    #[test]
    fn no_consecutive_duplicates() {
        let mut h = History::new(10);
        assert!(h.push("help"));
        assert!(!h.push("help"));
        assert!(!h.push("  help  "));
        assert!(h.push("list"));
        assert!(h.push("help"));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn empty_lines_ignored() {
        let mut h = History::new(10);
        assert!(!h.push(""));
        assert!(!h.push("   "));
        assert!(h.is_empty());
    }

    #[test]
    fn oldest_evicted() {
        let mut h = History::new(3);
        for line in ["1", "2", "3", "4", "5"] {
            h.push(line);
        }
        assert_eq!(h.len(), 3);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec!["5", "4", "3"]);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut h = History::new(0);
        assert!(!h.push("x"));
        assert!(h.is_empty());
    }

    #[test]
    fn huge_capacity_grows_on_demand() {
        let mut h = History::new(usize::MAX);
        assert_eq!(h.capacity(), usize::MAX);
        assert!(h.push("list"));
        assert!(h.push("help"));
        assert_eq!(h.iter().collect::<Vec<_>>(), vec!["help", "list"]);
    }

    #[test]
    fn default_capacity() {
        assert_eq!(History::default().capacity(), DEFAULT_HISTORY_SIZE);
    }

    #[test]
    fn clear_empties() {
        let mut h = History::new(5);
        h.push("x");
        h.clear();
        assert!(h.is_empty());
    }
}
