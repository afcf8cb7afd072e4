// SPDX-License-Identifier: MPL-2.0
//! Back/forward stack of visited locations.

/// Bounded navigation history.
///
/// There is always a current entry. Pushing drops any forward entries, and
/// once `limit` entries are stored the oldest one is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    limit: usize,
}

impl History {
    /// Creates a history whose only entry is `initial`. A `limit` of 0 is treated as 1.
    #[must_use]
    pub fn new(initial: impl Into<String>, limit: usize) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
            limit: limit.max(1),
        }
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Adds a new entry after the current one.
    pub fn push(&mut self, location: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location.into());
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
    }

    /// Overwrites the current entry.
    pub fn replace(&mut self, location: impl Into<String>) {
        self.entries[self.index] = location.into();
    }

    /// Steps back. Returns the new current entry, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Steps forward. Returns the new current entry, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its current entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_entry() {
        let history = History::new("/", 10);
        assert_eq!(history.current(), "/");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn back_and_forward_walk_the_stack() {
        let mut history = History::new("/", 10);
        history.push("/blogs");
        history.push("/blogs/a");

        assert_eq!(history.back(), Some("/blogs"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/blogs"));
        assert_eq!(history.forward(), Some("/blogs/a"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = History::new("/", 10);
        history.push("/blogs");
        history.push("/blogs/a");
        history.back();

        history.push("/project/1");

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("/blogs"));
    }

    #[test]
    fn limit_drops_oldest_entries() {
        let mut history = History::new("/0", 3);
        for i in 1..=4 {
            history.push(format!("/{i}"));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), "/4");
        assert_eq!(history.back(), Some("/3"));
        assert_eq!(history.back(), Some("/2"));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = History::new("/", 10);
        history.push("/blogs");
        history.replace("/project/1");

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), "/project/1");
    }

    #[test]
    fn zero_limit_still_keeps_current_entry() {
        let mut history = History::new("/", 0);
        history.push("/blogs");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), "/blogs");
    }
}
