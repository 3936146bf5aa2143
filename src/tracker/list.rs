//! The MRU-ordered, capacity-bounded sequence of entries.

use crate::identity;

use super::entry::RecentEntry;

/// Ordered sequence of recent entries: index 0 is the most recently
/// activated document, increasing index means less recent.
///
/// Invariants after every mutation:
/// - path-keys are unique within the list
/// - length never exceeds the capacity bound
#[derive(Debug, Clone)]
pub struct RecentList {
    entries: Vec<RecentEntry>,
    capacity: usize,
}

impl RecentList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Rebuilds a list from already-deserialized entries, preserving
    /// their order. Duplicate path-keys keep the first (most recent)
    /// occurrence; the tail is evicted until the list fits `capacity`.
    pub fn from_entries(entries: Vec<RecentEntry>, capacity: usize) -> Self {
        let mut list = Self::new(capacity);
        for entry in entries {
            if list.position(&entry).is_none() {
                list.entries.push(entry);
            }
        }
        list.evict();
        list
    }

    /// Records an activation: any existing entry with the same path-key
    /// is removed, the new entry goes to the front, and the tail is
    /// evicted one entry at a time while the capacity bound is exceeded.
    pub fn record(&mut self, entry: RecentEntry) {
        if let Some(index) = self.position(&entry) {
            self.entries.remove(index);
        }
        self.entries.insert(0, entry);
        self.evict();
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop() {
                log::debug!("evicting least-recent entry {}", evicted.uri());
            }
        }
    }

    fn position(&self, of: &RecentEntry) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| identity::same_document(entry.uri(), of.uri()))
    }

    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
