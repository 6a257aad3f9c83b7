//! # Request History
//!
//! Tracks the most recent requests of one session for quick re-use. Entries
//! are snapshots of `{method, url, status}`; recording an entry that already
//! exists moves it to the front instead of listing it twice.

use std::collections::VecDeque;

use crate::http::method::HttpMethod;

/// A single history entry recording a past request and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub method: HttpMethod,
    pub url: String,
    pub status: u16,
}

/// Bounded, deduplicated history list, most recent first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Add an entry to the front of the list, drop any older copy of the
    /// same triple and discard whatever falls beyond the limit.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);

        let mut seen: Vec<HistoryEntry> = Vec::with_capacity(self.entries.len());
        self.entries.retain(|entry| {
            if seen.contains(entry) {
                false
            } else {
                seen.push(entry.clone());
                true
            }
        });

        self.entries.truncate(self.limit);
    }

    /// Return all history entries (most recent first).
    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    /// Clear all history entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
