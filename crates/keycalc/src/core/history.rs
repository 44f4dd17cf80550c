//! Bounded record of successful evaluations

use crate::display::format_committed;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One successful evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Expression that was evaluated (machine form)
    pub expression: String,
    /// Rendered result
    pub result: String,
    /// Unix epoch millis
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::with_timestamp(expression, result, Self::current_timestamp())
    }

    /// Creates an entry with a fixed timestamp
    #[must_use]
    pub fn with_timestamp(
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }

    /// Renders `expression = result` using display glyphs
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", format_committed(&self.expression), self.result)
    }
}

/// Evaluation history, oldest entries dropped first once full
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history holding at most `max_entries`
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records an evaluated expression and its rendered result
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(HistoryEntry::new(expression, result));
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns up to `n` entries, newest first
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== HistoryEntry =====

    #[test]
    fn test_entry_new_has_timestamp() {
        let entry = HistoryEntry::new("2+2", "4");
        assert_eq!(entry.expression, "2+2");
        assert_eq!(entry.result, "4");
        assert!(entry.timestamp > 0);
    }

    #[test]
    fn test_entry_display_uses_glyphs() {
        let entry = HistoryEntry::with_timestamp("3+4", "7", 0);
        assert_eq!(entry.display(), "3 + 4 = 7");
        let entry = HistoryEntry::with_timestamp("9/2", "4.5", 0);
        assert_eq!(entry.display(), "9 ÷ 2 = 4.5");
    }

    #[test]
    fn test_entry_serialize() {
        let entry = HistoryEntry::with_timestamp("2*3", "6", 1000);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"expression":"2*3","result":"6","timestamp":1000}"#);
    }

    // ===== History =====

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.max_entries(), History::DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = History::with_capacity(3);
        for n in 1..=4 {
            history.record(&n.to_string(), &n.to_string());
        }
        assert_eq!(history.len(), 3);
        let kept: Vec<&str> = history.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(kept, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_history_zero_capacity_keeps_nothing() {
        let mut history = History::with_capacity(0);
        history.record("1+1", "2");
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_order() {
        let mut history = History::new();
        history.record("a", "1");
        history.record("b", "2");
        history.record("c", "3");

        let newest: Vec<&str> = history.iter_rev().map(|e| e.result.as_str()).collect();
        assert_eq!(newest, vec!["3", "2", "1"]);
        assert_eq!(history.last().unwrap().result, "3");

        let last_2: Vec<&str> = history.last_n(2).iter().map(|e| e.result.as_str()).collect();
        assert_eq!(last_2, vec!["3", "2"]);
        assert_eq!(history.last_n(10).len(), 3);
    }
}
