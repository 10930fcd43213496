//! Navigation history
//!
//! A linear list of states with a cursor. Pushing drops everything after
//! the cursor, then trims the oldest states down to the configured limit.

use crate::config::HistoryLimit;
use crate::error::{BrowserError, BrowserResult};

/// Navigation history
#[derive(Debug, Clone)]
pub struct History<T> {
    states: Vec<T>,
    cursor: Option<usize>,
    limit: HistoryLimit,
}

impl<T> History<T> {
    /// Create new history
    pub fn new(limit: HistoryLimit) -> Self {
        Self {
            states: Vec::new(),
            cursor: None,
            limit,
        }
    }

    /// Navigate to a new state
    pub fn push(&mut self, state: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.states.truncate(keep);
        self.states.push(state);

        let mut cursor = self.states.len() - 1;
        if let Some(max) = self.limit.max_len() {
            let excess = self.states.len().saturating_sub(max);
            if excess > 0 {
                self.states.drain(..excess);
                cursor -= excess;
                tracing::debug!("Dropped {} old history entries", excess);
            }
        }
        self.cursor = Some(cursor);
    }

    /// Current state
    pub fn current(&self) -> Option<&T> {
        self.states.get(self.cursor?)
    }

    /// Go back `n` states
    pub fn back(&mut self, n: usize) -> BrowserResult<&T> {
        self.traverse(|cursor| cursor.checked_sub(n))
    }

    /// Go forward `n` states
    pub fn forward(&mut self, n: usize) -> BrowserResult<&T> {
        self.traverse(|cursor| cursor.checked_add(n))
    }

    fn traverse(&mut self, step: impl FnOnce(usize) -> Option<usize>) -> BrowserResult<&T> {
        if !self.limit.is_tracking() {
            return Err(BrowserError::NotTrackingHistory);
        }
        let to = self
            .cursor
            .and_then(step)
            .filter(|&to| to < self.states.len())
            .ok_or(BrowserError::IndexOutOfRange)?;
        self.cursor = Some(to);
        Ok(&self.states[to])
    }

    /// Position of the current state
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Can go back
    pub fn can_go_back(&self) -> bool {
        self.limit.is_tracking() && self.cursor.is_some_and(|c| c > 0)
    }

    /// Can go forward
    pub fn can_go_forward(&self) -> bool {
        self.limit.is_tracking() && self.cursor.is_some_and(|c| c + 1 < self.states.len())
    }

    /// All states, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.states.iter()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(HistoryLimit::default())
    }
}
