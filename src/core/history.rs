//! Transition history tracking.
//!
//! Provides immutable tracking of active-state changes over time. The log
//! is observational only: recording never influences which state runs or
//! which transition wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a change of the active state came about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Selected by the predicate scan (first eligible member wins).
    Scan,
    /// Forced by name through `transition_to`, bypassing predicates.
    Explicit,
    /// Reset to the sentinel after the active state was removed.
    Fallback,
}

/// Record of a single change of the active state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state that was active before the change.
    pub from: String,
    /// Name of the state that became active.
    pub to: String,
    /// When the change occurred.
    pub at: DateTime<Utc>,
    /// What caused the change.
    pub kind: TransitionKind,
}

/// Ordered, append-only history of active-state changes.
///
/// The log is immutable: [`record`](TransitionLog::record) returns a new
/// log with the entry appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use regime::core::{TransitionKind, TransitionLog, TransitionRecord};
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: "idle".to_string(),
///     to: "patrol".to_string(),
///     at: Utc::now(),
///     kind: TransitionKind::Scan,
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.path(), vec!["idle", "patrol"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        TransitionLog {
            records: Vec::new(),
        }
    }

    /// Return a new log with the record appended.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        TransitionLog { records }
    }

    /// All records in the order they were appended.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any change has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sequence of state names visited, starting at the first record's
    /// origin. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.records.iter().map(|r| r.to.as_str()));
        path
    }

    /// Wall-clock span between the first and last recorded change.
    ///
    /// `None` when the log is empty or clock adjustments made the span
    /// negative.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        (last.at - first.at).to_std().ok()
    }
}
