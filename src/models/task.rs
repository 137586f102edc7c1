//! Task model.
//!
//! A task is a dated unit of work that requires one position and may
//! depend on other tasks by name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task to be assigned to an employee.
///
/// # Keys
/// The `name` is the join key for predecessor lookups and for the
/// assignment map. Duplicate names make results ambiguous; see
/// [`validate_input`](crate::validation::validate_input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique stable identifier (carried through, never matched on).
    pub id: String,
    /// Task name, unique within a run.
    pub name: String,
    /// Required qualification tag.
    pub position: String,
    /// First working day.
    pub start_date: NaiveDate,
    /// Last working day (inclusive).
    pub end_date: NaiveDate,
    /// Names of tasks that must be assigned before this one.
    #[serde(default)]
    pub predecessors: Vec<String>,
}

impl Task {
    /// Creates a new task spanning `start_date..=end_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            start_date,
            end_date,
            predecessors: Vec::new(),
        }
    }

    /// Adds a predecessor by task name.
    pub fn with_predecessor(mut self, name: impl Into<String>) -> Self {
        self.predecessors.push(name.into());
        self
    }

    /// Replaces the predecessor list.
    pub fn with_predecessors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors = names.into_iter().map(Into::into).collect();
        self
    }

    /// Inclusive duration in calendar days: `(end - start) + 1`.
    ///
    /// Negative when `end_date` precedes `start_date`; callers that care
    /// should validate first.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether this task depends on any other task.
    pub fn has_predecessors(&self) -> bool {
        !self.predecessors.is_empty()
    }
}
