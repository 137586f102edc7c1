//! Employee model.
//!
//! Employees are the people tasks are assigned to. Each employee holds
//! exactly one position (qualification tag) and a cost rate.

use serde::{Deserialize, Serialize};

/// An employee that can be assigned to tasks.
///
/// Immutable for the duration of an assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique stable identifier.
    pub id: String,
    /// Display label, reported in assignment results.
    pub name: String,
    /// Qualification tag. Must equal a task's position exactly.
    pub position: String,
    /// Cost rate charged per day of task duration.
    pub hourly_cost: f64,
}

impl Employee {
    /// Creates a new employee with zero cost.
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            hourly_cost: 0.0,
        }
    }

    /// Sets the cost rate.
    pub fn with_cost(mut self, hourly_cost: f64) -> Self {
        self.hourly_cost = hourly_cost;
        self
    }

    /// Whether this employee holds the given position.
    #[inline]
    pub fn qualifies_for(&self, position: &str) -> bool {
        self.position == position
    }

    /// Cost of working `days` days at this employee's rate.
    #[inline]
    pub fn cost_for(&self, days: i64) -> f64 {
        days as f64 * self.hourly_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("E1", "Alice", "Dev").with_cost(12.5);
        assert_eq!(e.id, "E1");
        assert_eq!(e.name, "Alice");
        assert_eq!(e.position, "Dev");
        assert!((e.hourly_cost - 12.5).abs() < 1e-10);
    }

    #[test]
    fn test_position_match_is_exact() {
        let e = Employee::new("E1", "Alice", "Dev");
        assert!(e.qualifies_for("Dev"));
        assert!(!e.qualifies_for("dev"));
        assert!(!e.qualifies_for("Dev "));
    }

    #[test]
    fn test_cost_for() {
        let e = Employee::new("E1", "Alice", "Dev").with_cost(10.0);
        assert!((e.cost_for(3) - 30.0).abs() < 1e-10);
        assert!((e.cost_for(0) - 0.0).abs() < 1e-10);
    }
}
