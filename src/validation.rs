//! Input validation for assignment runs.
//!
//! The engine itself never validates: it accepts whatever snapshot it is
//! given and lets malformed input degrade the result. These checks are an
//! opt-in pre-pass for callers that would rather reject bad input.
//! Detects:
//! - Duplicate employee IDs, task IDs and task names
//! - Tasks that end before they start
//! - Negative or non-finite cost rates
//! - Predecessors naming no task
//! - Circular predecessor references
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{Employee, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two employees share the same ID.
    DuplicateEmployeeId,
    /// Two tasks share the same ID.
    DuplicateTaskId,
    /// Two tasks share the same name (the assignment join key).
    DuplicateTaskName,
    /// A task's end date precedes its start date.
    NegativeDuration,
    /// An employee's cost rate is negative, NaN or infinite.
    InvalidCost,
    /// A task names a predecessor that doesn't exist.
    UnknownPredecessor,
    /// Predecessor references form a cycle.
    CyclicDependency,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an employee/task snapshot.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. No duplicate task IDs or task names
/// 3. Every task has `end_date >= start_date`
/// 4. Every cost rate is finite and non-negative
/// 5. Every predecessor names an existing task
/// 6. No circular predecessor references
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmployeeId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        if !e.hourly_cost.is_finite() || e.hourly_cost < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCost,
                format!("Employee '{}' has invalid cost rate {}", e.id, e.hourly_cost),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    let mut task_names = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if !task_names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskName,
                format!("Duplicate task name: {}", task.name),
            ));
        }
        if task.end_date < task.start_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!(
                    "Task '{}' ends ({}) before it starts ({})",
                    task.name, task.end_date, task.start_date
                ),
            ));
        }
    }

    for task in tasks {
        for pred in &task.predecessors {
            if !task_names.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPredecessor,
                    format!("Task '{}' references unknown predecessor '{}'", task.name, pred),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the predecessor graph using DFS.
///
/// Nodes are task names. Visiting order follows input order so the
/// reported task is deterministic.
fn detect_cycles(tasks: &[Task]) -> Option<ValidationError> {
    // predecessor name → successor names
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for task in tasks {
        for pred in &task.predecessors {
            adj.entry(pred.as_str()).or_default().push(task.name.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.name.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(successors) = adj.get(node) {
        for &next in successors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
