//! Greedy, precedence-aware, cost-minimizing assignment.
//!
//! # Algorithm
//!
//! 1. Stable-sort tasks by start date (ties keep input order).
//! 2. Track the overall project span over every task.
//! 3. Skip a task unless all of its predecessors are already assigned.
//!    Skipped tasks are never revisited in the same run.
//! 4. Among employees with the required position whose last assignment
//!    ended strictly before the task starts, pick the one with the lowest
//!    `duration × rate`. The first such employee in input order wins ties.
//! 5. Record the assignment, mark the employee busy until the task's end
//!    date, and add the cost.
//!
//! No backtracking, no retry, no global optimality. A predecessor cycle
//! simply leaves its tasks unassigned.
//!
//! # Complexity
//! O(n log n + n * (m + p)) where n=tasks, m=employees, p=predecessors/task.

use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{Assignment, AssignmentResult, Employee, Task, Unassigned, UnassignedReason};
use crate::validation::validate_input;

/// Greedy task-to-employee assigner.
///
/// Stateless between calls: employee availability is rebuilt from scratch
/// on every run, so one assigner can be shared freely.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_assign::models::{Employee, Task};
/// use u_assign::scheduler::GreedyAssigner;
///
/// let day = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let employees = vec![Employee::new("1", "Ann", "Dev").with_cost(10.0)];
/// let tasks = vec![Task::new("1", "Build", "Dev", day("2024-01-01"), day("2024-01-03"))];
///
/// let result = GreedyAssigner::new().assign(&employees, &tasks);
/// assert_eq!(result.employee_for("Build"), Some("Ann"));
/// assert_eq!(result.project_duration_days, 3);
/// assert_eq!(result.total_cost, 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssigner {
    validate: bool,
}

impl GreedyAssigner {
    /// Creates an assigner that does not validate its input.
    pub fn new() -> Self {
        Self { validate: false }
    }

    /// Enables input validation in [`try_assign`](Self::try_assign).
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Whether [`try_assign`](Self::try_assign) validates first.
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Validates (when enabled), then assigns.
    ///
    /// # Errors
    /// `Error::Validation` with every detected problem.
    pub fn try_assign(&self, employees: &[Employee], tasks: &[Task]) -> Result<AssignmentResult> {
        if self.validate {
            validate_input(employees, tasks).map_err(Error::Validation)?;
        }
        Ok(self.assign(employees, tasks))
    }

    /// Assigns tasks to employees.
    ///
    /// Never fails. Tasks that cannot be assigned are listed in
    /// [`AssignmentResult::unassigned`] and left out of the map.
    pub fn assign(&self, employees: &[Employee], tasks: &[Task]) -> AssignmentResult {
        let mut result = AssignmentResult::new();
        // Per-employee "busy until" marker, by index into `employees`.
        let mut available_from: Vec<Option<NaiveDate>> = vec![None; employees.len()];

        for &task_idx in &sort_by_start(tasks) {
            let task = &tasks[task_idx];
            extend_span(&mut result, task);

            let duration = task.duration_days();

            let missing = missing_predecessors(task, &result.assignments);
            if !missing.is_empty() {
                debug!(
                    "Skipping task '{}': predecessors not assigned {:?}",
                    task.name, missing
                );
                result.unassigned.push(Unassigned {
                    task_id: task.id.clone(),
                    task_name: task.name.clone(),
                    reason: UnassignedReason::UnresolvedPredecessor { missing },
                });
                continue;
            }

            match select_candidate(task, duration, employees, &available_from) {
                Some((emp_idx, cost)) => {
                    let employee = &employees[emp_idx];
                    debug!(
                        "Assigned task '{}' to '{}' ({} days, cost {})",
                        task.name, employee.name, duration, cost
                    );
                    result
                        .assignments
                        .insert(task.name.clone(), employee.name.clone());
                    available_from[emp_idx] = Some(task.end_date);
                    result.total_cost += cost;
                    result.timeline.push(Assignment {
                        task_id: task.id.clone(),
                        task_name: task.name.clone(),
                        employee_id: employee.id.clone(),
                        employee_name: employee.name.clone(),
                        start_date: task.start_date,
                        end_date: task.end_date,
                        duration_days: duration,
                        cost,
                    });
                }
                None => {
                    debug!(
                        "No available '{}' employee for task '{}' starting {}",
                        task.position, task.name, task.start_date
                    );
                    result.unassigned.push(Unassigned {
                        task_id: task.id.clone(),
                        task_name: task.name.clone(),
                        reason: UnassignedReason::NoCandidate,
                    });
                }
            }
        }

        result.project_duration_days = match (result.project_start, result.project_end) {
            (Some(start), Some(end)) => (end - start).num_days() + 1,
            _ => 0,
        };

        info!(
            "Assigned {}/{} tasks, project duration {} days, total cost {}",
            result.assignment_count(),
            tasks.len(),
            result.project_duration_days,
            result.total_cost
        );
        if !result.unassigned.is_empty() {
            warn!("{} task(s) left unassigned", result.unassigned.len());
        }

        result
    }
}

/// Assigns tasks to employees with the default assigner.
///
/// Shorthand for `GreedyAssigner::new().assign(employees, tasks)`.
pub fn assign(employees: &[Employee], tasks: &[Task]) -> AssignmentResult {
    GreedyAssigner::new().assign(employees, tasks)
}

/// Task indices ordered by start date. Stable, so equal dates keep input order.
fn sort_by_start(tasks: &[Task]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).collect();
    indices.sort_by_key(|&i| tasks[i].start_date);
    indices
}

fn extend_span(result: &mut AssignmentResult, task: &Task) {
    result.project_start = Some(match result.project_start {
        Some(start) => start.min(task.start_date),
        None => task.start_date,
    });
    result.project_end = Some(match result.project_end {
        Some(end) => end.max(task.end_date),
        None => task.end_date,
    });
}

/// Predecessor names not yet present in the assignment map.
fn missing_predecessors(task: &Task, assignments: &BTreeMap<String, String>) -> Vec<String> {
    task.predecessors
        .iter()
        .filter(|p| !assignments.contains_key(p.as_str()))
        .cloned()
        .collect()
}

/// Cheapest qualified employee free strictly before the task starts.
///
/// Returns the employee index and the cost. Only a strictly lower cost
/// replaces the current best, so the earliest employee wins ties.
fn select_candidate(
    task: &Task,
    duration: i64,
    employees: &[Employee],
    available_from: &[Option<NaiveDate>],
) -> Option<(usize, f64)> {
    let mut best: Option<usize> = None;
    let mut best_cost = f64::INFINITY;

    for (idx, employee) in employees.iter().enumerate() {
        if !employee.qualifies_for(&task.position) {
            continue;
        }
        if let Some(busy_until) = available_from[idx] {
            if busy_until >= task.start_date {
                continue;
            }
        }
        let cost = employee.cost_for(duration);
        if cost < best_cost {
            best = Some(idx);
            best_cost = cost;
        }
    }

    best.map(|idx| (idx, best_cost))
}
