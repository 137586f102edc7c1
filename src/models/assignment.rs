//! Assignment result model.
//!
//! The outcome of one engine run: which employee got which task, the
//! overall project span, and the accumulated cost. Results are derived
//! data and are recomputed on every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Result of assigning tasks to employees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Task name → assigned employee name. Only assigned tasks appear.
    pub assignments: BTreeMap<String, String>,
    /// Inclusive day span from the earliest start to the latest end over
    /// all input tasks, assigned or not. Zero when there are no tasks.
    pub project_duration_days: i64,
    /// Sum of `duration × rate` over assigned tasks.
    pub total_cost: f64,
    /// Earliest start date over all input tasks.
    pub project_start: Option<NaiveDate>,
    /// Latest end date over all input tasks.
    pub project_end: Option<NaiveDate>,
    /// Assignments in the order they were made.
    pub timeline: Vec<Assignment>,
    /// Tasks left unassigned, in processing order.
    pub unassigned: Vec<Unassigned>,
}

/// A single task-employee assignment with its dates and cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned task ID.
    pub task_id: String,
    /// Assigned task name.
    pub task_name: String,
    /// Assigned employee ID.
    pub employee_id: String,
    /// Assigned employee name.
    pub employee_name: String,
    /// First day of the task.
    pub start_date: NaiveDate,
    /// Last day of the task (inclusive).
    pub end_date: NaiveDate,
    /// Inclusive duration in days.
    pub duration_days: i64,
    /// Cost contribution of this assignment.
    pub cost: f64,
}

/// A task the engine could not assign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unassigned {
    /// Task ID.
    pub task_id: String,
    /// Task name.
    pub task_name: String,
    /// Why the task was skipped.
    pub reason: UnassignedReason,
}

/// Why a task was left unassigned. Neither case is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnassignedReason {
    /// One or more predecessors were not assigned when the task came up.
    UnresolvedPredecessor {
        /// Predecessor names missing from the assignment map.
        missing: Vec<String>,
    },
    /// No employee with the required position was free before the start date.
    NoCandidate,
}

impl AssignmentResult {
    /// Creates an empty result (no tasks, zero duration, zero cost).
    pub fn new() -> Self {
        Self::default()
    }

    /// Employee name assigned to a task, if any.
    pub fn employee_for(&self, task_name: &str) -> Option<&str> {
        self.assignments.get(task_name).map(String::as_str)
    }

    /// Whether a task with this name was assigned.
    pub fn is_assigned(&self, task_name: &str) -> bool {
        self.assignments.contains_key(task_name)
    }

    /// Number of assignments made.
    pub fn assignment_count(&self) -> usize {
        self.timeline.len()
    }

    /// Whether every input task was assigned.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Returns all assignments for a given employee ID.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<&Assignment> {
        self.timeline
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }

    /// Busy days per employee ID, over employees that received work.
    pub fn busy_days_by_employee(&self) -> HashMap<String, i64> {
        let mut busy: HashMap<String, i64> = HashMap::new();
        for a in &self.timeline {
            *busy.entry(a.employee_id.clone()).or_insert(0) += a.duration_days;
        }
        busy
    }

    /// Cost per employee ID, over employees that received work.
    pub fn cost_by_employee(&self) -> HashMap<String, f64> {
        let mut cost: HashMap<String, f64> = HashMap::new();
        for a in &self.timeline {
            *cost.entry(a.employee_id.clone()).or_insert(0.0) += a.cost;
        }
        cost
    }
}
