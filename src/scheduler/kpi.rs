//! Assignment quality metrics (KPIs).
//!
//! Computes summary indicators from an assignment result and its
//! input tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assignment Rate | assigned tasks / input tasks |
//! | Busy Days | Sum of assigned task durations per employee |
//! | Utilization | busy days / project duration, per employee |
//! | Avg Utilization | Mean over employees with work |
//! | Avg Cost per Task | total cost / assigned tasks |

use std::collections::HashMap;

use crate::models::{AssignmentResult, Task};

/// Assignment performance indicators.
#[derive(Debug, Clone)]
pub struct AssignmentKpi {
    /// Number of input tasks.
    pub task_count: usize,
    /// Number of tasks that received an employee.
    pub assigned_count: usize,
    /// Number of tasks left unassigned.
    pub unassigned_count: usize,
    /// Fraction of tasks assigned (0.0..1.0). 1.0 when there are no tasks.
    pub assignment_rate: f64,
    /// Busy days per employee ID.
    pub busy_days_by_employee: HashMap<String, i64>,
    /// Cost per employee ID.
    pub cost_by_employee: HashMap<String, f64>,
    /// Busy days over project duration, per employee ID.
    pub utilization_by_employee: HashMap<String, f64>,
    /// Mean utilization over employees with work.
    pub avg_utilization: f64,
    /// Mean cost over assigned tasks.
    pub avg_cost_per_task: f64,
}

impl AssignmentKpi {
    /// Computes KPIs from a result and the tasks it was computed from.
    pub fn calculate(result: &AssignmentResult, tasks: &[Task]) -> Self {
        let task_count = tasks.len();
        let assigned_count = result.assignment_count();
        let unassigned_count = result.unassigned.len();

        let assignment_rate = if task_count == 0 {
            1.0
        } else {
            assigned_count as f64 / task_count as f64
        };

        let busy_days_by_employee = result.busy_days_by_employee();
        let horizon = result.project_duration_days;
        let utilization_by_employee: HashMap<String, f64> = if horizon <= 0 {
            HashMap::new()
        } else {
            busy_days_by_employee
                .iter()
                .map(|(id, &busy)| (id.clone(), busy as f64 / horizon as f64))
                .collect()
        };

        let avg_utilization = if utilization_by_employee.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_employee.values().sum();
            sum / utilization_by_employee.len() as f64
        };

        let avg_cost_per_task = if assigned_count == 0 {
            0.0
        } else {
            result.total_cost / assigned_count as f64
        };

        Self {
            task_count,
            assigned_count,
            unassigned_count,
            assignment_rate,
            busy_days_by_employee,
            cost_by_employee: result.cost_by_employee(),
            utilization_by_employee,
            avg_utilization,
            avg_cost_per_task,
        }
    }

    /// Whether every input task was assigned.
    pub fn fully_staffed(&self) -> bool {
        self.unassigned_count == 0
    }
}
