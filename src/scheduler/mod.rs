//! Greedy assignment engine and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyAssigner` walks tasks in start-date order, gates each one on its
//! predecessors already being assigned, and gives it to the cheapest
//! qualified employee who is free before the task starts. It is not
//! optimal and never backtracks; it is a fast, deterministic baseline.
//!
//! # KPI
//!
//! `AssignmentKpi` summarizes a result: assignment rate, per-employee
//! busy days, cost and utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Kolisch (1996), "Serial and parallel resource-constrained project
//!   scheduling methods revisited"

mod greedy;
mod kpi;

pub use greedy::{assign, GreedyAssigner};
pub use kpi::AssignmentKpi;
