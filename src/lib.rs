//! Task-to-employee assignment for the U-Engine ecosystem.
//!
//! Assigns dated tasks, each requiring one position and optionally
//! depending on other tasks, to employees who each hold one position
//! and a cost rate. The engine is a greedy, precedence-aware,
//! cost-minimizing single pass: deterministic, not optimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Task`, `Assignment`, `AssignmentResult`
//! - **`scheduler`**: `GreedyAssigner` (the engine) and `AssignmentKpi`
//! - **`records`**: Boundary records with string dates and free-text predecessors
//! - **`validation`**: Opt-in input checks (duplicate names, reversed dates, cycles)
//! - **`config`**, **`report`**: CLI configuration and plain-text output
//!
//! # Example
//!
//! ```
//! use u_assign::records::Project;
//! use u_assign::scheduler::assign;
//!
//! let project = Project::from_json_str(r#"{
//!     "employees": [{"id": 1, "name": "Ann", "position": "Dev", "hourly_cost": 10.0}],
//!     "tasks": [{"id": 1, "name": "Build", "position": "Dev",
//!                "start_date": "2024-01-01", "end_date": "2024-01-03"}]
//! }"#).unwrap();
//!
//! let result = assign(&project.employees(), &project.tasks(",").unwrap());
//! assert_eq!(result.employee_for("Build"), Some("Ann"));
//! assert_eq!(result.total_cost, 30.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Kolisch (1996), "Serial and parallel resource-constrained project scheduling methods revisited"

pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
