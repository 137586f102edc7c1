//! Assignment domain models.
//!
//! Normalized records handed to the engine and the result it returns.
//! Dates are calendar days (`chrono::NaiveDate`); durations are
//! inclusive day counts.
//!
//! # Domain Mappings
//!
//! | u-assign | Project staffing | Workshop | Clinic |
//! |----------|-----------------|----------|--------|
//! | Employee | Staff member | Technician | Nurse |
//! | Position | Role | Trade | Ward |
//! | Task | Work package | Repair job | Shift block |
//! | AssignmentResult | Staffing plan | Job board | Roster |

mod assignment;
mod employee;
mod task;

pub use assignment::{Assignment, AssignmentResult, Unassigned, UnassignedReason};
pub use employee::Employee;
pub use task::Task;
