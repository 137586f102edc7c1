//! Plain-text rendering of an assignment result.

use std::fmt::Write;

use crate::models::{AssignmentResult, UnassignedReason};
use crate::records::DATE_FORMAT;

/// Renders a task/employee table followed by unassigned tasks and totals.
pub fn render_table(result: &AssignmentResult) -> String {
    let rows: Vec<[String; 5]> = result
        .timeline
        .iter()
        .map(|a| {
            [
                a.task_name.clone(),
                a.employee_name.clone(),
                a.start_date.format(DATE_FORMAT).to_string(),
                a.end_date.format(DATE_FORMAT).to_string(),
                format!("{:.2}", a.cost),
            ]
        })
        .collect();

    let header = ["Task", "Employee", "Start", "End", "Cost"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    if !result.unassigned.is_empty() {
        let _ = writeln!(out, "\nUnassigned:");
        for u in &result.unassigned {
            let why = match &u.reason {
                UnassignedReason::UnresolvedPredecessor { missing } => {
                    format!("waiting on {}", missing.join(", "))
                }
                UnassignedReason::NoCandidate => "no available employee".to_string(),
            };
            let _ = writeln!(out, "  {} ({})", u.task_name, why);
        }
    }

    let _ = writeln!(out, "\nProject Duration: {} days", result.project_duration_days);
    let _ = writeln!(out, "Total Project Cost: ${:.2}", result.total_cost);
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
