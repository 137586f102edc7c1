//! Boundary records.
//!
//! The external representation of employees and tasks as a storage or
//! form layer hands them over: dates as `YYYY-MM-DD` strings and
//! predecessors as one free-text, delimiter-separated field. This module
//! turns them into normalized [`models`](crate::models) values and is the
//! only place a date can fail to parse.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Employee, Task};

/// Date format accepted at the boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default predecessor separator.
pub const DEFAULT_DELIMITER: &str = ",";

/// An employee as stored externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(deserialize_with = "id_from_string_or_int")]
    pub id: String,
    pub name: String,
    pub position: String,
    #[serde(alias = "salary_per_hour")]
    pub hourly_cost: f64,
}

/// A task as stored externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(deserialize_with = "id_from_string_or_int")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Free-text predecessor names, e.g. `"Design, Review"`.
    #[serde(default, alias = "predecessor_tasks")]
    pub predecessors: Option<String>,
}

/// A full employee/task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

fn id_from_string_or_int<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}

/// Parses a `YYYY-MM-DD` date, naming the record and field on failure.
pub fn parse_date(record: &str, field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| Error::Parse {
        record: record.to_string(),
        field,
        value: value.to_string(),
        source,
    })
}

/// Splits predecessor text into trimmed, non-empty names.
///
/// An empty delimiter treats the whole text as one name.
pub fn parse_predecessors(text: &str, delimiter: &str) -> Vec<String> {
    let tokens: Vec<&str> = if delimiter.is_empty() {
        vec![text]
    } else {
        text.split(delimiter).collect()
    };
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

impl From<&EmployeeRecord> for Employee {
    fn from(r: &EmployeeRecord) -> Self {
        Employee::new(&r.id, &r.name, &r.position).with_cost(r.hourly_cost)
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.clone(),
            position: e.position.clone(),
            hourly_cost: e.hourly_cost,
        }
    }
}

impl TaskRecord {
    /// Converts to a normalized task.
    ///
    /// # Errors
    /// `Error::Parse` if either date is malformed. `end < start` is not
    /// rejected here.
    pub fn to_task(&self, delimiter: &str) -> Result<Task> {
        let start = parse_date(&self.name, "start_date", &self.start_date)?;
        let end = parse_date(&self.name, "end_date", &self.end_date)?;
        let predecessors = self
            .predecessors
            .as_deref()
            .map(|text| parse_predecessors(text, delimiter))
            .unwrap_or_default();
        Ok(Task::new(&self.id, &self.name, &self.position, start, end).with_predecessors(predecessors))
    }

    /// Converts a normalized task back to its external form.
    pub fn from_task(task: &Task, delimiter: &str) -> Self {
        let predecessors = if task.predecessors.is_empty() {
            None
        } else {
            let joiner = if delimiter == "," {
                ", ".to_string()
            } else {
                delimiter.to_string()
            };
            Some(task.predecessors.join(&joiner))
        };
        Self {
            id: task.id.clone(),
            name: task.name.clone(),
            position: task.position.clone(),
            start_date: task.start_date.format(DATE_FORMAT).to_string(),
            end_date: task.end_date.format(DATE_FORMAT).to_string(),
            predecessors,
        }
    }
}

impl Project {
    /// Parses a snapshot from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses a snapshot from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a snapshot, choosing the format from the file extension
    /// (`.json` or `.toml`).
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Project::load path={}", path.display());
        let text = fs::read_to_string(path)?;
        let project = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            Some("toml") => Self::from_toml_str(&text)?,
            other => return Err(Error::UnsupportedFormat(other.unwrap_or("").to_string())),
        };
        debug!(
            "Project loaded: {} employees, {} tasks",
            project.employees.len(),
            project.tasks.len()
        );
        Ok(project)
    }

    /// Normalized employees.
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.iter().map(Employee::from).collect()
    }

    /// Normalized tasks.
    ///
    /// # Errors
    /// The first `Error::Parse` encountered.
    pub fn tasks(&self, delimiter: &str) -> Result<Vec<Task>> {
        self.tasks.iter().map(|t| t.to_task(delimiter)).collect()
    }
}
