//! End-to-end behavior of the assignment engine.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use u_assign::models::{Employee, Task, UnassignedReason};
use u_assign::records::Project;
use u_assign::scheduler::{assign, AssignmentKpi, GreedyAssigner};
use u_assign::Error;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ======================== Scenarios ========================

#[test]
fn scenario_a_single_task() {
    let employees = vec![Employee::new("1", "Ann", "Dev").with_cost(10.0)];
    let tasks = vec![Task::new("1", "Build", "Dev", d("2024-01-01"), d("2024-01-03"))];

    let r = assign(&employees, &tasks);
    assert_eq!(r.assignments.len(), 1);
    assert_eq!(r.employee_for("Build"), Some("Ann"));
    assert_eq!(r.project_duration_days, 3);
    assert!((r.total_cost - 30.0).abs() < 1e-10);
}

#[test]
fn scenario_b_dependent_task_evaluated_after_predecessor() {
    // task1 starts strictly earlier so it is evaluated first
    let employees = vec![Employee::new("1", "Ann", "Dev").with_cost(1.0)];
    let tasks = vec![
        Task::new("2", "task2", "Dev", d("2024-01-02"), d("2024-01-03")).with_predecessor("task1"),
        Task::new("1", "task1", "Dev", d("2024-01-01"), d("2024-01-02")),
    ];

    let r = assign(&employees, &tasks);
    assert_eq!(r.employee_for("task1"), Some("Ann"));
    // Predecessor is assigned, but Ann is busy through the 2nd
    assert!(!r.is_assigned("task2"));
    assert_eq!(r.unassigned[0].reason, UnassignedReason::NoCandidate);
}

#[test]
fn scenario_b_dependent_task_sorted_first_is_skipped() {
    let employees = vec![
        Employee::new("1", "Ann", "Dev").with_cost(1.0),
        Employee::new("2", "Bob", "Dev").with_cost(1.0),
    ];
    let tasks = vec![
        Task::new("1", "task1", "Dev", d("2024-01-02"), d("2024-01-03")),
        Task::new("2", "task2", "Dev", d("2024-01-01"), d("2024-01-03")).with_predecessor("task1"),
    ];

    let r = assign(&employees, &tasks);
    assert!(r.is_assigned("task1"));
    assert!(!r.is_assigned("task2"));
    assert_eq!(
        r.unassigned[0].reason,
        UnassignedReason::UnresolvedPredecessor {
            missing: vec!["task1".into()]
        }
    );
}

#[test]
fn scenario_c_no_qualified_employee() {
    let employees = vec![Employee::new("1", "Ann", "QA").with_cost(1.0)];
    let tasks = vec![
        Task::new("1", "Build", "Dev", d("2024-01-01"), d("2024-01-04")),
        Task::new("2", "Check", "QA", d("2024-01-03"), d("2024-01-06")),
    ];

    let r = assign(&employees, &tasks);
    assert!(!r.is_assigned("Build"));
    assert!((r.total_cost - 4.0).abs() < 1e-10);
    assert_eq!(r.project_duration_days, 6);
}

#[test]
fn scenario_d_cheaper_employee_selected() {
    let employees = vec![
        Employee::new("1", "Ten", "Dev").with_cost(10.0),
        Employee::new("2", "Five", "Dev").with_cost(5.0),
    ];
    let tasks = vec![Task::new("1", "Build", "Dev", d("2024-03-01"), d("2024-03-04"))];

    let r = assign(&employees, &tasks);
    assert_eq!(r.employee_for("Build"), Some("Five"));
    assert!((r.total_cost - 20.0).abs() < 1e-10);
}

#[test]
fn chain_of_three_with_handoffs() {
    let employees = vec![
        Employee::new("1", "Ann", "Dev").with_cost(3.0),
        Employee::new("2", "Bob", "QA").with_cost(2.0),
    ];
    let tasks = vec![
        Task::new("1", "Build", "Dev", d("2024-01-01"), d("2024-01-05")),
        Task::new("2", "Test", "QA", d("2024-01-06"), d("2024-01-08")).with_predecessor("Build"),
        Task::new("3", "Fix", "Dev", d("2024-01-09"), d("2024-01-10"))
            .with_predecessors(["Build", "Test"]),
    ];

    let r = assign(&employees, &tasks);
    assert!(r.is_complete());
    assert_eq!(r.employee_for("Fix"), Some("Ann"));
    assert_eq!(r.project_duration_days, 10);
    assert!((r.total_cost - (15.0 + 6.0 + 6.0)).abs() < 1e-10);

    let kpi = AssignmentKpi::calculate(&r, &tasks);
    assert_eq!(kpi.busy_days_by_employee["1"], 7);
}

// ======================== Snapshot I/O ========================

#[test]
fn json_snapshot_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.json");
    std::fs::write(
        &path,
        r#"{
            "employees": [
                {"id": 1, "name": "Ann", "position": "Dev", "salary_per_hour": 10},
                {"id": 2, "name": "Bob", "position": "Dev", "salary_per_hour": 4}
            ],
            "tasks": [
                {"id": 1, "name": "Design", "position": "Dev",
                 "start_date": "2024-01-01", "end_date": "2024-01-02", "predecessor_tasks": ""},
                {"id": 2, "name": "Build", "position": "Dev",
                 "start_date": "2024-01-03", "end_date": "2024-01-05", "predecessor_tasks": "Design"}
            ]
        }"#,
    )
    .unwrap();

    let project = Project::load(&path).unwrap();
    let r = assign(&project.employees(), &project.tasks(",").unwrap());
    assert_eq!(r.employee_for("Design"), Some("Bob"));
    assert_eq!(r.employee_for("Build"), Some("Bob"));
    assert!((r.total_cost - 20.0).abs() < 1e-10);

    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["assignments"]["Build"], "Bob");
    assert_eq!(json["project_duration_days"], 5);
    assert_eq!(json["project_start"], "2024-01-01");
}

#[test]
fn malformed_date_fails_at_boundary() {
    let project = Project::from_json_str(
        r#"{"tasks": [{"id": 1, "name": "Build", "position": "Dev",
                       "start_date": "2024-1-1x", "end_date": "2024-01-02"}]}"#,
    )
    .unwrap();
    assert!(matches!(
        project.tasks(","),
        Err(Error::Parse { field: "start_date", .. })
    ));
}

#[test]
fn strict_mode_rejects_duplicate_names() {
    let employees = vec![Employee::new("1", "Ann", "Dev").with_cost(1.0)];
    let tasks = vec![
        Task::new("1", "Build", "Dev", d("2024-01-01"), d("2024-01-01")),
        Task::new("2", "Build", "Dev", d("2024-01-02"), d("2024-01-02")),
    ];

    assert!(matches!(
        GreedyAssigner::new().with_validation(true).try_assign(&employees, &tasks),
        Err(Error::Validation(_))
    ));
    assert!(GreedyAssigner::new().try_assign(&employees, &tasks).is_ok());
}

// ======================== Randomized properties ========================

const POSITIONS: [&str; 3] = ["Dev", "QA", "Ops"];

fn random_instance(rng: &mut StdRng) -> (Vec<Employee>, Vec<Task>) {
    let base = d("2024-01-01");

    let employees: Vec<Employee> = (0..rng.random_range(0..6))
        .map(|i| {
            let position = POSITIONS[rng.random_range(0..POSITIONS.len())];
            Employee::new(format!("E{i}"), format!("emp{i}"), position)
                .with_cost(rng.random_range(0..20) as f64)
        })
        .collect();

    let n_tasks = rng.random_range(0..12);
    let tasks: Vec<Task> = (0..n_tasks)
        .map(|i| {
            let start = base + Duration::days(rng.random_range(0..30));
            let end = start + Duration::days(rng.random_range(0..5));
            let position = POSITIONS[rng.random_range(0..POSITIONS.len())];
            let preds: Vec<String> = (0..n_tasks)
                .filter(|&j| j != i && rng.random_bool(0.15))
                .map(|j| format!("T{j}"))
                .collect();
            Task::new(format!("{i}"), format!("T{i}"), position, start, end).with_predecessors(preds)
        })
        .collect();

    (employees, tasks)
}

#[test]
fn random_instances_satisfy_invariants() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let (employees, tasks) = random_instance(&mut rng);
        let r = assign(&employees, &tasks);

        let by_name: HashMap<&str, &Task> = tasks.iter().map(|t| (t.name.as_str(), t)).collect();
        let rate: HashMap<&str, f64> = employees
            .iter()
            .map(|e| (e.name.as_str(), e.hourly_cost))
            .collect();

        // Keys are input task names
        for key in r.assignments.keys() {
            assert!(by_name.contains_key(key.as_str()));
        }

        // Every task is either assigned or reported unassigned
        assert_eq!(r.assignment_count() + r.unassigned.len(), tasks.len());

        // Cost is the sum of duration × rate
        let expected: f64 = r
            .assignments
            .iter()
            .map(|(t, e)| by_name[t.as_str()].duration_days() as f64 * rate[e.as_str()])
            .sum();
        assert!((r.total_cost - expected).abs() < 1e-9);

        // Duration spans all tasks, assigned or not
        let expected_span = match (
            tasks.iter().map(|t| t.start_date).min(),
            tasks.iter().map(|t| t.end_date).max(),
        ) {
            (Some(s), Some(e)) => (e - s).num_days() + 1,
            _ => 0,
        };
        assert_eq!(r.project_duration_days, expected_span);

        // No employee holds two overlapping tasks
        for e in &employees {
            let mine = r.assignments_for_employee(&e.id);
            for (i, a) in mine.iter().enumerate() {
                for b in &mine[i + 1..] {
                    assert!(a.end_date < b.start_date || b.end_date < a.start_date);
                }
            }
        }

        // Predecessors were assigned before their dependents
        for (pos, a) in r.timeline.iter().enumerate() {
            for pred in &by_name[a.task_name.as_str()].predecessors {
                assert!(r.timeline[..pos].iter().any(|p| &p.task_name == pred));
            }
        }

        // Only qualified employees are used
        for a in &r.timeline {
            let e = employees.iter().find(|e| e.id == a.employee_id).unwrap();
            assert_eq!(e.position, by_name[a.task_name.as_str()].position);
        }

        // Idempotent
        assert_eq!(assign(&employees, &tasks), r);
    }
}

#[test]
fn random_dependency_free_instances_pick_cheapest_available() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let (employees, tasks) = random_instance(&mut rng);
        let tasks: Vec<Task> = tasks.into_iter().map(|t| t.with_predecessors(Vec::<String>::new())).collect();
        let r = assign(&employees, &tasks);

        // Replay the timeline: each chosen employee is the cheapest free qualified one
        let mut busy_until: HashMap<&str, NaiveDate> = HashMap::new();
        for a in &r.timeline {
            let task = tasks.iter().find(|t| t.name == a.task_name).unwrap();
            let cheapest = employees
                .iter()
                .filter(|e| e.position == task.position)
                .filter(|e| busy_until.get(e.id.as_str()).map_or(true, |&b| b < task.start_date))
                .map(|e| e.cost_for(task.duration_days()))
                .fold(f64::INFINITY, f64::min);
            assert!((a.cost - cheapest).abs() < 1e-9);
            busy_until.insert(a.employee_id.as_str(), a.end_date);
        }
    }
}
