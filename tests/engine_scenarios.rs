use chrono::NaiveDate;
use serde_json::json;
use triagelens::config::ScoringConfig;
use triagelens::ingest::{
    actual_entries_from_json, bug_summary_from_json, directory_from_json,
    planning_tasks_from_json, ticket_from_json,
};
use triagelens::models::report::RagStatus;
use triagelens::scoring::buckets::age_histogram;
use triagelens::scoring::rag::score_backlog;
use triagelens::scoring::team::derive_leads;
use triagelens::scoring::ticket_health::score_ticket;
use triagelens::scoring::variance::build_variance_report;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

#[test]
fn swamped_backlog_scores_red_critical() {
    init_logging();
    let summary = bug_summary_from_json(&json!({
        "total_bugs": 100,
        "open_bugs": 80,
        "closed_bugs": 10
    }))
    .expect("decode bug summary");

    let report = score_backlog(&summary, 25);
    assert_eq!(report.score, 0);
    assert_eq!(report.status, RagStatus::Red);
    assert_eq!(report.label, "Critical");
    assert_eq!(report.color, "red");
}

#[test]
fn healthy_backlog_scores_green_with_no_deductions() {
    init_logging();
    let summary = bug_summary_from_json(&json!({
        "total_bugs": 50,
        "open_bugs": 10,
        "closed_bugs": 35
    }))
    .expect("decode bug summary");

    let report = score_backlog(&summary, 2);
    assert_eq!(report.score, 100);
    assert_eq!(report.status, RagStatus::Green);
    assert_eq!(report.label, "Healthy");
    assert_eq!(report.factors, vec!["All metrics good"]);
}

#[test]
fn open_ticket_without_eta_scores_eighty() {
    init_logging();
    let ticket = ticket_from_json(&json!({"status": "In Development"})).expect("decode ticket");
    let health = score_ticket(&ticket, &ScoringConfig::default(), today());
    assert_eq!(health.score, 80.0);
    assert_eq!(health.label, "Good");
}

#[test]
fn overdue_ticket_with_mixed_variance_lands_on_excellent_boundary() {
    init_logging();
    let ticket = ticket_from_json(&json!({
        "status": "In Development",
        "eta": "2026-06-10",
        "dev_estimate_hours": 40,
        "actual_dev_hours": 40,
        "dev_deviation": 20,
        "qa_estimate_hours": 12,
        "actual_qa_hours": 10,
        "qa_deviation": -2
    }))
    .expect("decode ticket");

    let health = score_ticket(&ticket, &ScoringConfig::default(), today());
    assert!((health.score - 87.5).abs() < 1e-9, "got {}", health.score);
    assert_eq!(health.label, "Excellent");
}

#[test]
fn unplanned_hours_report_insufficient_data_instead_of_infinity() {
    init_logging();
    let tasks = planning_tasks_from_json(&json!([
        {"employee_name": "Ravi", "ticket_id": "BT-1", "planned_hours": 0}
    ]))
    .expect("decode planning tasks");
    let actuals = actual_entries_from_json(&json!([
        {"employee_name": "Ravi", "ticket_id": "BT-1", "actual_hours": 6}
    ]))
    .expect("decode actual entries");

    let report = build_variance_report(&tasks, &actuals, &Default::default());
    let totals = &report.employees[0].totals;
    assert!(totals.variance_percent.is_none());
    assert_eq!(totals.note.as_deref(), Some("Insufficient data"));
}

#[test]
fn shared_lead_is_reported_once() {
    init_logging();
    let directory = directory_from_json(&json!([
        {"employee_id": "E-1", "name": "Ravi", "team": "DEVELOPMENT", "lead": "Asha",
         "email": "ravi@example.com", "role": "Engineer"},
        {"employee_id": "E-2", "name": "Meera", "team": "DEVELOPMENT", "lead": "asha",
         "email": "meera@example.com", "role": "Engineer"},
        {"employee_id": "E-3", "name": "Asha", "team": "DEVELOPMENT",
         "email": "asha@example.com", "role": "Lead Engineer"}
    ]))
    .expect("decode directory");
    let ticket = ticket_from_json(&json!({
        "status": "Open",
        "developers": ["Ravi", "Meera"]
    }))
    .expect("decode ticket");

    let leads = derive_leads(&ticket, &directory);
    assert_eq!(leads.dev_leads.len(), 1);
    assert_eq!(leads.dev_leads[0].name, "Asha");
    assert_eq!(leads.dev_leads[0].role.as_deref(), Some("Lead Engineer"));
}

#[test]
fn backlog_health_serializes_the_ui_contract_shape() {
    init_logging();
    let summary = bug_summary_from_json(&json!({"total_bugs": 0})).expect("decode bug summary");
    let value = serde_json::to_value(score_backlog(&summary, 0)).expect("serialize");

    assert_eq!(value["status"], json!("GREEN"));
    assert_eq!(value["label"], json!("No Issues"));
    assert_eq!(value["color"], json!("green"));
    assert_eq!(value["score"], json!(100));
    assert!(value["factors"].is_array());
}

#[test]
fn ticket_health_serializes_the_ui_contract_shape() {
    init_logging();
    let ticket = ticket_from_json(&json!({"status": "QA in Progress"})).expect("decode ticket");
    let value = serde_json::to_value(score_ticket(&ticket, &ScoringConfig::default(), today()))
        .expect("serialize");

    for field in ["status", "label", "color", "score", "factors", "responsible_team"] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["responsible_team"], json!("QA"));
}

#[test]
fn variance_report_serializes_bands_in_snake_case() {
    init_logging();
    let tasks = planning_tasks_from_json(&json!([
        {"employee_name": "Amit", "ticket_id": "T-1", "planned_hours": 10}
    ]))
    .expect("decode planning tasks");
    let actuals = actual_entries_from_json(&json!([
        {"employee_name": "Amit", "ticket_id": "T-1", "actual_hours": 13}
    ]))
    .expect("decode actual entries");

    let report = build_variance_report(&tasks, &actuals, &Default::default());
    let value = serde_json::to_value(&report).expect("serialize");

    assert_eq!(value["over_estimation"], json!(true));
    let percent = value["totals"]["variance_percent"].as_f64().expect("percent");
    assert!((percent - 30.0).abs() < 1e-9);
    assert_eq!(value["totals"]["variance_band"], json!("over_estimate"));
    assert_eq!(value["employees"][0]["team"], json!("BIS Team"));
}

#[test]
fn histogram_serializes_ordered_bucket_counts() {
    init_logging();
    let value = serde_json::to_value(age_histogram([2.0, 12.0, 70.0])).expect("serialize");
    let buckets = value["buckets"].as_array().expect("buckets array");
    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets[0]["label"], json!("0-7"));
    assert_eq!(buckets[0]["count"], json!(1));
    assert_eq!(buckets[3]["label"], json!("60+"));
}

#[test]
fn recomputation_is_idempotent_for_identical_inputs() {
    init_logging();
    let ticket = ticket_from_json(&json!({
        "status": "In Development",
        "eta": "2026-06-01",
        "dev_estimate_hours": 20,
        "actual_dev_hours": 25,
        "dev_deviation": 5,
        "qa_estimate_hours": 10,
        "actual_qa_hours": 8,
        "qa_deviation": -2
    }))
    .expect("decode ticket");
    let config = ScoringConfig::default();

    let first = serde_json::to_string(&score_ticket(&ticket, &config, today())).unwrap();
    let second = serde_json::to_string(&score_ticket(&ticket, &config, today())).unwrap();
    assert_eq!(first, second);
}
