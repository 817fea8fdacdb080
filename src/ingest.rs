//! Boundary normalization for backend payloads.
//!
//! Everything string- or number-shaped is cleaned exactly once here:
//! names become [`PersonId`]s, malformed hour values are clamped to 0,
//! and raw JSON is decoded into the typed models. Downstream scoring
//! never re-matches raw strings or guards against NaN.

use crate::models::bug::BugSummary;
use crate::models::employee::{Employee, EmployeeDirectory};
use crate::models::planning::{ActualEntry, PlanningTask};
use crate::models::ticket::TicketTracking;
use log::warn;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Normalized person identity: trimmed, lowercased name.
///
/// Bug assignees, planning rows, and directory records all reference
/// people by free-text name; resolving to a `PersonId` at the boundary
/// makes every later join and dedup consistent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    /// `None` for empty or whitespace-only names.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(PersonId(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed {kind} payload: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Clamp an hours value to a sane non-negative number.
pub fn sanitize_hours(raw: f64, field: &str) -> f64 {
    if !raw.is_finite() {
        warn!("non-finite value for {field}, treating as 0");
        return 0.0;
    }
    if raw < 0.0 {
        warn!("negative value {raw} for {field}, treating as 0");
        return 0.0;
    }
    raw
}

/// Deviations stay signed; only non-finite values are cleared.
pub fn sanitize_deviation(raw: f64, field: &str) -> f64 {
    if !raw.is_finite() {
        warn!("non-finite value for {field}, treating as 0");
        return 0.0;
    }
    raw
}

pub fn bug_summary_from_json(payload: &Value) -> Result<BugSummary, IngestError> {
    decode("bug summary", payload)
}

pub fn ticket_from_json(payload: &Value) -> Result<TicketTracking, IngestError> {
    let mut ticket: TicketTracking = decode("ticket tracking", payload)?;
    ticket.dev_estimate_hours = sanitize_hours(ticket.dev_estimate_hours, "dev_estimate_hours");
    ticket.actual_dev_hours = sanitize_hours(ticket.actual_dev_hours, "actual_dev_hours");
    ticket.qa_estimate_hours = sanitize_hours(ticket.qa_estimate_hours, "qa_estimate_hours");
    ticket.actual_qa_hours = sanitize_hours(ticket.actual_qa_hours, "actual_qa_hours");
    ticket.dev_deviation = sanitize_deviation(ticket.dev_deviation, "dev_deviation");
    ticket.qa_deviation = sanitize_deviation(ticket.qa_deviation, "qa_deviation");
    Ok(ticket)
}

pub fn directory_from_json(payload: &Value) -> Result<EmployeeDirectory, IngestError> {
    let employees: Vec<Employee> = decode("employee directory", payload)?;
    Ok(EmployeeDirectory::from_employees(employees))
}

pub fn planning_tasks_from_json(payload: &Value) -> Result<Vec<PlanningTask>, IngestError> {
    let mut tasks: Vec<PlanningTask> = decode("planning tasks", payload)?;
    for task in &mut tasks {
        task.planned_hours = sanitize_hours(task.planned_hours, "planned_hours");
    }
    Ok(tasks)
}

pub fn actual_entries_from_json(payload: &Value) -> Result<Vec<ActualEntry>, IngestError> {
    let mut entries: Vec<ActualEntry> = decode("actual hours", payload)?;
    for entry in &mut entries {
        entry.actual_hours = sanitize_hours(entry.actual_hours, "actual_hours");
    }
    Ok(entries)
}

fn decode<T: serde::de::DeserializeOwned>(
    kind: &'static str,
    payload: &Value,
) -> Result<T, IngestError> {
    serde_json::from_value(payload.clone()).map_err(|source| IngestError::Malformed { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_id_trims_and_lowercases() {
        let id = PersonId::new("  Asha Rao ").unwrap();
        assert_eq!(id.as_str(), "asha rao");
        assert_eq!(PersonId::new("ASHA RAO").unwrap(), id);
    }

    #[test]
    fn person_id_rejects_blank_names() {
        assert!(PersonId::new("").is_none());
        assert!(PersonId::new("   ").is_none());
    }

    #[test]
    fn sanitize_clamps_negative_and_non_finite_hours() {
        assert_eq!(sanitize_hours(-3.0, "h"), 0.0);
        assert_eq!(sanitize_hours(f64::NAN, "h"), 0.0);
        assert_eq!(sanitize_hours(f64::INFINITY, "h"), 0.0);
        assert_eq!(sanitize_hours(7.5, "h"), 7.5);
    }

    #[test]
    fn sanitize_deviation_keeps_sign() {
        assert_eq!(sanitize_deviation(-4.0, "d"), -4.0);
        assert_eq!(sanitize_deviation(f64::NAN, "d"), 0.0);
    }

    #[test]
    fn ticket_ingestion_cleans_hours() {
        let ticket = ticket_from_json(&json!({
            "status": "Open",
            "dev_estimate_hours": -5,
            "actual_dev_hours": 12,
            "qa_deviation": -2.5
        }))
        .unwrap();
        assert_eq!(ticket.dev_estimate_hours, 0.0);
        assert_eq!(ticket.actual_dev_hours, 12.0);
        assert_eq!(ticket.qa_deviation, -2.5);
    }

    #[test]
    fn malformed_payload_yields_ingest_error() {
        let err = bug_summary_from_json(&json!(["not", "an", "object"])).unwrap_err();
        assert!(err.to_string().contains("bug summary"));
    }

    #[test]
    fn planning_tasks_sanitize_planned_hours() {
        let tasks = planning_tasks_from_json(&json!([
            {"employee_name": "Ravi", "ticket_id": "BT-1", "planned_hours": -8}
        ]))
        .unwrap();
        assert_eq!(tasks[0].planned_hours, 0.0);
    }
}
