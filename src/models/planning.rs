use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One planned allocation: an employee booked on a ticket for some hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningTask {
    pub employee_name: String,
    pub ticket_id: String,
    pub planned_hours: f64,
    pub date: Option<NaiveDate>,
    pub priority: String,
    pub status: String,
}

/// Actual hours logged by an employee against a ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActualEntry {
    pub employee_name: String,
    pub ticket_id: String,
    pub actual_hours: f64,
}
