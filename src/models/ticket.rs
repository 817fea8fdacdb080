use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ticket's tracking record as fetched from the backend.
///
/// Hours fields are non-negative (ingestion clamps malformed values);
/// deviations are signed: positive means over estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketTracking {
    pub status: String,
    pub eta: Option<NaiveDate>,
    pub dev_estimate_hours: f64,
    pub actual_dev_hours: f64,
    pub dev_deviation: f64,
    pub qa_estimate_hours: f64,
    pub actual_qa_hours: f64,
    pub qa_deviation: f64,
    pub developers: Vec<String>,
    pub qc_testers: Vec<String>,
    pub current_assignee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_payload_with_defaults() {
        let ticket: TicketTracking =
            serde_json::from_str(r#"{"status": "In Development"}"#).unwrap();
        assert_eq!(ticket.status, "In Development");
        assert!(ticket.eta.is_none());
        assert_eq!(ticket.dev_estimate_hours, 0.0);
        assert!(ticket.developers.is_empty());
        assert!(ticket.current_assignee.is_none());
    }

    #[test]
    fn parses_eta_as_iso_date() {
        let ticket: TicketTracking =
            serde_json::from_str(r#"{"status": "Open", "eta": "2026-03-15"}"#).unwrap();
        assert_eq!(ticket.eta, NaiveDate::from_ymd_opt(2026, 3, 15));
    }
}
