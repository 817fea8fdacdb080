use crate::scoring::buckets::{AccuracyBand, VarianceBand};
use crate::scoring::team::TeamTag;
use serde::{Deserialize, Serialize};

/// Red/Amber/Green tri-state used by every dashboard health widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RagStatus {
    Green,
    Amber,
    Red,
}

impl RagStatus {
    pub fn color(self) -> &'static str {
        match self {
            RagStatus::Green => "green",
            RagStatus::Amber => "amber",
            RagStatus::Red => "red",
        }
    }
}

/// Aggregate backlog health handed to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacklogHealth {
    pub status: RagStatus,
    pub label: String,
    pub color: String,
    pub score: i64,
    pub factors: Vec<String>,
}

/// Per-ticket health score with the factor trail that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketHealth {
    pub status: RagStatus,
    pub label: String,
    pub color: String,
    pub score: f64,
    pub factors: Vec<String>,
    pub responsible_team: String,
}

/// A resolved team lead. Identifier fields are `None` when the lead name
/// has no directory record of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadInfo {
    pub name: String,
    pub employee_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Unique dev and QA leads derived from a ticket's participants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketLeads {
    pub dev_leads: Vec<LeadInfo>,
    pub qa_leads: Vec<LeadInfo>,
}

/// Planned-vs-actual hours for one comparison unit.
///
/// The derived fields are `None` when `planned_hours` is 0: the
/// comparison is reported as insufficient data, never as a division blowup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursComparison {
    pub planned_hours: f64,
    pub actual_hours: f64,
    pub variance: f64,
    pub variance_percent: Option<f64>,
    pub estimation_accuracy: Option<f64>,
    pub variance_band: Option<VarianceBand>,
    pub accuracy_band: Option<AccuracyBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Per-ticket rollup inside an employee's comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketComparison {
    pub ticket_id: String,
    pub hours: HoursComparison,
}

/// One employee's plan-vs-actual rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeComparison {
    pub employee_name: String,
    pub team: TeamTag,
    pub tickets: Vec<TicketComparison>,
    pub totals: HoursComparison,
}

/// Full variance report across the planning window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceReport {
    pub employees: Vec<EmployeeComparison>,
    pub totals: HoursComparison,
    pub over_estimation: bool,
}

/// One bucket of a histogram, in scale order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketCount {
    pub label: String,
    pub count: u64,
}

/// Ordered bucket→count map for age/resolution charts. Every bucket of the
/// scale is present, including zero counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Histogram {
    pub buckets: Vec<BucketCount>,
}

impl Histogram {
    pub fn count(&self, label: &str) -> Option<u64> {
        self.buckets
            .iter()
            .find(|bucket| bucket.label == label)
            .map(|bucket| bucket.count)
    }
}
