use serde::{Deserialize, Serialize};

/// Aggregate bug counts for one backlog (project/environment slice).
///
/// Status categories may overlap in the tracker, so the per-status counts
/// are not required to sum to `total_bugs`. Tolerated, not enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BugSummary {
    pub total_bugs: u64,
    pub open_bugs: u64,
    pub pending_retest: u64,
    pub closed_bugs: u64,
    pub deferred_bugs: u64,
    pub rejected_bugs: u64,
}

impl BugSummary {
    /// Percentage of bugs closed; 0 when the backlog is empty.
    pub fn closure_percentage(&self) -> f64 {
        percentage(self.closed_bugs, self.total_bugs)
    }

    /// Percentage of bugs still open; 0 when the backlog is empty.
    pub fn open_ratio(&self) -> f64 {
        percentage(self.open_bugs, self.total_bugs)
    }
}

/// Critical-severity slice of a backlog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalMetric {
    pub critical_bugs: u64,
    pub total_bugs: u64,
}

impl CriticalMetric {
    /// Share of critical bugs in the backlog; 0 when the backlog is empty.
    pub fn percentage(&self) -> f64 {
        percentage(self.critical_bugs, self.total_bugs)
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}
