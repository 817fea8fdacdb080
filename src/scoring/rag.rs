use crate::models::bug::{BugSummary, CriticalMetric};
use crate::models::report::{BacklogHealth, RagStatus};
use log::debug;

/// Score a bug backlog into a RAG health report.
///
/// Deductions are independent: a backlog bad on several axes takes every
/// applicable hit. The score is rounded to the nearest integer and is
/// deliberately not floored at 0.
pub fn score_backlog(summary: &BugSummary, critical_bugs: u64) -> BacklogHealth {
    if summary.total_bugs == 0 {
        return BacklogHealth {
            status: RagStatus::Green,
            label: "No Issues".to_string(),
            color: RagStatus::Green.color().to_string(),
            score: 100,
            factors: vec!["No bugs reported".to_string()],
        };
    }

    let critical_percentage = CriticalMetric {
        critical_bugs,
        total_bugs: summary.total_bugs,
    }
    .percentage();
    let closure_percentage = summary.closure_percentage();
    let open_ratio = summary.open_ratio();

    let mut score: f64 = 100.0;
    let mut factors = Vec::new();

    if critical_percentage > 20.0 {
        score -= 40.0;
        factors.push("High critical bugs".to_string());
    } else if critical_percentage > 10.0 {
        score -= 20.0;
        factors.push("Moderate critical bugs".to_string());
    }

    if closure_percentage < 30.0 {
        score -= 30.0;
        factors.push("Low closure rate".to_string());
    } else if closure_percentage < 60.0 {
        score -= 15.0;
        factors.push("Moderate closure rate".to_string());
    }

    if open_ratio > 70.0 {
        score -= 30.0;
        factors.push("High open bugs".to_string());
    } else if open_ratio > 40.0 {
        score -= 15.0;
        factors.push("Moderate open bugs".to_string());
    }

    let score = score.round() as i64;
    let (status, label) = bucket(score);

    if factors.is_empty() {
        factors.push("All metrics good".to_string());
    }

    debug!(
        "backlog scored {score} ({label}): critical {critical_percentage:.1}%, closure {closure_percentage:.1}%, open {open_ratio:.1}%"
    );

    BacklogHealth {
        status,
        label: label.to_string(),
        color: status.color().to_string(),
        score,
        factors,
    }
}

fn bucket(score: i64) -> (RagStatus, &'static str) {
    if score >= 70 {
        (RagStatus::Green, "Healthy")
    } else if score >= 40 {
        (RagStatus::Amber, "Needs Attention")
    } else {
        (RagStatus::Red, "Critical")
    }
}
