use crate::config::ScoringConfig;
use crate::models::report::{RagStatus, TicketHealth};
use crate::models::ticket::TicketTracking;
use chrono::{NaiveDate, Utc};
use log::debug;

const ETA_MISSING_PENALTY: f64 = 20.0;
const ETA_OVERDUE_CAP: f64 = 30.0;
const ETA_DUE_SOON_PENALTY: f64 = 10.0;
const ETA_DUE_SOON_WINDOW_DAYS: i64 = 3;
const VARIANCE_PENALTY_CAP: f64 = 25.0;
const UNDER_BUDGET_BONUS: f64 = 5.0;

/// Score a single ticket's health (0–100).
///
/// Factors accumulate on a raw running score (bonuses can push it past
/// 100 mid-computation) and the clamp to [0, 100] happens once at the
/// end. Clamping per factor would change results and is deliberately not
/// done.
pub fn score_ticket(
    ticket: &TicketTracking,
    config: &ScoringConfig,
    today: NaiveDate,
) -> TicketHealth {
    let mut score = 100.0;
    let mut factors = Vec::new();

    apply_eta_factor(ticket, config, today, &mut score, &mut factors);
    apply_variance_factor(
        "Dev",
        ticket.dev_estimate_hours,
        ticket.actual_dev_hours,
        ticket.dev_deviation,
        &mut score,
        &mut factors,
    );
    apply_variance_factor(
        "QA",
        ticket.qa_estimate_hours,
        ticket.actual_qa_hours,
        ticket.qa_deviation,
        &mut score,
        &mut factors,
    );
    apply_ratio_factor(ticket, &mut score, &mut factors);

    let score = score.clamp(0.0, 100.0);
    let (status, label) = bucket(score);
    let responsible_team = config.responsible_team(&ticket.status);

    debug!("ticket '{}' scored {score:.1} ({label})", ticket.status);

    TicketHealth {
        status,
        label: label.to_string(),
        color: status.color().to_string(),
        score,
        factors,
        responsible_team,
    }
}

/// [`score_ticket`] evaluated against today's UTC date.
pub fn score_ticket_now(ticket: &TicketTracking, config: &ScoringConfig) -> TicketHealth {
    score_ticket(ticket, config, Utc::now().date_naive())
}

fn apply_eta_factor(
    ticket: &TicketTracking,
    config: &ScoringConfig,
    today: NaiveDate,
    score: &mut f64,
    factors: &mut Vec<String>,
) {
    // Closed tickets no longer owe anyone a date.
    if config.is_closed(&ticket.status) {
        return;
    }

    let Some(eta) = ticket.eta else {
        *score -= ETA_MISSING_PENALTY;
        factors.push(format!("No ETA set (-{ETA_MISSING_PENALTY:.0})"));
        return;
    };

    let days_past = (today - eta).num_days();
    if days_past > 0 {
        let penalty = (days_past as f64 * 2.0).min(ETA_OVERDUE_CAP);
        *score -= penalty;
        factors.push(format!("ETA overdue by {days_past} days (-{penalty:.0})"));
    } else {
        let days_until = -days_past;
        if days_until <= ETA_DUE_SOON_WINDOW_DAYS {
            *score -= ETA_DUE_SOON_PENALTY;
            factors.push(format!(
                "ETA due in {days_until} days (-{ETA_DUE_SOON_PENALTY:.0})"
            ));
        }
    }
}

fn apply_variance_factor(
    side: &str,
    estimate_hours: f64,
    actual_hours: f64,
    deviation: f64,
    score: &mut f64,
    factors: &mut Vec<String>,
) {
    let estimate_hours = clean(estimate_hours);
    let actual_hours = clean(actual_hours);
    if estimate_hours <= 0.0 || actual_hours <= 0.0 {
        return;
    }
    let deviation = if deviation.is_finite() { deviation } else { 0.0 };

    if deviation > 0.0 {
        let overrun_percent = deviation / estimate_hours * 100.0;
        let penalty = (overrun_percent * 0.25).min(VARIANCE_PENALTY_CAP);
        *score -= penalty;
        factors.push(format!(
            "{side} hours {overrun_percent:.0}% over estimate (-{penalty:.1})"
        ));
    } else if deviation < 0.0 {
        *score += UNDER_BUDGET_BONUS;
        factors.push(format!(
            "{side} finished under estimate (+{UNDER_BUDGET_BONUS:.0})"
        ));
    }
}

fn apply_ratio_factor(ticket: &TicketTracking, score: &mut f64, factors: &mut Vec<String>) {
    let actual_dev = clean(ticket.actual_dev_hours);
    let actual_qa = clean(ticket.actual_qa_hours);
    if actual_dev <= 0.0 || actual_qa <= 0.0 {
        return;
    }

    let ratio = actual_qa / actual_dev * 100.0;
    if ratio > 80.0 {
        *score -= 15.0;
        factors.push(format!("QA time is {ratio:.0}% of dev time (-15)"));
    } else if ratio < 20.0 {
        *score -= 10.0;
        factors.push(format!("QA time is only {ratio:.0}% of dev time (-10)"));
    } else {
        *score += 5.0;
        factors.push(format!("Balanced QA/dev time at {ratio:.0}% (+5)"));
    }
}

fn bucket(score: f64) -> (RagStatus, &'static str) {
    if score >= 85.0 {
        (RagStatus::Green, "Excellent")
    } else if score >= 70.0 {
        (RagStatus::Green, "Good")
    } else if score >= 55.0 {
        (RagStatus::Amber, "Fair")
    } else if score >= 40.0 {
        (RagStatus::Amber, "Poor")
    } else {
        (RagStatus::Red, "Critical")
    }
}

fn clean(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}
