use crate::ingest::PersonId;
use crate::models::employee::EmployeeDirectory;
use crate::models::planning::{ActualEntry, PlanningTask};
use crate::models::report::{
    EmployeeComparison, HoursComparison, TicketComparison, VarianceReport,
};
use crate::scoring::buckets::{AccuracyBand, VarianceBand};
use crate::scoring::team::classify_person;
use log::debug;
use std::collections::BTreeMap;

const INSUFFICIENT_DATA: &str = "Insufficient data";

/// Compare planned against actual hours for one unit.
///
/// With no planned hours there is nothing to divide by: the percentage
/// fields come back `None` with an insufficient-data note instead of an
/// infinity.
pub fn compare_hours(planned_hours: f64, actual_hours: f64) -> HoursComparison {
    let planned_hours = clean(planned_hours);
    let actual_hours = clean(actual_hours);
    let variance = actual_hours - planned_hours;

    if planned_hours <= 0.0 {
        return HoursComparison {
            planned_hours,
            actual_hours,
            variance,
            variance_percent: None,
            estimation_accuracy: None,
            variance_band: None,
            accuracy_band: None,
            note: Some(INSUFFICIENT_DATA.to_string()),
        };
    }

    let variance_percent = variance / planned_hours * 100.0;
    let estimation_accuracy = (100.0 - variance_percent.abs()).clamp(0.0, 100.0);

    HoursComparison {
        planned_hours,
        actual_hours,
        variance,
        variance_percent: Some(variance_percent),
        estimation_accuracy: Some(estimation_accuracy),
        variance_band: Some(VarianceBand::from_percent(variance_percent)),
        accuracy_band: Some(AccuracyBand::from_percent(estimation_accuracy)),
        note: None,
    }
}

/// Join planning tasks to actual hours and roll up per ticket, per
/// employee, and globally.
///
/// Rows join on `(PersonId, ticket_id)`; employees and tickets come out
/// in sorted order so identical inputs always produce identical reports.
pub fn build_variance_report(
    tasks: &[PlanningTask],
    actuals: &[ActualEntry],
    directory: &EmployeeDirectory,
) -> VarianceReport {
    // person → display name, person → ticket → (planned, actual)
    let mut display_names: BTreeMap<PersonId, String> = BTreeMap::new();
    let mut rollup: BTreeMap<PersonId, BTreeMap<String, (f64, f64)>> = BTreeMap::new();

    for task in tasks {
        let Some(person) = PersonId::new(&task.employee_name) else {
            continue;
        };
        display_names
            .entry(person.clone())
            .or_insert_with(|| task.employee_name.trim().to_string());
        let cell = rollup
            .entry(person)
            .or_default()
            .entry(task.ticket_id.clone())
            .or_insert((0.0, 0.0));
        cell.0 += clean(task.planned_hours);
    }

    for entry in actuals {
        let Some(person) = PersonId::new(&entry.employee_name) else {
            continue;
        };
        display_names
            .entry(person.clone())
            .or_insert_with(|| entry.employee_name.trim().to_string());
        let cell = rollup
            .entry(person)
            .or_default()
            .entry(entry.ticket_id.clone())
            .or_insert((0.0, 0.0));
        cell.1 += clean(entry.actual_hours);
    }

    let mut employees = Vec::with_capacity(rollup.len());
    let mut total_planned = 0.0;
    let mut total_actual = 0.0;

    for (person, tickets) in &rollup {
        let mut ticket_comparisons = Vec::with_capacity(tickets.len());
        let mut employee_planned = 0.0;
        let mut employee_actual = 0.0;

        for (ticket_id, (planned, actual)) in tickets {
            employee_planned += planned;
            employee_actual += actual;
            ticket_comparisons.push(TicketComparison {
                ticket_id: ticket_id.clone(),
                hours: compare_hours(*planned, *actual),
            });
        }

        total_planned += employee_planned;
        total_actual += employee_actual;

        let employee_name = display_names
            .get(person)
            .cloned()
            .unwrap_or_else(|| person.to_string());
        employees.push(EmployeeComparison {
            team: classify_person(Some(&employee_name), directory),
            employee_name,
            tickets: ticket_comparisons,
            totals: compare_hours(employee_planned, employee_actual),
        });
    }

    let totals = compare_hours(total_planned, total_actual);
    let over_estimation = totals.variance_percent.is_some_and(|percent| percent > 0.0);

    debug!(
        "variance report: {} employees, planned {total_planned:.1}h, actual {total_actual:.1}h",
        employees.len()
    );

    VarianceReport {
        employees,
        totals,
        over_estimation,
    }
}

/// Comparative QA-vs-Dev label for the summary strip. A ratio is only
/// meaningful when both totals are strictly positive.
pub fn qa_vs_dev_summary(dev_hours: f64, qa_hours: f64) -> String {
    let dev_hours = clean(dev_hours);
    let qa_hours = clean(qa_hours);
    if dev_hours <= 0.0 || qa_hours <= 0.0 {
        return INSUFFICIENT_DATA.to_string();
    }

    let difference_percent = (qa_hours - dev_hours) / dev_hours * 100.0;
    if difference_percent > 0.0 {
        format!("QA hours {difference_percent:.1}% higher than Dev")
    } else if difference_percent < 0.0 {
        format!("QA hours {:.1}% lower than Dev", difference_percent.abs())
    } else {
        "QA hours equal to Dev".to_string()
    }
}

fn clean(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}
