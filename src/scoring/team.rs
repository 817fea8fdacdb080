use crate::ingest::PersonId;
use crate::models::employee::{EmployeeDirectory, Team};
use crate::models::report::{LeadInfo, TicketLeads};
use crate::models::ticket::TicketTracking;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Team tag for a ticket participant as shown on the dashboard.
///
/// Absence from the employee directory is signal, not error: names the
/// directory does not know belong to external/client participants and
/// are tagged "BIS Team".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamTag {
    #[serde(rename = "DEV")]
    Dev,
    #[serde(rename = "QA")]
    Qa,
    #[serde(rename = "BIS Team")]
    BisTeam,
    Unknown,
    #[serde(untagged)]
    Other(String),
}

impl TeamTag {
    pub fn as_str(&self) -> &str {
        match self {
            TeamTag::Dev => "DEV",
            TeamTag::Qa => "QA",
            TeamTag::BisTeam => "BIS Team",
            TeamTag::Unknown => "Unknown",
            TeamTag::Other(other) => other,
        }
    }
}

impl fmt::Display for TeamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a participant name to a team tag via the directory.
pub fn classify_person(name: Option<&str>, directory: &EmployeeDirectory) -> TeamTag {
    let Some(name) = name else {
        return TeamTag::Unknown;
    };
    if name.trim().is_empty() {
        return TeamTag::Unknown;
    }
    match directory.lookup(name) {
        Some(employee) => match &employee.team {
            Team::Development => TeamTag::Dev,
            Team::Qa => TeamTag::Qa,
            Team::Other(other) => TeamTag::Other(other.clone()),
        },
        None => TeamTag::BisTeam,
    }
}

/// Derive the unique dev and QA leads for a ticket.
///
/// For each developer on the ticket who is a DEVELOPMENT member with a
/// lead set, the lead's own directory record is resolved into a
/// [`LeadInfo`]; leads with no record of their own keep the name and null
/// identifiers. Dedup is by normalized lead name, first occurrence wins.
/// Mirrored for QC testers on the QA side.
pub fn derive_leads(ticket: &TicketTracking, directory: &EmployeeDirectory) -> TicketLeads {
    TicketLeads {
        dev_leads: leads_for(&ticket.developers, Team::Development, directory),
        qa_leads: leads_for(&ticket.qc_testers, Team::Qa, directory),
    }
}

fn leads_for(names: &[String], wanted: Team, directory: &EmployeeDirectory) -> Vec<LeadInfo> {
    let mut seen: HashSet<PersonId> = HashSet::new();
    let mut leads = Vec::new();

    for name in names {
        let Some(member) = directory.lookup(name) else {
            continue;
        };
        if member.team != wanted {
            continue;
        }
        let Some(lead_name) = member.lead.as_deref() else {
            continue;
        };
        let Some(lead_id) = PersonId::new(lead_name) else {
            continue;
        };
        if !seen.insert(lead_id) {
            continue;
        }
        leads.push(resolve_lead(lead_name, directory));
    }

    leads
}

fn resolve_lead(lead_name: &str, directory: &EmployeeDirectory) -> LeadInfo {
    match directory.lookup(lead_name) {
        Some(lead) => LeadInfo {
            name: lead.name.clone(),
            employee_id: Some(lead.employee_id.clone()),
            email: Some(lead.email.clone()),
            role: Some(lead.role.clone()),
        },
        None => LeadInfo {
            name: lead_name.trim().to_string(),
            employee_id: None,
            email: None,
            role: None,
        },
    }
}
