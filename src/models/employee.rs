use crate::ingest::PersonId;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Team affiliation as recorded in the employee directory.
///
/// `DEVELOPMENT` and `QA` drive classification and lead derivation; any
/// other directory value is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "DEVELOPMENT")]
    Development,
    #[serde(rename = "QA")]
    Qa,
    #[serde(untagged)]
    Other(String),
}

impl Default for Team {
    fn default() -> Self {
        Team::Other("Unknown".to_string())
    }
}

/// One employee directory record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub team: Team,
    pub lead: Option<String>,
    pub email: String,
    pub role: String,
}

/// Employee directory keyed by normalized person identity.
///
/// Lookups trim and lowercase the name once at the boundary; the rest of
/// the engine never re-matches raw strings.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    by_id: HashMap<PersonId, Employee>,
}

impl EmployeeDirectory {
    /// Build a directory from backend records. The first record for a
    /// given normalized name wins; later duplicates are dropped.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut by_id = HashMap::with_capacity(employees.len());
        for employee in employees {
            let Some(id) = PersonId::new(&employee.name) else {
                warn!("dropping directory record with empty name (employee_id={})", employee.employee_id);
                continue;
            };
            if by_id.contains_key(&id) {
                warn!("duplicate directory record for '{}', keeping the first", id);
                continue;
            }
            by_id.insert(id, employee);
        }
        EmployeeDirectory { by_id }
    }

    pub fn lookup(&self, name: &str) -> Option<&Employee> {
        let id = PersonId::new(name)?;
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
