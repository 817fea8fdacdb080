use serde_json::Value;
use std::collections::HashMap;

/// Scoring configuration: closed-status markers and the status→team
/// attribution table, passed explicitly into the scorers so deployments
/// can swap the status taxonomy without touching engine code.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Case-insensitive substrings marking a terminal status.
    pub closed_status_markers: Vec<String>,
    /// Normalized (trimmed, lowercased) status → responsible team label.
    pub status_teams: HashMap<String, String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            closed_status_markers: vec![
                "closed".to_string(),
                "moved to live".to_string(),
                "completed".to_string(),
            ],
            status_teams: default_status_team_map(),
        }
    }
}

/// Default status→team attribution table.
pub fn default_status_team_map() -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (status, team) in [
        ("open", "DEV"),
        ("in development", "DEV"),
        ("dev in progress", "DEV"),
        ("code review", "DEV"),
        ("reopened", "DEV"),
        ("ready for qa", "QA"),
        ("qa in progress", "QA"),
        ("pending retest", "QA"),
        ("retest", "QA"),
        ("uat", "BIS Team"),
        ("client review", "BIS Team"),
        ("moved to live", "BIS Team"),
        ("closed", "QA"),
    ] {
        map.insert(status.to_string(), team.to_string());
    }
    map
}

impl ScoringConfig {
    /// Whether a raw status string denotes a terminal state.
    pub fn is_closed(&self, status: &str) -> bool {
        let status = status.trim().to_lowercase();
        self.closed_status_markers
            .iter()
            .any(|marker| status.contains(marker.as_str()))
    }

    /// Team currently responsible for a ticket in this status, or
    /// "Unknown" when the status is not in the table.
    pub fn responsible_team(&self, status: &str) -> String {
        let key = status.trim().to_lowercase();
        self.status_teams
            .get(&key)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Merge a partial JSON override over the defaults. Unrecognized or
    /// malformed entries are ignored.
    ///
    /// ```json
    /// {
    ///   "closedStatusMarkers": ["done"],
    ///   "statusTeams": {"Design Review": "Design"}
    /// }
    /// ```
    pub fn from_json(overrides: &Value) -> Self {
        let mut config = ScoringConfig::default();

        if let Some(markers) = overrides.get("closedStatusMarkers").and_then(Value::as_array) {
            let parsed: Vec<String> = markers
                .iter()
                .filter_map(Value::as_str)
                .map(|marker| marker.trim().to_lowercase())
                .filter(|marker| !marker.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.closed_status_markers = parsed;
            }
        }

        if let Some(teams) = overrides.get("statusTeams").and_then(Value::as_object) {
            for (status, team) in teams {
                let key = status.trim().to_lowercase();
                if key.is_empty() {
                    continue;
                }
                if let Some(team) = team.as_str().filter(|team| !team.trim().is_empty()) {
                    config.status_teams.insert(key, team.trim().to_string());
                }
            }
        }

        config
    }
}
