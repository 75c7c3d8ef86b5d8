use serde::{Deserialize, Serialize};

use super::core::TextValue;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    #[serde(rename = "stateKey", default)]
    pub state_key: String,
    #[serde(rename = "boardName", default)]
    pub board_name: String,
    #[serde(default)]
    pub state: String,
}

/// Sprints of a rapid board
#[derive(Debug, Serialize, Deserialize)]
pub struct Sprints {
    pub sprints: Vec<Sprint>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SprintContents {
    #[serde(rename = "completedIssuesEstimateSum", default)]
    pub completed_issues_estimate_sum: TextValue,
    #[serde(rename = "allIssuesEstimateSum", default)]
    pub all_issues_estimate_sum: TextValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SprintReport {
    pub contents: SprintContents,
    pub sprint: Sprint,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sprint_report() {
        let report: SprintReport = serde_json::from_value(json!({
            "contents": {
                "completedIssues": [],
                "completedIssuesEstimateSum": { "value": 13.0, "text": "13.0" },
                "allIssuesEstimateSum": { "value": 21.0, "text": "21.0" }
            },
            "sprint": {
                "id": 42,
                "name": "Sprint 7",
                "state": "ACTIVE"
            }
        }))
        .unwrap();
        assert_eq!(report.sprint.id, 42);
        assert_eq!(report.sprint.state, "ACTIVE");
        assert!((report.contents.all_issues_estimate_sum.value - 21.0).abs() < f32::EPSILON);
        assert_eq!(report.contents.completed_issues_estimate_sum.text, "13.0");
    }
}
