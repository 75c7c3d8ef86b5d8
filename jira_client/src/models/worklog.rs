use serde::{Deserialize, Serialize};

use super::core::IssueAuthor;
use crate::timestamp::JiraTime;

/// The worklogs embedded in an issue, or returned by `/issue/{key}/worklog`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorklogList {
    #[serde(rename = "startAt", default)]
    pub start_at: u32,
    #[serde(rename = "maxResults", default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    pub worklogs: Vec<WorklogEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorklogEntry {
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
    pub comment: Option<String>,
    #[serde(rename = "timeSpent", default)]
    pub time_spent: String,
    #[serde(rename = "timeSpentSeconds", default)]
    pub time_spent_seconds: i64,
    pub author: Option<IssueAuthor>,
    #[serde(default)]
    pub started: JiraTime,
    #[serde(default)]
    pub created: JiraTime,
    #[serde(default)]
    pub updated: JiraTime,
}

/// A worklog to add to an issue
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewWorklog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Jira duration notation, e.g. `3h 20m`
    #[serde(rename = "timeSpent")]
    pub time_spent: String,
    pub started: JiraTime,
}

/// Response of the timesheet report: issues with the work logged on them
#[derive(Debug, Serialize, Deserialize)]
pub struct TimesheetResponse {
    pub worklog: Vec<TimesheetIssue>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimesheetIssue {
    #[serde(rename = "key")]
    pub issue_key: String,
    #[serde(rename = "summary", default)]
    pub issue_summary: String,
    #[serde(default)]
    pub entries: Vec<TimesheetEntry>,
}

/// One timesheet line; timestamps are milliseconds since the epoch here.
#[derive(Debug, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: i64,
    #[serde(default)]
    pub comment: String,
    /// Seconds
    #[serde(rename = "timeSpent")]
    pub time_spent: i64,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "authorFullName", default)]
    pub author_name: String,
    #[serde(default)]
    pub created: JiraTime,
    #[serde(rename = "startDate", default)]
    pub start_date: JiraTime,
    #[serde(rename = "updateAuthor", default)]
    pub update_author: String,
    #[serde(rename = "updateAuthorFullName", default)]
    pub update_author_name: String,
    #[serde(default)]
    pub updated: JiraTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn worklog_list() {
        let list: WorklogList = serde_json::from_value(json!({
            "startAt": 0,
            "maxResults": 20,
            "total": 1,
            "worklogs": [{
                "id": "100028",
                "self": "http://www.example.com/jira/rest/api/2/issue/10010/worklog/10000",
                "author": { "name": "fred", "displayName": "Fred F. User", "active": false },
                "comment": "I did some work here.",
                "started": "2016-09-22T10:01:00.000+0000",
                "timeSpent": "3h 20m",
                "timeSpentSeconds": 12000
            }]
        }))
        .unwrap();
        let entry = &list.worklogs[0];
        assert_eq!(entry.time_spent_seconds, 12000);
        assert!(entry.started.is_set());
        assert!(!entry.created.is_set());
    }

    #[test]
    fn new_worklog_sends_string_timestamp() {
        let worklog = NewWorklog {
            comment: None,
            time_spent: "1h".to_string(),
            started: JiraTime::parse("2016-09-22T10:01:00.000+0000").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&worklog).unwrap(),
            json!({ "timeSpent": "1h", "started": "2016-09-22T10:01:00.000+0000" })
        );
    }

    #[test]
    fn error_envelope_is_not_an_empty_timesheet() {
        let body = br#"{"errorMessages": ["Field 'targetUser' does not exist"], "errors": {}}"#;
        let err = crate::decode::decode_json::<TimesheetResponse>(body).unwrap_err();
        assert!(matches!(err, crate::JiraError::Decode { .. }));
        let errors = err.api_errors().unwrap();
        assert_eq!(errors.error_messages, vec!["Field 'targetUser' does not exist".to_string()]);

        let empty: TimesheetResponse = serde_json::from_value(json!({ "worklog": [] })).unwrap();
        assert!(empty.worklog.is_empty());
    }

    #[test]
    fn timesheet_uses_epoch_millis() {
        let response: TimesheetResponse = serde_json::from_value(json!({
            "worklog": [{
                "key": "TIME-1",
                "summary": "Meetings",
                "entries": [{
                    "id": 1,
                    "comment": "standup",
                    "timeSpent": 900,
                    "author": "fred",
                    "authorFullName": "Fred",
                    "created": 1438387200000_i64,
                    "startDate": 1438387200000_i64,
                    "updated": 1438387200000_i64
                }]
            }]
        }))
        .unwrap();
        let entry = &response.worklog[0].entries[0];
        assert_eq!(entry.start_date.timestamp_millis(), Some(1_438_387_200_000));
        assert_eq!(entry.time_spent, 900);
    }
}
