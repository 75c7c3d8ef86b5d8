use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    core::{Component, IssueAuthor},
    project::Project,
    worklog::WorklogList,
};
use crate::{pagination::Pagination, timestamp::JiraTime, Result};

/// The answer to a successful issue creation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IssueCreateResponse {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Represents a jira issue
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Issue {
    /// Numeric id of the jira issue
    pub id: String,
    /// The key of the jira issue, typically used and referenced by the user.
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub expand: String,
    pub fields: Option<IssueFields>,
    pub changelog: Option<IssueChangeLog>,
}

impl Issue {
    /// When the issue was created, unset if the field was not requested
    #[must_use]
    pub fn created(&self) -> JiraTime {
        self.fields
            .as_ref()
            .map(|fields| fields.created.clone())
            .unwrap_or_default()
    }
}

/// The fields of an issue as Jira returns them.
///
/// Fields without a typed slot, the deployment specific `customfield_*`
/// entries among them, end up in [`IssueFields::custom`].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct IssueFields {
    #[serde(rename = "issuetype")]
    pub issue_type: Option<IssueType>,
    pub parent: Option<Box<Issue>>,
    #[serde(default)]
    pub summary: String,
    pub description: Option<String>,
    pub reporter: Option<IssueUser>,
    pub assignee: Option<IssueUser>,
    pub project: Option<Project>,
    pub priority: Option<IssuePriority>,
    #[serde(default)]
    pub created: JiraTime,
    #[serde(default)]
    pub updated: JiraTime,
    #[serde(rename = "timespent")]
    pub time_spent: Option<i64>,
    #[serde(rename = "aggregatetimeoriginalestimate")]
    pub time_estimate: Option<i64>,
    #[serde(rename = "timetracking")]
    pub time_tracking: Option<TimeTracking>,
    pub status: Option<IssueStatus>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    pub worklog: Option<WorklogList>,
    #[serde(flatten)]
    pub custom: BTreeMap<String, Value>,
}

impl IssueFields {
    /// Looks up `customfield_<id>`, with or without the prefix
    #[must_use]
    pub fn custom_field(&self, id: &str) -> Option<&Value> {
        self.custom
            .get(id)
            .or_else(|| self.custom.get(&format!("customfield_{id}")))
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IssueChangeLog {
    #[serde(rename = "startAt", default)]
    pub start_at: u32,
    #[serde(rename = "maxResults", default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub histories: Vec<ChangeLogHistory>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChangeLogHistory {
    pub id: String,
    pub author: Option<IssueAuthor>,
    #[serde(default)]
    pub created: JiraTime,
    #[serde(default)]
    pub items: Vec<BTreeMap<String, Value>>,
}

/// Holds the response of a JQL search.
#[derive(Debug, Deserialize, Serialize)]
pub struct IssueList {
    #[serde(default)]
    pub expand: String,
    #[serde(rename = "startAt")]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    pub total: u32,
    pub issues: Vec<Issue>,
    #[serde(skip)] // Computed after deserializing
    pub pagination: Option<Pagination>,
}

impl IssueList {
    /// Computes and attaches the page window of this result
    ///
    /// # Errors
    /// [`crate::JiraError::InvalidArgument`] if Jira reported a `maxResults` of zero.
    pub fn paginate(mut self) -> Result<Self> {
        self.pagination = Some(Pagination::compute(self.total, self.start_at, self.max_results)?);
        Ok(self)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct IssueStatus {
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: String,
    pub name: String,
}

/// A user reference inside issue fields, also what an assignee is set with
#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct IssueUser {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct IssuePriority {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct TimeTracking {
    #[serde(rename = "originalEstimate", skip_serializing_if = "Option::is_none")]
    pub original_estimate: Option<String>,
    #[serde(rename = "remainingEstimate", skip_serializing_if = "Option::is_none")]
    pub remaining_estimate: Option<String>,
}

impl TimeTracking {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original_estimate.is_none() && self.remaining_estimate.is_none()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct IssueType {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: String,
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
}
