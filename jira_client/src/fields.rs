//! Assembly of issue creation payloads.
//!
//! The fixed part of the payload is typed, custom fields are whatever JSON the
//! deployment expects for them and are passed through untouched.
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{
    models::issue::{IssueUser, TimeTracking},
    models::project::ProjectKey,
    JiraError, Result,
};

pub const CUSTOM_FIELD_PREFIX: &str = "customfield_";

/// What a new issue is made of.
///
/// ```rust,ignore
/// let fields = NewIssueFields::new("TEST", "Bug", "some new issue summary")
///     .description("some new issue description")
///     .custom_field("123451", 1)
///     .custom_field("123452", "test custom data");
/// let created = jira.create_issue(&fields).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewIssueFields {
    pub project_key: String,
    pub issue_type: String,
    pub summary: String,
    pub description: Option<String>,
    /// Key of the parent issue, for sub-tasks
    pub parent: Option<String>,
    /// User name of the assignee
    pub assignee: Option<String>,
    pub time_tracking: Option<TimeTracking>,
    /// Custom field id, with or without the `customfield_` prefix, to value
    pub custom: BTreeMap<String, Value>,
}

impl NewIssueFields {
    pub fn new(
        project_key: impl Into<String>,
        issue_type: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        NewIssueFields {
            project_key: project_key.into(),
            issue_type: issue_type.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent = Some(parent_key.into());
        self
    }

    #[must_use]
    pub fn assignee(mut self, assignee: &IssueUser) -> Self {
        self.assignee = Some(assignee.name.clone());
        self
    }

    #[must_use]
    pub fn time_tracking(mut self, time_tracking: TimeTracking) -> Self {
        self.time_tracking = Some(time_tracking);
        self
    }

    #[must_use]
    pub fn custom_field(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom.insert(id.into(), value.into());
        self
    }
}

/// The body of `POST /issue`
#[derive(Serialize, Debug)]
pub struct NewIssue {
    pub fields: Map<String, Value>,
}

impl NewIssue {
    /// # Errors
    /// See [`merge_fields`]
    pub fn from_fields(fields: &NewIssueFields) -> Result<NewIssue> {
        Ok(NewIssue {
            fields: merge_fields(fields)?,
        })
    }
}

/// Merges the fixed and the custom fields into the `fields` object of a
/// creation request.
///
/// # Errors
/// [`JiraError::Validation`] naming the first of `issuetype`, `project` and
/// `summary` that is blank. [`JiraError::InvalidArgument`] if two custom ids
/// name the same field, e.g. `100` and `customfield_100`. Nothing is merged
/// in either case.
pub fn merge_fields(fields: &NewIssueFields) -> Result<Map<String, Value>> {
    let issue_type = required("issuetype", &fields.issue_type)?;
    let project_key = required("project", &fields.project_key)?;
    let summary = required("summary", &fields.summary)?;

    let mut payload = Map::new();
    payload.insert("issuetype".to_string(), json!({ "name": issue_type }));
    payload.insert("project".to_string(), to_value(&ProjectKey::new(project_key))?);
    payload.insert("summary".to_string(), Value::from(summary));

    if let Some(description) = present(fields.description.as_deref()) {
        payload.insert("description".to_string(), Value::from(description));
    }
    if let Some(parent) = present(fields.parent.as_deref()) {
        payload.insert("parent".to_string(), json!({ "key": parent }));
    }
    if let Some(assignee) = present(fields.assignee.as_deref()) {
        let user = IssueUser {
            name: assignee.to_string(),
        };
        payload.insert("assignee".to_string(), to_value(&user)?);
    }
    if let Some(time_tracking) = fields.time_tracking.as_ref().filter(|t| !t.is_empty()) {
        payload.insert("timetracking".to_string(), to_value(time_tracking)?);
    }

    for (id, value) in &fields.custom {
        let key = custom_field_key(id);
        if payload.contains_key(&key) {
            return Err(JiraError::InvalidArgument(format!(
                "Custom field '{key}' is given more than once"
            )));
        }
        payload.insert(key, value.clone());
    }
    Ok(payload)
}

/// `customfield_<id>`, leaving ids that already carry the prefix alone
#[must_use]
pub fn custom_field_key(id: &str) -> String {
    if id.starts_with(CUSTOM_FIELD_PREFIX) {
        id.to_string()
    } else {
        format!("{CUSTOM_FIELD_PREFIX}{id}")
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    present(Some(value)).ok_or(JiraError::Validation { field })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(JiraError::Serialization)
}
