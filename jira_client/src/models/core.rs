use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The error envelope Jira puts in the body of failed requests, whatever the
/// status code.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    #[serde(rename = "errorMessages", default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl Errors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty() && self.errors.is_empty()
    }
}

/// Represents the author of a change log entry or worklog item
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Default)]
pub struct IssueAuthor {
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(rename = "emailAddress")]
    pub email_address: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialOrd, PartialEq, Eq, Hash, Ord)]
pub struct Component {
    pub id: String,
    pub name: String,
}

/// A number together with the way Jira rendered it, e.g. `{"value": 8.0, "text": "8.0"}`
#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct TextValue {
    #[serde(default)]
    pub value: f32,
    #[serde(default)]
    pub text: String,
}
