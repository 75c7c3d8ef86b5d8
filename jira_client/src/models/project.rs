use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A project as referenced from issue fields
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Project {
    /// Unique numeric identity of a jira project
    #[serde(default)]
    pub id: String,
    /// The jira project key, typically a short upper-case abbreviation
    pub key: String,
    /// The name of the jira project
    #[serde(default)]
    pub name: String,
    #[serde(rename = "self", default)]
    pub url: String,
    #[serde(rename = "avatarUrls", default)]
    pub avatar_urls: BTreeMap<String, String>,
}

/// Project reference sent when creating an issue
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectKey {
    pub key: String,
}

impl ProjectKey {
    pub fn new(key: impl Into<String>) -> Self {
        ProjectKey { key: key.into() }
    }
}
