use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::issue::IssueUser;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "self")]
    pub self_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email_address: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "timeZone", default)]
    pub time_zone: String,
    #[serde(rename = "avatarUrls", default)]
    pub avatar_urls: BTreeMap<String, String>,
    #[serde(default)]
    pub expand: String,
}

impl User {
    /// The reference used to assign an issue to this user
    #[must_use]
    pub fn as_assignee(&self) -> IssueUser {
        IssueUser {
            name: self.name.clone(),
        }
    }
}
