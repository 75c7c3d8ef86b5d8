use serde::{Deserialize, Serialize};

use crate::{JiraBuilder, DEFAULT_ACTIVITY_PATH, DEFAULT_AGILE_PATH, DEFAULT_API_PATH};

pub const JIRA_PASSWORD_PLACEHOLDER: &str = "<your secret jira password goes here>";

/// The client settings an application keeps in its configuration file
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct JiraClientConfiguration {
    pub jira_url: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_api_path")]
    pub api_path: String,
    #[serde(default = "default_activity_path")]
    pub activity_path: String,
    /// Root of the boards and sprints API, `None` when the instance has none
    #[serde(default = "default_agile_path")]
    pub agile_path: Option<String>,
    #[serde(default)]
    pub debug: bool,
    /// No timeout when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

fn default_activity_path() -> String {
    DEFAULT_ACTIVITY_PATH.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_agile_path() -> Option<String> {
    Some(DEFAULT_AGILE_PATH.to_string())
}

impl Default for JiraClientConfiguration {
    fn default() -> Self {
        JiraClientConfiguration {
            jira_url: "https://jira.example.com".into(),
            user: "user.name".into(),
            password: JIRA_PASSWORD_PLACEHOLDER.into(),
            api_path: default_api_path(),
            activity_path: default_activity_path(),
            agile_path: default_agile_path(),
            debug: false,
            timeout_secs: None,
        }
    }
}

impl JiraClientConfiguration {
    /// Has the password been filled in?
    #[must_use]
    pub fn has_valid_password(&self) -> bool {
        !(self.password.trim().is_empty() || self.password == JIRA_PASSWORD_PLACEHOLDER)
    }

    /// A builder primed with these settings
    #[must_use]
    pub fn builder(&self) -> JiraBuilder {
        let mut builder = JiraBuilder::new()
            .host(&self.jira_url)
            .basic_auth(&self.user, &self.password)
            .api_path(&self.api_path)
            .activity_path(&self.activity_path)
            .debug(self.debug);

        builder = match &self.agile_path {
            Some(path) => builder.agile_path(path),
            None => builder.no_agile(),
        };

        if let Some(seconds) = self.timeout_secs {
            builder = builder.timeout(seconds);
        }
        builder
    }
}
