use url::Url;
use urlencoding::encode;

use crate::{models::activity::ActivityFeed, Jira, Result};

impl Jira {
    /// The activity stream of one user
    ///
    /// # Errors
    /// Transport failures, and [`crate::JiraError::Decode`] if the answer is
    /// not an Atom feed
    pub async fn user_activity(&self, username: &str) -> Result<ActivityFeed> {
        let streams = format!("user IS {username}");
        let url = self.activity_url(&format!("?streams={}", encode(&streams)))?;
        self.activity(&url).await
    }

    /// Fetches any Atom feed, e.g. a filtered stream or a `next` link
    ///
    /// # Errors
    /// See [`Jira::user_activity`]
    pub async fn activity(&self, url: &Url) -> Result<ActivityFeed> {
        self.get_xml::<ActivityFeed>(url).await
    }
}
