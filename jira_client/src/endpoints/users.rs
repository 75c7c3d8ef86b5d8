use urlencoding::encode;

use crate::{models::user::User, Jira, Result};

/// Query of the user search
#[derive(Debug, Clone)]
pub struct UserSearch {
    /// Matched against user name, display name and email address
    pub username: String,
    pub start_at: u32,
    pub max_results: u32,
    pub include_active: bool,
    pub include_inactive: bool,
}

impl Default for UserSearch {
    fn default() -> Self {
        UserSearch {
            username: String::new(),
            start_at: 0,
            max_results: 50,
            include_active: true,
            include_inactive: false,
        }
    }
}

impl UserSearch {
    pub fn new(username: impl Into<String>) -> Self {
        UserSearch {
            username: username.into(),
            ..Default::default()
        }
    }

    fn to_query(&self) -> String {
        format!(
            "username={}&startAt={}&maxResults={}&includeActive={}&includeInactive={}",
            encode(&self.username),
            self.start_at,
            self.max_results,
            self.include_active,
            self.include_inactive
        )
    }
}

impl Jira {
    /// The user the client is authenticated as
    ///
    /// # Errors
    /// Transport and decode failures
    pub async fn myself(&self) -> Result<User> {
        let url = self.api_url("/myself")?;
        self.get::<User>(&url).await
    }

    /// # Errors
    /// Transport and decode failures
    pub async fn user(&self, username: &str) -> Result<User> {
        let url = self.api_url(&format!("/user?username={}", encode(username)))?;
        self.get::<User>(&url).await
    }

    /// # Errors
    /// Transport and decode failures
    pub async fn search_users(&self, search: &UserSearch) -> Result<Vec<User>> {
        let url = self.api_url(&format!("/user/search?{}", search.to_query()))?;
        self.get::<Vec<User>>(&url).await
    }
}
