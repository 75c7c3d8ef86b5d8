use urlencoding::encode;

use crate::{
    fields::{NewIssue, NewIssueFields},
    models::issue::{Issue, IssueCreateResponse, IssueList},
    Jira, Result,
};

const ISSUE: &str = "/issue";
const SEARCH: &str = "/search";

/// Parameters of a JQL search.
///
/// `start_at` and `max_results` are left to the server when zero, `fields`
/// and `expand` when empty.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub jql: String,
    /// Index of the first issue to return (0-based)
    pub start_at: u32,
    /// Maximum number of issues to return, Jira defaults to 50
    pub max_results: u32,
    pub validate_query: bool,
    /// Fields to return for each issue, all navigable fields when empty
    pub fields: Vec<String>,
    pub expand: Vec<String>,
}

impl SearchParams {
    pub fn new(jql: impl Into<String>) -> Self {
        SearchParams {
            jql: jql.into(),
            start_at: 0,
            max_results: 0,
            validate_query: true,
            fields: Vec::new(),
            expand: Vec::new(),
        }
    }

    #[must_use]
    pub fn start_at(mut self, start_at: u32) -> Self {
        self.start_at = start_at;
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn validate_query(mut self, validate_query: bool) -> Self {
        self.validate_query = validate_query;
        self
    }

    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = expand.into_iter().map(Into::into).collect();
        self
    }

    fn to_query(&self) -> String {
        let mut query = format!("jql={}", encode(&self.jql));
        if self.start_at > 0 {
            query.push_str(&format!("&startAt={}", self.start_at));
        }
        if self.max_results > 0 {
            query.push_str(&format!("&maxResults={}", self.max_results));
        }
        if !self.validate_query {
            query.push_str("&validateQuery=false");
        }
        if !self.fields.is_empty() {
            query.push_str(&format!("&fields={}", encode(&self.fields.join(","))));
        }
        if !self.expand.is_empty() {
            query.push_str(&format!("&expand={}", encode(&self.expand.join(","))));
        }
        query
    }
}

impl Jira {
    /// Retrieves an issue by id or key
    ///
    /// # Errors
    /// Transport and decode failures, see [`crate::JiraError`]
    pub async fn issue(&self, id_or_key: &str) -> Result<Issue> {
        let url = self.api_url(&format!("{ISSUE}/{}", encode(id_or_key)))?;
        self.get::<Issue>(&url).await
    }

    /// Searches issues with JQL and computes the page window of the result
    ///
    /// # Errors
    /// Transport and decode failures, and [`crate::JiraError::InvalidArgument`]
    /// if the answer reports a `maxResults` of zero.
    pub async fn search_issues(&self, params: &SearchParams) -> Result<IssueList> {
        let url = self.api_url(&format!("{SEARCH}?{}", params.to_query()))?;
        self.get::<IssueList>(&url).await?.paginate()
    }

    /// Issues assigned to `user`
    ///
    /// # Errors
    /// See [`Jira::search_issues`]
    pub async fn issues_assigned_to(
        &self,
        user: &str,
        max_results: u32,
        start_at: u32,
    ) -> Result<IssueList> {
        let params = SearchParams::new(format!("assignee=\"{user}\""))
            .start_at(start_at)
            .max_results(max_results);
        self.search_issues(&params).await
    }

    /// Runs a raw JQL query with the server's paging defaults
    ///
    /// # Errors
    /// See [`Jira::search_issues`]
    pub async fn issues_by_jql(&self, jql: &str) -> Result<IssueList> {
        self.search_issues(&SearchParams::new(jql)).await
    }

    /// Creates an issue from fixed and custom fields.
    ///
    /// Nothing is sent if a required field is missing.
    ///
    /// # Errors
    /// [`crate::JiraError::Validation`], transport and decode failures
    pub async fn create_issue(&self, fields: &NewIssueFields) -> Result<IssueCreateResponse> {
        let new_issue = NewIssue::from_fields(fields)?;
        let url = self.api_url(ISSUE)?;
        self.post::<IssueCreateResponse, NewIssue>(&url, &new_issue).await
    }
}
