use chrono::{DateTime, TimeZone};
use std::fmt;
use urlencoding::encode;

use crate::{
    models::worklog::{NewWorklog, TimesheetResponse, WorklogEntry, WorklogList},
    timestamp::TimeLayout,
    Jira, Result, DEFAULT_API_PATH,
};

/// How the remaining estimate of an issue changes when work is logged on it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdjustEstimate {
    /// Sets the remaining estimate to the given duration, e.g. `2d`
    New(String),
    /// Leaves the estimate alone
    Leave,
    /// Reduces the estimate by the given duration
    Manual(String),
    /// Reduces the estimate by the time spent
    #[default]
    Auto,
}

impl AdjustEstimate {
    fn to_query(&self) -> String {
        match self {
            AdjustEstimate::New(estimate) => {
                format!("adjustEstimate=new&newEstimate={}", encode(estimate))
            }
            AdjustEstimate::Leave => "adjustEstimate=leave".to_string(),
            AdjustEstimate::Manual(reduce_by) => {
                format!("adjustEstimate=manual&reduceBy={}", encode(reduce_by))
            }
            AdjustEstimate::Auto => "adjustEstimate=auto".to_string(),
        }
    }
}

impl fmt::Display for AdjustEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

impl Jira {
    /// Adds a worklog to `issue_key`
    ///
    /// # Errors
    /// Transport, serialization and decode failures
    pub async fn log_work(
        &self,
        issue_key: &str,
        adjust: &AdjustEstimate,
        worklog: &NewWorklog,
    ) -> Result<WorklogEntry> {
        let url = self.api_url(&format!(
            "/issue/{}/worklog?{}",
            encode(issue_key),
            adjust.to_query()
        ))?;
        self.post::<WorklogEntry, NewWorklog>(&url, worklog).await
    }

    /// All worklogs of an issue
    ///
    /// # Errors
    /// Transport and decode failures
    pub async fn worklogs(&self, issue_key: &str) -> Result<WorklogList> {
        let url = self.api_url(&format!("/issue/{}/worklog", encode(issue_key)))?;
        self.get::<WorklogList>(&url).await
    }

    /// Work logged by `username` between `start` and `end`, both days included.
    ///
    /// Served by the timesheet plugin through the search resource of the
    /// latest REST API, whatever API path the client is configured with.
    ///
    /// # Errors
    /// Transport and decode failures
    pub async fn timesheet<Tz>(
        &self,
        username: &str,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<TimesheetResponse>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let url = self.resource_url(
            DEFAULT_API_PATH,
            &format!(
                "/search?targetUser={}&worklogDate={}&worklogDate={}&fields=worklog",
                encode(username),
                TimeLayout::DATE.format(start),
                TimeLayout::DATE.format(end)
            ),
        )?;
        self.get::<TimesheetResponse>(&url).await
    }
}
