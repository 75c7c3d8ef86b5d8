use crate::{
    models::sprint::{SprintReport, Sprints},
    Jira, Result,
};

impl Jira {
    /// Sprints of a rapid board, optionally with the closed and the planned ones
    ///
    /// # Errors
    /// [`crate::JiraError::InvalidArgument`] when the client has no agile
    /// root, transport and decode failures
    pub async fn list_sprints(
        &self,
        rapid_view_id: u64,
        include_history: bool,
        include_future: bool,
    ) -> Result<Sprints> {
        let url = self.agile_url(&format!(
            "/sprintquery/{rapid_view_id}?includeHistoricSprints={include_history}&includeFutureSprints={include_future}"
        ))?;
        self.get::<Sprints>(&url).await
    }

    /// # Errors
    /// See [`Jira::list_sprints`]
    pub async fn sprint_report(&self, rapid_view_id: u64, sprint_id: u64) -> Result<SprintReport> {
        let url = self.agile_url(&format!(
            "/rapid/charts/sprintreport?rapidViewId={rapid_view_id}&sprintId={sprint_id}"
        ))?;
        self.get::<SprintReport>(&url).await
    }
}
