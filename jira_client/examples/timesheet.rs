use std::env;

use chrono::{Duration, Local};
use jira_client::JiraBuilder;

/// Work logged during the last week by the given user, or by the
/// authenticated one.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = JiraBuilder::create_from_env()?;
    let user = match env::args().nth(1) {
        Some(user) => user,
        None => client.myself().await?.name,
    };

    let end = Local::now();
    let start = end - Duration::days(7);
    let timesheet = client.timesheet(&user, &start, &end).await?;

    for issue in &timesheet.worklog {
        let seconds: i64 = issue.entries.iter().map(|e| e.time_spent).sum();
        println!("{:<12} {:>6.2}h {}", issue.issue_key, seconds as f64 / 3600.0, issue.issue_summary);
    }
    Ok(())
}
