use std::env;

use jira_client::{JiraBuilder, SearchParams};

/// Lists the issues matched by a JQL query, page by page.
///
/// `cargo run --example issues -- "project = TEST"` with `JIRA_HOST`,
/// `JIRA_USER` and `JIRA_PASSWORD` set.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let jql = env::args()
        .nth(1)
        .unwrap_or_else(|| "assignee = currentUser() ORDER BY updated DESC".to_string());
    let client = JiraBuilder::create_from_env()?;

    let mut params = SearchParams::new(jql).max_results(25).fields(["summary", "status"]);
    loop {
        let list = client.search_issues(&params).await?;
        for issue in &list.issues {
            let fields = issue.fields.as_ref();
            println!(
                "{:<12} {:<14} {}",
                issue.key,
                fields
                    .and_then(|f| f.status.as_ref())
                    .map_or("", |s| s.name.as_str()),
                fields.map_or("", |f| f.summary.as_str())
            );
        }
        match list.pagination.and_then(|p| p.next_start_at()) {
            Some(start_at) => params = params.start_at(start_at),
            None => break,
        }
    }
    Ok(())
}
