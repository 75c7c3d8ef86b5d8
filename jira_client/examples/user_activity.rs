use std::env;

use jira_client::JiraBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = JiraBuilder::create_from_env()?;
    let user = match env::args().nth(1) {
        Some(user) => user,
        None => client.myself().await?.name,
    };

    let feed = client.user_activity(&user).await?;
    println!("{} ({} entries)", feed.title, feed.entries.len());
    for entry in &feed.entries {
        let when = entry
            .updated
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{when:<16} {}", entry.title);
    }
    Ok(())
}
