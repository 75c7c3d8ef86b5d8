mod test_helpers;

use crate::test_helpers::jira_client::create_jira_client;
use crate::test_helpers::test_data;
use jira_client::{JiraError, NewIssueFields};
use log::debug;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_create_issue_assigned_to_looked_up_user() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _user = server
        .mock("GET", "/rest/api/latest/user")
        .match_query(Matcher::UrlEncoded("username".into(), "fred".into()))
        .with_body(test_data::user("fred"))
        .create_async()
        .await;
    let create = server
        .mock("POST", "/rest/api/latest/issue")
        .match_body(Matcher::Json(json!({
            "fields": {
                "project": { "key": "TEST" },
                "issuetype": { "name": "Task" },
                "summary": "Test issue",
                "description": "Test description",
                "parent": { "key": "TEST-1" },
                "assignee": { "name": "fred" },
                "customfield_10904": { "value": "Asset" }
            }
        })))
        .with_status(201)
        .with_body(r#"{"id": "10042", "key": "TEST-42", "self": "http://jira.example.com/rest/api/2/issue/10042"}"#)
        .create_async()
        .await;

    let jira_client = create_jira_client(&server.url());
    let fred = jira_client.user("fred").await?;
    let fields = NewIssueFields::new("TEST", "Task", "Test issue")
        .description("Test description")
        .parent("TEST-1")
        .assignee(&fred.as_assignee())
        .custom_field("customfield_10904", json!({ "value": "Asset" }));

    let new_issue = jira_client.create_issue(&fields).await?;
    assert_eq!(new_issue.key, "TEST-42");
    debug!("Created issue {}", new_issue.key);
    create.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_summary_is_rejected_locally() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let jira_client = create_jira_client(&server.url());
    let err = jira_client
        .create_issue(&NewIssueFields::new("TEST", "Task", " "))
        .await
        .unwrap_err();
    assert!(matches!(err, JiraError::Validation { field: "summary" }));
    create.assert_async().await;
}
