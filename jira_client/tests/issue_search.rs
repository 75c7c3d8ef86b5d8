mod test_helpers;

use crate::test_helpers::jira_client::create_jira_client;
use crate::test_helpers::test_data;
use jira_client::SearchParams;
use mockito::{Matcher, Server};

#[tokio::test]
async fn search_issues_walks_all_pages() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let keys = test_data::issue_keys(5);
    let jql = "project = TEST ORDER BY key";

    let mut mocks = Vec::new();
    for start_at in [0_u32, 2, 4] {
        let end = (start_at as usize + 2).min(keys.len());
        let page_keys = &keys[start_at as usize..end];
        let mut query = vec![
            Matcher::UrlEncoded("jql".into(), jql.into()),
            Matcher::UrlEncoded("maxResults".into(), "2".into()),
        ];
        if start_at > 0 {
            query.push(Matcher::UrlEncoded("startAt".into(), start_at.to_string()));
        }
        let mock = server
            .mock("GET", "/rest/api/latest/search")
            .match_query(Matcher::AllOf(query))
            .with_body(test_data::issue_page(5, start_at, 2, page_keys))
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let jira_client = create_jira_client(&server.url());
    let mut params = SearchParams::new(jql).max_results(2);
    let mut found = Vec::new();
    let mut pages_seen = Vec::new();
    loop {
        let list = jira_client.search_issues(&params).await?;
        let pagination = list.pagination.clone().expect("pagination is computed");
        assert_eq!(pagination.page_count, 3);
        assert_eq!(pagination.pages, vec![0, 1, 2]);
        pages_seen.push(pagination.page);
        found.extend(list.issues.into_iter().map(|issue| issue.key));
        match pagination.next_start_at() {
            Some(start_at) => params = params.start_at(start_at),
            None => break,
        }
    }

    assert_eq!(found, keys);
    assert_eq!(pages_seen, vec![0, 1, 2]);
    for mock in mocks {
        mock.assert_async().await;
    }
    Ok(())
}

#[tokio::test]
async fn search_result_carries_custom_fields() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/rest/api/latest/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("jql".into(), "assignee=\"fred\"".into()),
            Matcher::UrlEncoded("maxResults".into(), "10".into()),
        ]))
        .with_body(test_data::issue_page(1, 0, 10, &test_data::issue_keys(1)))
        .create_async()
        .await;

    let jira_client = create_jira_client(&server.url());
    let list = jira_client.issues_assigned_to("fred", 10, 0).await?;
    let fields = list.issues[0].fields.as_ref().expect("fields");
    assert_eq!(fields.custom_field("10004"), Some(&serde_json::json!(3.0)));
    assert!(list.issues[0].created().is_set());
    Ok(())
}
