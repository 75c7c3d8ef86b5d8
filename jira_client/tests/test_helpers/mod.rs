pub mod jira_client;
pub mod test_data;
