use jira_client::{Jira, JiraBuilder};

/// Names the credentials the mock server expects
pub const TEST_USER: &str = "test_user";
pub const TEST_TOKEN: &str = "test_token";
/// `Basic` authorization value for [`TEST_USER`] and [`TEST_TOKEN`]
pub const TEST_AUTHORIZATION: &str = "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4=";

/// A client talking to the mock server at `host`, with debug logging on
pub fn create_jira_client(host: &str) -> Jira {
    let _ = env_logger::builder().is_test(true).try_init();
    JiraBuilder::new()
        .host(host)
        .basic_auth(TEST_USER, TEST_TOKEN)
        .timeout(10)
        .debug(true)
        .build()
        .expect("Error initializing jira client")
}
