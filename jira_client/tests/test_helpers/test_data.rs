use serde_json::{json, Value};

/// One page of a search answer holding `keys`
#[allow(dead_code)]
pub fn issue_page(total: u32, start_at: u32, max_results: u32, keys: &[String]) -> String {
    let issues: Vec<Value> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            json!({
                "id": format!("{}", 10_000 + start_at as usize + i),
                "key": key,
                "fields": {
                    "summary": format!("Issue {key}"),
                    "created": "2024-03-18T09:15:30.250+0100",
                    "customfield_10004": 3.0
                }
            })
        })
        .collect();
    json!({
        "expand": "names,schema",
        "startAt": start_at,
        "maxResults": max_results,
        "total": total,
        "issues": issues
    })
    .to_string()
}

/// `TEST-1` to `TEST-<qty>`
#[allow(dead_code)]
pub fn issue_keys(qty: u32) -> Vec<String> {
    (1..=qty).map(|n| format!("TEST-{n}")).collect()
}

#[allow(dead_code)]
pub fn user(name: &str) -> String {
    json!({
        "self": format!("http://jira.example.com/rest/api/2/user?username={name}"),
        "name": name,
        "emailAddress": format!("{name}@example.com"),
        "displayName": name.to_uppercase(),
        "active": true,
        "timeZone": "Europe/Oslo"
    })
    .to_string()
}
