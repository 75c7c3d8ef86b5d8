//! Records of the Atom activity stream served under the activity path.
//!
//! Attributes are mapped with quick-xml's `@name` convention and element text
//! with `$text`.
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::decode::XmlDocument;

#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(rename = "feed")]
pub struct ActivityFeed {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub author: Option<Person>,
    #[serde(rename = "entry", default)]
    pub entries: Vec<ActivityItem>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ActivityItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub published: Option<DateTime<FixedOffset>>,
    pub author: Option<Person>,
    pub summary: Option<Text>,
    pub content: Option<Text>,
    #[serde(rename = "category", default)]
    pub categories: Vec<Category>,
}

impl XmlDocument for ActivityFeed {
    const ROOT: &'static str = "feed";
}

impl ActivityItem {
    /// The `href` of the first link with the given `rel`
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel.as_deref() == Some(rel))
            .map(|link| link.href.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "@term")]
    pub term: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "@rel", default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(rename = "@href")]
    pub href: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    pub uri: Option<String>,
    pub email: Option<String>,
}

/// Atom text construct; `kind` is `text`, `html` or `xhtml`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Text {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "$text", default)]
    pub body: String,
}
