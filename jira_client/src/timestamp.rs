//! Timestamps as the Jira REST API writes them.
//!
//! Most endpoints send strings like `2006-01-02T15:04:05.000-0700`, some wrap
//! them in an extra pair of quotes and a few older ones send milliseconds since
//! the epoch. [`JiraTime`] reads all of them and always writes the string form
//! of its [`TimeLayout`].
use std::borrow::Cow;
use std::fmt::{self, Formatter};

use chrono::format::ParseErrorKind;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{JiraError, PayloadFormat, Result};

/// A chrono format string describing one wire representation of a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeLayout(Cow<'static, str>);

impl TimeLayout {
    /// `2006-01-02T15:04:05.000-0700`, millisecond precision with a numeric offset.
    pub const JIRA: TimeLayout = TimeLayout(Cow::Borrowed("%Y-%m-%dT%H:%M:%S%.3f%z"));

    /// `2006-01-02`, used by date-only query parameters.
    pub const DATE: TimeLayout = TimeLayout(Cow::Borrowed("%Y-%m-%d"));

    pub fn new(format: impl Into<Cow<'static, str>>) -> Self {
        TimeLayout(format.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats any chrono date time with this layout
    pub fn format<Tz>(&self, instant: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        instant.format(self.as_str()).to_string()
    }
}

impl Default for TimeLayout {
    fn default() -> Self {
        TimeLayout::JIRA
    }
}

/// A point in time received from, or sent to, Jira.
///
/// A default constructed value is *unset*, which is not the same thing as
/// the Unix epoch: `1970-01-01T00:00:00.000+0000` parses into a set value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JiraTime {
    instant: Option<DateTime<FixedOffset>>,
    layout: TimeLayout,
}

impl JiraTime {
    #[must_use]
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self::with_layout(instant, TimeLayout::JIRA)
    }

    #[must_use]
    pub fn with_layout(instant: DateTime<FixedOffset>, layout: TimeLayout) -> Self {
        JiraTime {
            instant: Some(instant),
            layout,
        }
    }

    /// Parses a timestamp written with [`TimeLayout::JIRA`].
    ///
    /// # Errors
    /// [`JiraError::Decode`] if the value does not match the layout.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, TimeLayout::JIRA)
    }

    /// Parses `raw` with the given layout, after removing one pair of
    /// surrounding double quotes if there is one.
    ///
    /// Layouts without an offset are read as UTC, date-only layouts as midnight UTC.
    ///
    /// # Errors
    /// [`JiraError::Decode`] carrying `raw` if the value does not match the layout.
    pub fn parse_with(raw: &str, layout: TimeLayout) -> Result<Self> {
        let value = strip_quotes(raw);
        let instant = parse_instant(value, layout.as_str()).map_err(|e| {
            JiraError::decode(PayloadFormat::Timestamp, raw.as_bytes(), e)
        })?;
        Ok(Self::with_layout(instant, layout))
    }

    /// Milliseconds since the Unix epoch, in UTC.
    ///
    /// # Errors
    /// [`JiraError::Decode`] if the value is outside the range chrono can represent.
    pub fn from_millis(millis: i64) -> Result<Self> {
        let instant = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            JiraError::decode(
                PayloadFormat::Timestamp,
                millis.to_string().as_bytes(),
                format!("{millis} ms is out of range"),
            )
        })?;
        Ok(Self::new(instant.fixed_offset()))
    }

    /// `true` once a value has been parsed or assigned.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.instant.is_some()
    }

    #[must_use]
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        self.instant
    }

    #[must_use]
    pub fn layout(&self) -> &TimeLayout {
        &self.layout
    }

    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.instant.map(|instant| instant.timestamp_millis())
    }

    /// The wire representation, `None` when unset.
    #[must_use]
    pub fn format(&self) -> Option<String> {
        self.instant.map(|instant| self.layout.format(&instant))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for JiraTime {
    fn from(instant: DateTime<Tz>) -> Self {
        JiraTime::new(instant.fixed_offset())
    }
}

impl fmt::Display for JiraTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format() {
            Some(formatted) => f.write_str(&formatted),
            None => f.write_str("<unset>"),
        }
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}

fn parse_instant(
    value: &str,
    layout: &str,
) -> std::result::Result<DateTime<FixedOffset>, chrono::ParseError> {
    match DateTime::parse_from_str(value, layout) {
        Ok(instant) => Ok(instant),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => NaiveDateTime::parse_from_str(value, layout)
            .or_else(|_| {
                NaiveDate::parse_from_str(value, layout).map(|date| date.and_time(NaiveTime::MIN))
            })
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|_| e),
        Err(e) => Err(e),
    }
}

impl Serialize for JiraTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.format() {
            Some(formatted) => serializer.serialize_str(&formatted),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for JiraTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct JiraTimeVisitor;

        impl<'de> Visitor<'de> for JiraTimeVisitor {
            type Value = JiraTime;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a timestamp string, milliseconds since the epoch or null")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<JiraTime, E>
            where
                E: de::Error,
            {
                JiraTime::parse(value).map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<JiraTime, E>
            where
                E: de::Error,
            {
                JiraTime::from_millis(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<JiraTime, E>
            where
                E: de::Error,
            {
                let millis = i64::try_from(value).map_err(de::Error::custom)?;
                self.visit_i64(millis)
            }

            fn visit_none<E>(self) -> std::result::Result<JiraTime, E>
            where
                E: de::Error,
            {
                Ok(JiraTime::default())
            }

            fn visit_unit<E>(self) -> std::result::Result<JiraTime, E>
            where
                E: de::Error,
            {
                Ok(JiraTime::default())
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<JiraTime, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(JiraTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};
    use serde_json::json;

    #[test]
    fn parse_jira_layout() {
        let t = JiraTime::parse("2024-03-18T09:15:30.250+0100").unwrap();
        let instant = t.instant().unwrap();
        assert_eq!(instant.year(), 2024);
        assert_eq!(instant.hour(), 9);
        assert_eq!(instant.timestamp_subsec_millis(), 250);
        assert_eq!(instant.offset().local_minus_utc(), 3600);
        assert!(t.is_set());
    }

    #[test]
    fn parse_strips_one_pair_of_quotes() {
        let quoted = JiraTime::parse("\"2024-03-18T09:15:30.250+0100\"").unwrap();
        let bare = JiraTime::parse("2024-03-18T09:15:30.250+0100").unwrap();
        assert_eq!(quoted, bare);
    }

    #[test]
    fn parse_failure_is_a_decode_error() {
        let err = JiraTime::parse("yesterday").unwrap_err();
        match err {
            JiraError::Decode {
                format, payload, ..
            } => {
                assert_eq!(format, PayloadFormat::Timestamp);
                assert_eq!(payload, b"yesterday");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unset_is_not_epoch() {
        let unset = JiraTime::default();
        assert!(!unset.is_set());
        assert_eq!(unset.format(), None);

        let epoch = JiraTime::parse("1970-01-01T00:00:00.000+0000").unwrap();
        assert!(epoch.is_set());
        assert_eq!(epoch.timestamp_millis(), Some(0));
        assert_ne!(unset, epoch);
    }

    #[test]
    fn round_trip_keeps_millisecond_precision() {
        let original = JiraTime::from(Utc.timestamp_millis_opt(1_710_753_330_123).unwrap());
        let encoded = original.format().unwrap();
        let decoded = JiraTime::parse(&encoded).unwrap();
        assert_eq!(decoded.timestamp_millis(), Some(1_710_753_330_123));
        assert_eq!(decoded, original);
    }

    #[test]
    fn serde_round_trip_uses_string_layout() {
        let original = JiraTime::parse("2024-03-18T09:15:30.250+0100").unwrap();
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(value, json!("2024-03-18T09:15:30.250+0100"));

        let back: JiraTime = serde_json::from_value(value).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn deserialize_millis_and_null() {
        let from_millis: JiraTime = serde_json::from_value(json!(0)).unwrap();
        assert!(from_millis.is_set());
        assert_eq!(from_millis.timestamp_millis(), Some(0));

        let from_null: JiraTime = serde_json::from_value(json!(null)).unwrap();
        assert!(!from_null.is_set());
        assert_eq!(serde_json::to_value(&from_null).unwrap(), json!(null));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        let result = serde_json::from_value::<JiraTime>(json!("18/03/2024"));
        assert!(result.is_err());
    }

    #[test]
    fn date_layout_coexists_with_jira_layout() {
        let day = JiraTime::parse_with("2015-08-01", TimeLayout::DATE).unwrap();
        assert_eq!(day.format().as_deref(), Some("2015-08-01"));
        assert_eq!(day.layout(), &TimeLayout::DATE);

        let instant = day.instant().unwrap();
        let as_jira = JiraTime::new(instant);
        assert_eq!(as_jira.format().as_deref(), Some("2015-08-01T00:00:00.000+0000"));
    }
}
