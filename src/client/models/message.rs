//! Chat message models

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A message as returned by `GET /messages`
///
/// Fields are optional on the wire; see [`Message::is_renderable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub sender: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    /// Send time. Accepts RFC 3339, naive local ISO-8601, or epoch milliseconds.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// A message is shown only when both sender and content are present
    pub fn is_renderable(&self) -> bool {
        self.sender.is_some() && self.content.is_some()
    }
}

/// Body of `POST /messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender: String,
    pub content: String,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Fractional(f64),
        Text(String),
        Other(IgnoredAny),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        Raw::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        Raw::Fractional(ms) => Utc.timestamp_millis_opt(ms as i64).single(),
        Raw::Text(text) => parse_timestamp(&text),
        Raw::Other(_) => None,
    }))
}

/// Parse a textual timestamp; offset-less values are taken as local time.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}
