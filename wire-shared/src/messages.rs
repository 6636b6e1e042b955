use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::UserId;

///
/// A wire as returned by `/message/{username}`.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message_text: String,
    #[serde(deserialize_with = "deserialize_created")]
    pub created: DateTime<Utc>,
    pub user: UserId,
}

///
/// Accept RFC 3339 timestamps as well as naive ones, which the backend emits
/// when it runs without time zone support. Naive timestamps are taken as UTC.
///
fn deserialize_created<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|timestamp| Utc.from_utc_datetime(&timestamp))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", value, e)))
}
