use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Properties derived from a string at submission time.
///
/// Computed once by [`crate::analyze`] and never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Properties {
    /// Characters in the raw value.
    pub length: usize,
    /// Palindrome check over the cleaned value.
    pub is_palindrome: bool,
    /// Distinct characters in the cleaned value.
    pub unique_characters: usize,
    /// Whitespace-delimited tokens in the trimmed raw value.
    pub word_count: usize,
    #[serde(rename = "sha256_hash")]
    pub fingerprint: String,
    /// Occurrences of each character of the cleaned value.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored string together with its derived properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringEntry {
    #[serde(rename = "id")]
    pub fingerprint: String,
    /// The submitted value, verbatim.
    pub value: String,
    pub properties: Properties,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl StringEntry {
    /// Analyze `value` and stamp the result with the current time.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_timestamp(value, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = crate::analyze(&value);
        Self {
            fingerprint: properties.fingerprint.clone(),
            value,
            properties,
            created_at,
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
