//! Structured filter engine.
//!
//! [`RawFilters`] carries filter parameters exactly as a caller received
//! them (query-string text). [`FilterSet::parse`] validates all of them up
//! front and either returns typed filters or one aggregated
//! [`Error::Validation`]; nothing is filtered on partial input.

use serde::{Deserialize, Serialize};

use crate::entry::StringEntry;
use crate::error::{Error, Result};

/// Untyped filter parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawFilters {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl RawFilters {
    /// Set the parameter called `key`. Returns `false` for names that are
    /// not filters; those are ignored.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "is_palindrome" => &mut self.is_palindrome,
            "min_length" => &mut self.min_length,
            "max_length" => &mut self.max_length,
            "word_count" => &mut self.word_count,
            "contains_character" => &mut self.contains_character,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }
}

/// Typed, validated filters. Absent fields are not applied and are left
/// out of the serialized echo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterSet {
    /// Validate every supplied parameter and convert it to its typed form.
    ///
    /// `is_palindrome` must be `true` or `false`; the numeric filters must
    /// be finite numbers (truncated toward zero); `contains_character` must
    /// be exactly one character.
    pub fn parse(raw: &RawFilters) -> Result<Self> {
        let mut problems = Vec::new();
        let mut filters = Self::default();

        if let Some(v) = &raw.is_palindrome {
            match v.as_str() {
                "true" => filters.is_palindrome = Some(true),
                "false" => filters.is_palindrome = Some(false),
                _ => problems.push(format!("is_palindrome must be 'true' or 'false', got {v:?}")),
            }
        }

        for (name, raw_value, slot) in [
            ("min_length", &raw.min_length, &mut filters.min_length),
            ("max_length", &raw.max_length, &mut filters.max_length),
            ("word_count", &raw.word_count, &mut filters.word_count),
        ] {
            if let Some(v) = raw_value {
                match parse_number(v) {
                    Some(n) => *slot = Some(n),
                    None => problems.push(format!("{name} must be a number, got {v:?}")),
                }
            }
        }

        if let Some(v) = &raw.contains_character {
            if v.chars().count() == 1 {
                filters.contains_character = Some(v.clone());
            } else {
                problems.push(format!(
                    "contains_character must be a single character, got {v:?}"
                ));
            }
        }

        if problems.is_empty() {
            Ok(filters)
        } else {
            Err(Error::Validation(problems))
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// All present filters hold for `entry`.
    ///
    /// `min_length > max_length` is not an error here; it simply matches
    /// nothing.
    #[must_use]
    pub fn matches(&self, entry: &StringEntry) -> bool {
        let props = &entry.properties;
        let length = to_i64(props.length);

        self.is_palindrome.is_none_or(|p| props.is_palindrome == p)
            && self.min_length.is_none_or(|min| length >= min)
            && self.max_length.is_none_or(|max| length <= max)
            && self
                .word_count
                .is_none_or(|n| to_i64(props.word_count) == n)
            && self.contains_character.as_deref().is_none_or(|c| {
                entry.value.to_lowercase().contains(&c.to_lowercase())
            })
    }

    /// Entries of `entries` that satisfy every filter, order preserved.
    #[must_use]
    pub fn apply(&self, entries: Vec<StringEntry>) -> Vec<StringEntry> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Result of a structured listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredList {
    pub data: Vec<StringEntry>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

impl FilteredList {
    #[must_use]
    pub fn new(data: Vec<StringEntry>, filters_applied: FilterSet) -> Self {
        Self {
            count: data.len(),
            data,
            filters_applied,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn parse_number(raw: &str) -> Option<i64> {
    let n: f64 = raw.trim().parse().ok()?;
    n.is_finite().then(|| n.trunc() as i64)
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
