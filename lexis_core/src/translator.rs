//! Heuristic translation of free-text queries into a [`FilterSet`].
//!
//! Rules fire independently per filter category:
//!
//! | Trigger                                  | Filter                          |
//! |------------------------------------------|---------------------------------|
//! | `palindrome` / `palindromic`             | `is_palindrome = true`          |
//! | `single word`                            | `word_count = 1`                |
//! | otherwise a number and `word(s)`         | `word_count = n`                |
//! | `longer than` and a number               | `min_length = n + 1`            |
//! | `shorter than` and a number              | `max_length = n - 1`            |
//! | `letter <c>`                             | `contains_character = c`        |
//! | `first vowel`                            | `contains_character = 'a'`      |
//!
//! `n` is always the first number in the query. `first vowel` is a fixed
//! heuristic: it means the letter `a`, not the first vowel of any string.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::entry::StringEntry;
use crate::error::{Error, Result};
use crate::filter::FilterSet;
use crate::nlp::{LexicalTagger, Tagger};

static LETTER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"letter\s+["']?([a-z])"#).ok());

/// The query as received and the filters it was read as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Result of a natural-language listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NaturalLanguageList {
    pub data: Vec<StringEntry>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Rule-based query translator over a pluggable [`Tagger`].
#[derive(Debug, Clone, Default)]
pub struct Translator<T = LexicalTagger> {
    tagger: T,
}

impl Translator<LexicalTagger> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tagger: LexicalTagger::new(),
        }
    }
}

impl<T: Tagger> Translator<T> {
    pub fn with_tagger(tagger: T) -> Self {
        Self { tagger }
    }

    /// Derive filters from `query`.
    ///
    /// Fails with [`Error::Parse`] when no rule fires. Conflicting length
    /// bounds are returned as-is; see [`check_conflict`].
    pub fn interpret(&self, query: &str) -> Result<FilterSet> {
        let text = query.trim().to_lowercase();
        let terms = self.tagger.terms(&text);
        let first_number = self.tagger.numbers(&text).first().copied();

        let mut filters = FilterSet::default();

        if has_any(&terms, &["palindrome", "palindromes", "palindromic"]) {
            filters.is_palindrome = Some(true);
        }

        if has_phrase(&terms, &["single", "word"]) {
            filters.word_count = Some(1);
        } else if has_any(&terms, &["word", "words"]) {
            filters.word_count = first_number.map(truncate);
        }

        if let Some(n) = first_number {
            if has_phrase(&terms, &["longer", "than"]) {
                filters.min_length = Some(truncate(n.floor()).saturating_add(1));
            }
            if has_phrase(&terms, &["shorter", "than"]) {
                filters.max_length = Some(truncate(n.ceil()).saturating_sub(1));
            }
        }

        if let Some(c) = LETTER
            .as_ref()
            .and_then(|re| re.captures(&text))
            .and_then(|caps| caps.get(1))
        {
            filters.contains_character = Some(c.as_str().to_string());
        }

        if has_phrase(&terms, &["first", "vowel"]) {
            filters.contains_character = Some("a".to_string());
        }

        if filters.is_empty() {
            return Err(Error::Parse(query.to_string()));
        }
        Ok(filters)
    }
}

/// Fail with [`Error::Conflict`] when both length bounds are set and the
/// lower exceeds the upper.
pub fn check_conflict(filters: &FilterSet) -> Result<()> {
    match (filters.min_length, filters.max_length) {
        (Some(min_length), Some(max_length)) if min_length > max_length => Err(Error::Conflict {
            min_length,
            max_length,
        }),
        _ => Ok(()),
    }
}

fn has_any(terms: &[String], words: &[&str]) -> bool {
    terms.iter().any(|t| words.contains(&t.as_str()))
}

fn has_phrase(terms: &[String], phrase: &[&str]) -> bool {
    terms
        .windows(phrase.len())
        .any(|w| w.iter().zip(phrase).all(|(t, p)| t == p))
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(n: f64) -> i64 {
    n as i64
}
