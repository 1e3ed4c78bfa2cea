//! Lightweight term and number extraction for natural-language queries.
//!
//! [`Tagger`] is the seam the query translator depends on, so the rule set
//! can be exercised with any tokenizer. [`LexicalTagger`] is the built-in
//! implementation: whitespace terms with edge punctuation stripped, and
//! numbers written either as digits or as English cardinal words.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_TERM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[-+]?\d+(?:,\d{3})*(?:\.\d+)?$").ok());

/// Tokenizer contract used by [`crate::Translator`].
pub trait Tagger: Send + Sync {
    /// Terms of `text` in order of appearance.
    fn terms(&self, text: &str) -> Vec<String>;

    /// Numeric values found in `text`, in order of appearance.
    fn numbers(&self, text: &str) -> Vec<f64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalTagger;

impl LexicalTagger {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Tagger for LexicalTagger {
    fn terms(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| !(c.is_alphanumeric() || c == '-' || c == '+')))
            .map(|t| t.trim_end_matches(['-', '+']))
            .filter(|t| t.chars().any(char::is_alphanumeric))
            .map(str::to_lowercase)
            .collect()
    }

    fn numbers(&self, text: &str) -> Vec<f64> {
        let mut out = Vec::new();
        // a tens word waiting for a possible unit ("twenty" ... "one")
        let mut pending_tens: Option<u32> = None;

        for term in self.terms(text) {
            if let Some(n) = parse_numeric(&term) {
                flush(&mut pending_tens, &mut out);
                out.push(n);
                continue;
            }

            let mut parts = term.split('-');
            let value = match (parts.next(), parts.next(), parts.next()) {
                (Some(tens), Some(unit), None) => match (tens_value(tens), unit_value(unit)) {
                    (Some(t), Some(u)) if (1..10).contains(&u) => Some(Word::Whole(t + u)),
                    _ => None,
                },
                (Some(word), None, None) => tens_value(word)
                    .map(Word::Tens)
                    .or_else(|| unit_value(word).map(Word::Unit)),
                _ => None,
            };

            match value {
                Some(Word::Unit(u)) => match pending_tens.take() {
                    Some(t) if (1..10).contains(&u) => out.push(f64::from(t + u)),
                    Some(t) => {
                        out.push(f64::from(t));
                        out.push(f64::from(u));
                    }
                    None => out.push(f64::from(u)),
                },
                Some(Word::Tens(t)) => {
                    flush(&mut pending_tens, &mut out);
                    pending_tens = Some(t);
                }
                Some(Word::Whole(n)) => {
                    flush(&mut pending_tens, &mut out);
                    out.push(f64::from(n));
                }
                None => flush(&mut pending_tens, &mut out),
            }
        }
        flush(&mut pending_tens, &mut out);
        out
    }
}

enum Word {
    Unit(u32),
    Tens(u32),
    Whole(u32),
}

fn flush(pending: &mut Option<u32>, out: &mut Vec<f64>) {
    if let Some(t) = pending.take() {
        out.push(f64::from(t));
    }
}

fn parse_numeric(term: &str) -> Option<f64> {
    let re = NUMERIC_TERM.as_ref()?;
    if !re.is_match(term) {
        return None;
    }
    term.replace(',', "").parse().ok()
}

fn unit_value(word: &str) -> Option<u32> {
    const UNITS: [&str; 20] = [
        "zero",
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ];
    UNITS
        .iter()
        .position(|u| *u == word)
        .and_then(|i| u32::try_from(i).ok())
}

fn tens_value(word: &str) -> Option<u32> {
    let tens = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(tens)
}
