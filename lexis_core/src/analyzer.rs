//! Pure functions deriving [`Properties`] from a raw string.

use std::collections::{BTreeMap, HashSet};

use sha2::{Digest, Sha256};

use crate::entry::Properties;

/// Compute every derived property of `value`.
#[must_use]
pub fn analyze(value: &str) -> Properties {
    let cleaned = clean(value);
    Properties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(&cleaned),
        unique_characters: unique_characters(&cleaned),
        word_count: word_count(value),
        fingerprint: fingerprint(value),
        character_frequency_map: character_frequency_map(&cleaned),
    }
}

/// Hex-encoded SHA-256 of the raw value.
#[must_use]
pub fn fingerprint(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Lowercase, then keep only ASCII letters and digits.
#[must_use]
pub fn clean(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// `cleaned` reads the same in both directions. Empty input counts.
fn is_palindrome(cleaned: &str) -> bool {
    // cleaned is pure ASCII, so byte reversal is character reversal
    cleaned.bytes().eq(cleaned.bytes().rev())
}

fn unique_characters(cleaned: &str) -> usize {
    cleaned.chars().collect::<HashSet<_>>().len()
}

/// Tokens of the trimmed raw value split on whitespace runs.
///
/// Empty or all-whitespace input still reports one word: splitting an empty
/// string yields a single empty token.
fn word_count(value: &str) -> usize {
    value.split_whitespace().count().max(1)
}

fn character_frequency_map(cleaned: &str) -> BTreeMap<char, usize> {
    let mut map = BTreeMap::new();
    for c in cleaned.chars() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_properties() {
        let props = analyze("hello");
        assert_eq!(props.length, 5);
        assert_eq!(props.unique_characters, 4);
        assert_eq!(props.word_count, 1);
        assert!(!props.is_palindrome);
        let expected: BTreeMap<char, usize> =
            [('h', 1), ('e', 1), ('l', 2), ('o', 1)].into_iter().collect();
        assert_eq!(props.character_frequency_map, expected);
    }

    #[test]
    fn panama_is_palindrome_over_cleaned_form() {
        let props = analyze("A man a plan a canal Panama");
        assert!(props.is_palindrome);
        assert_eq!(props.word_count, 7);
        assert_eq!(props.length, 27);
    }

    #[test]
    fn length_counts_raw_characters_including_punctuation() {
        let props = analyze("  Hi, there!  ");
        assert_eq!(props.length, 14);
        assert_eq!(props.word_count, 2);
        assert_eq!(clean("  Hi, there!  "), "hithere");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert_eq!(analyze("héllo").length, 5);
    }

    #[test]
    fn empty_and_whitespace_input_report_one_word() {
        assert_eq!(analyze("").word_count, 1);
        assert_eq!(analyze("   \t\n ").word_count, 1);
    }

    #[test]
    fn empty_cleaned_string_is_palindrome() {
        let props = analyze("?!,");
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 0);
        assert!(props.character_frequency_map.is_empty());
    }

    #[test]
    fn digits_survive_cleaning() {
        let props = analyze("12-21");
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 2);
    }

    #[test]
    fn palindrome_is_reversal_invariant() {
        for s in ["Was it a car or a cat I saw?", "hello world", "No lemon, no melon", "ab"] {
            let reversed: String = clean(s).chars().rev().collect();
            assert_eq!(analyze(s).is_palindrome, analyze(&reversed).is_palindrome);
        }
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        assert_eq!(
            fingerprint("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(fingerprint("Hello").len(), 64);
        assert_ne!(fingerprint("Hello"), fingerprint("hello"));
    }
}
