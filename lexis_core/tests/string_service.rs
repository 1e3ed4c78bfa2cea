//! End-to-end behaviour of the string service over its public API.
//!
//! These tests verify that:
//! - analyzed properties survive storage unchanged
//! - structured and natural-language listings share predicate semantics
//! - the two listing paths differ on contradictory length bounds

use lexis_core::{Error, FilterSet, MemoryStore, RawFilters, StringService};

fn service_with(values: &[&str]) -> StringService {
    let service = StringService::in_memory();
    for v in values {
        if let Err(e) = service.analyze(v) {
            panic!("failed to seed {v:?}: {e}");
        }
    }
    service
}

fn raw(pairs: &[(&str, &str)]) -> RawFilters {
    let mut raw = RawFilters::default();
    for (k, v) in pairs {
        raw.set(k, *v);
    }
    raw
}

fn values_of(entries: &[lexis_core::StringEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.value.as_str()).collect()
}

const CORPUS: &[&str] = &[
    "racecar",
    "A man a plan a canal Panama",
    "hello world",
    "level",
    "Zebra",
    "noon",
    "a",
    "This is a longer sentence",
];

#[test]
fn analyze_then_get_agree() {
    let service = StringService::in_memory();
    let Ok(created) = service.analyze("Was it a car or a cat I saw?") else {
        panic!("analyze should succeed");
    };
    let Ok(fetched) = service.get("Was it a car or a cat I saw?") else {
        panic!("get should find the entry");
    };
    assert_eq!(created, fetched);
    assert!(fetched.properties.is_palindrome);
    assert_eq!(fetched.properties.fingerprint, fetched.fingerprint);
}

#[test]
fn duplicate_value_rejected() {
    let service = service_with(&["same"]);
    let Err(Error::Duplicate(fp)) = service.analyze("same") else {
        panic!("expected duplicate");
    };
    assert_eq!(fp, lexis_core::fingerprint("same"));
    assert_eq!(service.list_all().map(|all| all.len()), Ok(1));
}

#[test]
fn structured_filters_echo_typed_values() {
    let service = service_with(CORPUS);
    let Ok(list) = service.list_filtered(&raw(&[
        ("is_palindrome", "true"),
        ("min_length", "4"),
        ("word_count", "1"),
    ])) else {
        panic!("filters are valid");
    };
    assert_eq!(values_of(&list.data), ["racecar", "level", "noon"]);
    assert_eq!(list.count, 3);
    assert_eq!(
        list.filters_applied,
        FilterSet {
            is_palindrome: Some(true),
            min_length: Some(4),
            word_count: Some(1),
            ..FilterSet::default()
        }
    );

    let json = serde_json::to_value(&list).unwrap_or_default();
    assert_eq!(json["filters_applied"]["is_palindrome"], true);
    assert_eq!(json["filters_applied"]["min_length"], 4);
    assert!(json["filters_applied"].get("max_length").is_none());
}

#[test]
fn invalid_structured_filters_apply_nothing() {
    let service = service_with(CORPUS);
    let result = service.list_filtered(&raw(&[
        ("min_length", "3"),
        ("contains_character", "xy"),
    ]));
    assert!(matches!(result, Err(Error::Validation(ref problems)) if problems.len() == 1));
}

#[test]
fn structured_inverted_bounds_return_empty() {
    let service = service_with(CORPUS);
    let Ok(list) = service.list_filtered(&raw(&[("min_length", "10"), ("max_length", "3")])) else {
        panic!("structured path accepts inverted bounds");
    };
    assert!(list.data.is_empty());
    assert_eq!(list.count, 0);
}

#[test]
fn natural_language_longer_than() {
    let service = service_with(CORPUS);
    let Ok(list) = service.list_by_natural_language("strings longer than 5 characters") else {
        panic!("query should parse");
    };
    assert_eq!(
        list.interpreted_query.parsed_filters,
        FilterSet {
            min_length: Some(6),
            ..FilterSet::default()
        }
    );
    assert_eq!(list.interpreted_query.original, "strings longer than 5 characters");
    assert!(list.data.iter().all(|e| e.properties.length >= 6));
    assert_eq!(list.count, list.data.len());
}

#[test]
fn natural_language_combined_rules() {
    let service = service_with(CORPUS);
    let Ok(list) = service.list_by_natural_language("single word palindrome shorter than 3") else {
        panic!("query should parse");
    };
    let filters = &list.interpreted_query.parsed_filters;
    assert_eq!(filters.is_palindrome, Some(true));
    assert_eq!(filters.word_count, Some(1));
    assert_eq!(filters.max_length, Some(2));
    assert_eq!(values_of(&list.data), ["a"]);

    let json = serde_json::to_value(&list).unwrap_or_default();
    assert_eq!(json["interpreted_query"]["parsed_filters"]["max_length"], 2);
}

#[test]
fn natural_language_letter_matches_case_insensitively() {
    let service = service_with(CORPUS);
    let Ok(list) = service.list_by_natural_language("strings containing the letter z") else {
        panic!("query should parse");
    };
    assert_eq!(values_of(&list.data), ["Zebra"]);
}

#[test]
fn natural_language_unparsable() {
    let service = service_with(CORPUS);
    let result = service.list_by_natural_language("gibberish with no recognizable pattern");
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn natural_language_conflict() {
    let service = service_with(CORPUS);
    let result = service.list_by_natural_language("longer than 8 but shorter than 8");
    let Err(Error::Conflict {
        min_length,
        max_length,
    }) = result
    else {
        panic!("expected conflict");
    };
    assert_eq!((min_length, max_length), (9, 7));
}

#[test]
fn services_can_share_a_store() {
    let store = MemoryStore::new();
    let writer = StringService::new(store.clone());
    let reader = StringService::new(store);

    assert!(writer.analyze("shared").is_ok());
    assert!(reader.get("shared").is_ok());
    assert!(reader.delete("shared").is_ok());
    assert!(matches!(writer.get("shared"), Err(Error::NotFound(_))));
}

#[test]
fn entry_json_shape() {
    let service = StringService::in_memory();
    let Ok(entry) = service.analyze("hello") else {
        panic!("analyze should succeed");
    };
    let json = serde_json::to_value(&entry).unwrap_or_default();
    for key in ["id", "value", "properties", "created_at"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    let props = &json["properties"];
    assert_eq!(props["unique_characters"], 4);
    assert_eq!(props["word_count"], 1);
    assert_eq!(props["is_palindrome"], false);
    assert_eq!(props["character_frequency_map"]["h"], 1);
    assert_eq!(props["character_frequency_map"]["l"], 2);
}
