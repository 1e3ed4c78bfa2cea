//! The five operations callers use: analyze, get, list (structured or
//! natural-language) and delete, over an owned store.

use serde_json::Value;

use crate::analyzer::fingerprint;
use crate::entry::StringEntry;
use crate::error::{Error, Result};
use crate::filter::{FilterSet, FilteredList, RawFilters};
use crate::nlp::{LexicalTagger, Tagger};
use crate::store::{EntryStore, MemoryStore};
use crate::translator::{InterpretedQuery, NaturalLanguageList, Translator, check_conflict};

/// Entry point of the core. Owns its store; clone the store beforehand to
/// share one collection between several services.
#[derive(Debug, Clone, Default)]
pub struct StringService<S = MemoryStore, T = LexicalTagger> {
    store: S,
    translator: Translator<T>,
}

impl StringService {
    /// Service over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }
}

impl<S: EntryStore> StringService<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            translator: Translator::new(),
        }
    }
}

impl<S: EntryStore, T: Tagger> StringService<S, T> {
    #[must_use]
    pub const fn with_translator(store: S, translator: Translator<T>) -> Self {
        Self { store, translator }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator<T> {
        &self.translator
    }

    /// Analyze and store a submitted JSON value.
    ///
    /// Absent, `null` and empty-string values are rejected as missing; any
    /// other non-string value as not a string.
    pub fn submit(&self, value: Option<&Value>) -> Result<StringEntry> {
        match value {
            None | Some(Value::Null) => Err(Error::MissingValue),
            Some(Value::String(s)) => self.analyze(s),
            Some(other) => Err(Error::NotAString(other.to_string())),
        }
    }

    /// Analyze and store `value`.
    pub fn analyze(&self, value: &str) -> Result<StringEntry> {
        if value.is_empty() {
            return Err(Error::MissingValue);
        }
        let entry = StringEntry::new(value);
        self.store.insert(entry.clone())?;
        Ok(entry)
    }

    /// Look up by raw value: the argument is always hashed.
    pub fn get(&self, value: &str) -> Result<StringEntry> {
        self.get_by_fingerprint(&fingerprint(value))
    }

    pub fn get_by_fingerprint(&self, fp: &str) -> Result<StringEntry> {
        self.store
            .find_by_fingerprint(fp)?
            .ok_or_else(|| Error::NotFound(fp.to_string()))
    }

    pub fn list_all(&self) -> Result<Vec<StringEntry>> {
        self.store.all()
    }

    /// Validate `raw` and return the matching entries with the typed
    /// filters that were applied.
    ///
    /// Inverted length bounds are not rejected here; they yield an empty
    /// list.
    pub fn list_filtered(&self, raw: &RawFilters) -> Result<FilteredList> {
        let filters = FilterSet::parse(raw)?;
        let data = filters.apply(self.store.all()?);
        Ok(FilteredList::new(data, filters))
    }

    /// Translate `query` into filters and apply them.
    ///
    /// Fails with [`Error::Parse`] when nothing was recognised and with
    /// [`Error::Conflict`] when the derived length bounds contradict each
    /// other.
    pub fn list_by_natural_language(&self, query: &str) -> Result<NaturalLanguageList> {
        let filters = self.translator.interpret(query)?;
        let data = filters.apply(self.store.all()?);
        check_conflict(&filters)?;

        Ok(NaturalLanguageList {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: filters,
            },
        })
    }

    /// Remove by raw value: the argument is always hashed.
    pub fn delete(&self, value: &str) -> Result<()> {
        let fp = fingerprint(value);
        if self.store.delete_by_fingerprint(&fp)? {
            Ok(())
        } else {
            Err(Error::NotFound(fp))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded(values: &[&str]) -> StringService {
        let service = StringService::in_memory();
        for v in values {
            assert!(service.analyze(v).is_ok(), "seed {v:?}");
        }
        service
    }

    #[test]
    fn submit_rejects_missing_and_non_strings() {
        let service = StringService::in_memory();
        assert_eq!(service.submit(None), Err(Error::MissingValue));
        assert_eq!(service.submit(Some(&Value::Null)), Err(Error::MissingValue));
        assert_eq!(service.submit(Some(&json!(""))), Err(Error::MissingValue));
        assert_eq!(
            service.submit(Some(&json!(42))),
            Err(Error::NotAString("42".to_string()))
        );
        assert!(service.submit(Some(&json!("ok"))).is_ok());
    }

    #[test]
    fn whitespace_only_value_is_accepted() {
        let service = StringService::in_memory();
        let Ok(entry) = service.analyze("   ") else {
            panic!("whitespace is a value");
        };
        assert_eq!(entry.properties.word_count, 1);
    }

    #[test]
    fn second_submission_is_duplicate() {
        let service = seeded(&["twice"]);
        assert!(matches!(service.analyze("twice"), Err(Error::Duplicate(_))));
        assert!(service.analyze("Twice").is_ok());
    }

    #[test]
    fn get_by_value_or_fingerprint() {
        let service = seeded(&["hello"]);
        let Ok(by_value) = service.get("hello") else {
            panic!("lookup by value");
        };
        let Ok(by_id) = service.get_by_fingerprint(&by_value.fingerprint) else {
            panic!("lookup by fingerprint");
        };
        assert_eq!(by_value, by_id);
        assert!(matches!(service.get("missing"), Err(Error::NotFound(_))));
    }

    #[test]
    fn hex_valued_entry_does_not_shadow_its_namesake() {
        let hex = fingerprint("hello");
        let service = seeded(&["hello", &hex]);

        let Ok(fetched) = service.get(&hex) else {
            panic!("hex value is stored");
        };
        assert_eq!(fetched.value, hex);

        assert!(service.delete(&hex).is_ok());
        assert!(service.get("hello").is_ok());
        assert!(matches!(service.get(&hex), Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let service = seeded(&["bye"]);
        assert!(service.delete("bye").is_ok());
        assert!(matches!(service.get("bye"), Err(Error::NotFound(_))));
        assert!(matches!(service.delete("bye"), Err(Error::NotFound(_))));
    }

    #[test]
    fn natural_language_conflict_is_an_error() {
        let service = seeded(&["abc"]);
        let result = service.list_by_natural_language("longer than 5 and shorter than 20");
        assert_eq!(
            result,
            Err(Error::Conflict {
                min_length: 6,
                max_length: 4
            })
        );
    }

    #[test]
    fn structured_inverted_bounds_are_empty_not_error() {
        let service = seeded(&["abc", "abcdef"]);
        let mut raw = RawFilters::default();
        raw.set("min_length", "6");
        raw.set("max_length", "4");
        let Ok(list) = service.list_filtered(&raw) else {
            panic!("structured path does not reject inverted bounds");
        };
        assert_eq!(list.count, 0);
        assert_eq!(list.filters_applied.min_length, Some(6));
    }
}
