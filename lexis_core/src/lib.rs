#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! String analysis store: derives properties from submitted strings, keeps
//! them in an in-memory collection, and filters that collection either with
//! typed parameters or with a heuristic natural-language query.

pub mod analyzer;
pub mod entry;
mod error;
pub mod filter;
pub mod nlp;
pub mod service;
pub mod store;
pub mod translator;

pub use analyzer::{analyze, clean, fingerprint};
pub use entry::{Properties, StringEntry};
pub use error::{Error, Result};
pub use filter::{FilterSet, FilteredList, RawFilters};
pub use nlp::{LexicalTagger, Tagger};
pub use service::StringService;
pub use store::{EntryStore, MemoryStore};
pub use translator::{InterpretedQuery, NaturalLanguageList, Translator, check_conflict};
