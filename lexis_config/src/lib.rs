mod schema;

pub use schema::{Config, LoggingConfig, OutputConfig, StoreConfig};
