use lexis_config::Config;
use lexis_core::{InterpretedQuery, Translator, check_conflict};
use tracing::warn;

use crate::output::{render, render_error};

/// Strategy for showing how a natural-language query is translated.
#[derive(Debug, Clone, Copy)]
pub struct InterpretStrategy;

impl super::CommandStrategy for InterpretStrategy {
    type Input = (Config, String);

    async fn execute(&self, (config, query): Self::Input) -> anyhow::Result<()> {
        let pretty = config.output.pretty;
        let interpreted = Translator::new()
            .interpret(&query)
            .and_then(|filters| check_conflict(&filters).map(|()| filters));
        match interpreted {
            Ok(parsed_filters) => {
                let interpreted = InterpretedQuery {
                    original: query,
                    parsed_filters,
                };
                println!("{}", render(&interpreted, pretty)?);
            }
            Err(e) => {
                warn!("Query not understood: {e}");
                println!("{}", render_error(&e, pretty)?);
            }
        }
        Ok(())
    }
}
