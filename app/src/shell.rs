//! Line-oriented front end over a [`StringService`].
//!
//! Each line is one request; each reply is one JSON document using the
//! same field names as the service's serialized results.

use std::io::{BufRead, Write};

use lexis_core::{InterpretedQuery, RawFilters, StringService, check_conflict};
use serde_json::json;
use tracing::{info, warn};

use crate::output::{render, render_error};

const HELP: &str = "\
commands:
  add <value>             analyze and store a string
  get <value>             show a stored string
  get-id <id>             show a stored string by its id
  list [key=value]...     list strings, optionally filtered
                          (is_palindrome, min_length, max_length,
                           word_count, contains_character)
  query <text>            list strings matching a natural-language query
  interpret <text>        show the filters a query translates to
  delete <value>          remove a stored string
  help                    show this message
  exit                    leave the shell";

/// What the shell should do after handling a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Nothing,
    Exit,
}

pub struct Shell {
    service: StringService,
    pretty: bool,
}

impl Shell {
    #[must_use]
    pub const fn new(service: StringService, pretty: bool) -> Self {
        Self { service, pretty }
    }

    #[must_use]
    pub const fn service(&self) -> &StringService {
        &self.service
    }

    /// Analyze `values` into the store, skipping ones already present.
    pub fn seed<'a>(&self, values: impl IntoIterator<Item = &'a str>) {
        for value in values {
            match self.service.analyze(value) {
                Ok(entry) => info!("Seeded {:?} as {}", entry.value, entry.fingerprint),
                Err(e) => warn!("Skipped seed value {value:?}: {e}"),
            }
        }
    }

    /// Prompt on `output`, read lines from `input` until EOF or `exit`.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> anyhow::Result<()> {
        writeln!(output, "lexis shell started. Type 'help' for commands, 'exit' to quit.\n")?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            match self.handle(&line?)? {
                Reply::Text(text) => writeln!(output, "{text}")?,
                Reply::Nothing => {}
                Reply::Exit => break,
            }
        }

        Ok(())
    }

    /// Handle one input line.
    pub fn handle(&self, line: &str) -> anyhow::Result<Reply> {
        let line = line.trim_start();
        // `add` keeps its argument verbatim past the single separator
        let (command, verbatim) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = verbatim.trim();

        let result = match command {
            "" => return Ok(Reply::Nothing),
            "exit" | "quit" => return Ok(Reply::Exit),
            "help" => return Ok(Reply::Text(HELP.to_string())),
            "add" => self.service.analyze(verbatim).map(serde_json::to_value),
            "get" => self.service.get(rest).map(serde_json::to_value),
            "get-id" => self
                .service
                .get_by_fingerprint(rest)
                .map(serde_json::to_value),
            "list" => match parse_filters(rest) {
                Ok(raw) => self.service.list_filtered(&raw).map(serde_json::to_value),
                Err(unknown) => {
                    return Ok(Reply::Text(render(
                        &json!({ "error": format!("Unknown filter: {unknown}") }),
                        self.pretty,
                    )?));
                }
            },
            "query" => self
                .service
                .list_by_natural_language(rest)
                .map(serde_json::to_value),
            "interpret" => self
                .service
                .translator()
                .interpret(rest)
                .and_then(|parsed_filters| {
                    check_conflict(&parsed_filters).map(|()| parsed_filters)
                })
                .map(|parsed_filters| {
                    serde_json::to_value(InterpretedQuery {
                        original: rest.to_string(),
                        parsed_filters,
                    })
                }),
            "delete" => self
                .service
                .delete(rest)
                .map(|()| Ok(json!({ "deleted": rest }))),
            other => {
                return Ok(Reply::Text(render(
                    &json!({ "error": format!("Unknown command: {other}. Type 'help'.") }),
                    self.pretty,
                )?));
            }
        };

        let text = match result {
            Ok(value) => {
                info!("{command} succeeded");
                render(&value?, self.pretty)?
            }
            Err(e) => {
                warn!("{command} failed: {e}");
                render_error(&e, self.pretty)?
            }
        };
        Ok(Reply::Text(text))
    }
}

/// `key=value` pairs into raw filters. Returns the first unknown key or
/// malformed pair as the error.
fn parse_filters(args: &str) -> Result<RawFilters, String> {
    let mut raw = RawFilters::default();
    for pair in args.split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(pair.to_string());
        };
        if !raw.set(key, value) {
            return Err(key.to_string());
        }
    }
    Ok(raw)
}
