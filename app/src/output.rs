//! JSON rendering for command output.

use lexis_core::Error;
use serde::Serialize;
use serde_json::json;

pub fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// `{"error": ..., "kind": ..., "status": ...}` for a core error.
pub fn render_error(err: &Error, pretty: bool) -> anyhow::Result<String> {
    render(
        &json!({
            "error": err.to_string(),
            "kind": err.kind(),
            "status": err.status_code(),
        }),
        pretty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_error_shape() {
        let Ok(text) = render_error(&Error::Parse("??".into()), false) else {
            panic!("error should render");
        };
        assert_eq!(
            text,
            r#"{"error":"Unable to parse natural language query","kind":"parse","status":400}"#
        );
    }
}
