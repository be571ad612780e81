use ranker_core::Results;
use serde_json::{Map, Value};

use crate::{ScoreError, ScoreErrorKind};

/// Keys the service may use for a structured error message, in priority order.
const MESSAGE_KEYS: [&str; 3] = ["error", "message", "detail"];

/// Turns a complete HTTP exchange into results or a user-facing error.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Results, ScoreError> {
    if !(200..300).contains(&status) {
        let message =
            failure_message_from_body(body).unwrap_or_else(|| format!("HTTP status {status}"));
        return Err(ScoreError::new(ScoreErrorKind::HttpStatus(status), message));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ScoreError::new(
            ScoreErrorKind::MalformedBody,
            "The scoring service returned an empty response",
        ));
    }

    serde_json::from_slice(body).map_err(|err| {
        let message = structured_message(body).unwrap_or_else(|| {
            format!("The scoring service returned an unreadable response: {err}")
        });
        ScoreError::new(ScoreErrorKind::MalformedBody, message)
    })
}

/// The `error`/`message`/`detail` string of a JSON object body, if any.
fn structured_message(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => message_field(&map),
        _ => None,
    }
}

fn message_field(map: &Map<String, Value>) -> Option<String> {
    MESSAGE_KEYS.iter().find_map(|key| match map.get(*key) {
        Some(Value::String(message)) => Some(message.clone()),
        _ => None,
    })
}

/// Message carried by an error body: the structured message field when the
/// body is JSON, otherwise the raw text. `None` for an empty body.
pub fn failure_message_from_body(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(text) {
        Ok(Value::String(message)) => message,
        Ok(Value::Object(map)) => {
            message_field(&map).unwrap_or_else(|| Value::Object(map).to_string())
        }
        Ok(other) => other.to_string(),
        Err(_) => text.to_string(),
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::{failure_message_from_body, interpret_response};
    use crate::ScoreErrorKind;

    #[test]
    fn structured_error_uses_message_field() {
        let body = br#"{"error": "Provide job_description field"}"#;
        assert_eq!(
            failure_message_from_body(body).as_deref(),
            Some("Provide job_description field")
        );
        let body = br#"{"detail": "Method not allowed"}"#;
        assert_eq!(failure_message_from_body(body).as_deref(), Some("Method not allowed"));
    }

    #[test]
    fn structured_error_without_message_is_shown_as_json() {
        let body = br#"{"code": 17}"#;
        assert_eq!(failure_message_from_body(body).as_deref(), Some(r#"{"code":17}"#));
    }

    #[test]
    fn plain_text_error_is_kept() {
        let body = b"Internal Server Error\n";
        assert_eq!(
            failure_message_from_body(body).as_deref(),
            Some("Internal Server Error")
        );
        assert_eq!(failure_message_from_body(b"  \n"), None);
    }

    #[test]
    fn error_status_without_body_names_the_status() {
        let err = interpret_response(502, b"").unwrap_err();
        assert_eq!(err.kind, ScoreErrorKind::HttpStatus(502));
        assert_eq!(err.message, "HTTP status 502");
    }

    #[test]
    fn success_with_garbage_is_malformed() {
        let err = interpret_response(200, b"<html>oops</html>").unwrap_err();
        assert_eq!(err.kind, ScoreErrorKind::MalformedBody);
        let err = interpret_response(200, b"").unwrap_err();
        assert_eq!(err.kind, ScoreErrorKind::MalformedBody);
    }

    #[test]
    fn success_status_with_error_body_keeps_its_message() {
        let err =
            interpret_response(200, br#"{"error": "Provide job_description field"}"#).unwrap_err();
        assert_eq!(err.kind, ScoreErrorKind::MalformedBody);
        assert_eq!(err.message, "Provide job_description field");
    }

    #[test]
    fn success_status_without_results_shape_is_malformed() {
        let bodies: [&[u8]; 3] = [b"{}", br#"{"keywords": ["go"]}"#, br#"{"results": []}"#];
        for body in bodies {
            let err = interpret_response(200, body).unwrap_err();
            assert_eq!(err.kind, ScoreErrorKind::MalformedBody);
            assert!(err.message.starts_with("The scoring service returned an unreadable response"));
        }
    }

    #[test]
    fn success_body_decodes() {
        let body = br#"{"keywords": ["go"], "results": [{"filename": "r1.pdf", "score": 12.5}]}"#;
        let results = interpret_response(200, body).expect("results");
        assert_eq!(results.keywords, vec!["go"]);
        assert_eq!(results.entries[0].score, 12.5);
        assert!(results.entries[0].parsed.is_none());
    }
}
