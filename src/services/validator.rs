// src/services/validator.rs
use serde_json::Value;

use crate::{error::AppError, message::ChatRequest};

pub const NO_MESSAGE: &str = "No message provided";

/// Accepts only a JSON object whose `message` is a non-blank string.
/// Arrays, scalars and objects without such a field are a 400.
pub fn validate_request(body: &Value) -> Result<ChatRequest, AppError> {
    let message = body.as_object().and_then(|map| map.get("message"));
    match message {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(ChatRequest {
            message: text.trim().to_string(),
        }),
        _ => Err(AppError::BadRequest(NO_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_and_trims_text() {
        let request = validate_request(&json!({ "message": "  hello there \n" })).unwrap();
        assert_eq!(request.message, "hello there");
    }

    #[test]
    fn ignores_unknown_fields() {
        let request = validate_request(&json!({ "message": "hi", "extra": 1 })).unwrap();
        assert_eq!(request.message, "hi");
    }

    #[test]
    fn rejects_missing_blank_and_non_string() {
        for bad in [
            json!({}),
            json!({ "message": "" }),
            json!({ "message": "   " }),
            json!({ "message": 42 }),
            json!({ "message": null }),
        ] {
            assert!(matches!(validate_request(&bad), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn rejects_bodies_that_are_not_objects() {
        for bad in [
            json!(["message"]),
            json!(["what is your name"]),
            json!("what is your name"),
            json!(null),
        ] {
            assert!(
                matches!(validate_request(&bad), Err(AppError::BadRequest(_))),
                "{bad}"
            );
        }
    }
}
