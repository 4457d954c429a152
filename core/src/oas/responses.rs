#![deny(missing_docs)]

//! # Responses
//!
//! Builds the Responses Object for the prediction call.

use crate::descriptor::{ResponseMediaType, ResponseSpec};
use serde_json::{json, Map, Value};

/// Description attached to the single success response.
pub const SUCCESS_DESCRIPTION: &str = "successful operation";

/// Schema `type` for a response media type.
///
/// Only the media type decides this; `response.type` and `response.field`
/// are carried in the descriptor for the test runner.
pub fn response_schema_type(media_type: ResponseMediaType) -> &'static str {
    match media_type {
        ResponseMediaType::TextPlain => "integer",
        ResponseMediaType::ApplicationJson => "object",
    }
}

/// Builds `responses` keyed by the stringified status code.
pub fn build_responses(response: &ResponseSpec) -> Value {
    let mut responses = Map::new();
    responses.insert(
        response.status_code.to_string(),
        json!({
            "description": SUCCESS_DESCRIPTION,
            "content": {
                response.media_type.as_str(): {
                    "schema": { "type": response_schema_type(response.media_type) }
                }
            }
        }),
    );
    Value::Object(responses)
}
