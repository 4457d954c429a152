#![deny(missing_docs)]

//! # OpenAPI Generation
//!
//! Turns a [`ModelApiDescriptor`] into an OpenAPI 3.0.3 document describing
//! how to call the model endpoint.
//!
//! - **url**: URL decomposition and placeholder extraction.
//! - **params**: Header, path and query Parameter Objects; style/explode defaults.
//! - **security**: `authType` -> security scheme mapping.
//! - **body**: Request Body Object for form-encoded inputs.
//! - **responses**: Responses Object.

pub mod body;
pub mod params;
pub mod responses;
pub mod security;
pub mod url;

use crate::descriptor::ModelApiDescriptor;
use crate::error::AppResult;
use serde_json::{json, Map, Value};
use tracing::debug;

pub use params::ParamLocation;
pub use url::{extract_path_placeholders, parse_model_url, ParsedModelUrl};

/// Version written to the `openapi` field.
pub const OPENAPI_VERSION: &str = "3.0.3";
/// Fixed `info.title`.
pub const INFO_TITLE: &str = "API-Based Testing";
/// Fixed `info.version`.
pub const INFO_VERSION: &str = "1.0.0";

/// Builds the OpenAPI document for a model API descriptor.
///
/// The result has one server (the URL base), at most one security scheme and
/// a single path item holding one operation keyed by the lower-cased method.
/// Parameters are ordered headers, then path parameters in placeholder order,
/// then query parameters in declaration order.
///
/// # Errors
///
/// * `AppError::MalformedUrl` - `url` + `urlParams` is not `http(s)://host[:port][/path][?query]`.
/// * `AppError::UndeclaredPathParameter` - a path placeholder has no `pathParams` entry.
pub fn build_model_api_spec(descriptor: &ModelApiDescriptor) -> AppResult<Value> {
    let parsed = parse_model_url(&descriptor.full_url())?;
    debug!(base = %parsed.base, path = %parsed.path, "parsed model url");

    let mut doc = Map::new();
    doc.insert("openapi".to_string(), json!(OPENAPI_VERSION));
    doc.insert(
        "info".to_string(),
        json!({ "title": INFO_TITLE, "version": INFO_VERSION }),
    );
    doc.insert("servers".to_string(), json!([{ "url": parsed.base }]));

    let mut operation = Map::new();
    operation.insert(
        "responses".to_string(),
        responses::build_responses(&descriptor.response),
    );

    security::apply_security(&descriptor.auth_type, &mut doc, &mut operation);

    let mut parameters: Vec<Value> = descriptor
        .additional_headers
        .iter()
        .map(params::build_header_parameter)
        .collect();

    let placeholders = extract_path_placeholders(&parsed.path);
    parameters.extend(params::build_path_parameters(
        &placeholders,
        &descriptor.parameters.path_params,
    )?);

    parameters.extend(
        descriptor
            .parameters
            .query_params
            .iter()
            .map(|p| params::build_parameter(p, ParamLocation::Query)),
    );
    debug!(count = parameters.len(), "collected parameters");
    operation.insert("parameters".to_string(), Value::Array(parameters));

    if let Some(body) = descriptor.active_request_body() {
        operation.insert(
            "requestBody".to_string(),
            body::build_request_body(body),
        );
    }

    let mut path_item = Map::new();
    path_item.insert(
        descriptor.method.as_lowercase().to_string(),
        Value::Object(operation),
    );
    let mut paths = Map::new();
    paths.insert(parsed.path, Value::Object(path_item));
    doc.insert("paths".to_string(), Value::Object(paths));

    Ok(Value::Object(doc))
}
