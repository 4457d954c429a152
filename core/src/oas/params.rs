#![deny(missing_docs)]

//! # Parameter Objects
//!
//! Builds OpenAPI Parameter Objects for headers, path and query parameters,
//! and the shared value schema used by request body properties.
//!
//! Style/explode defaults are resolved here and nowhere else:
//!
//! | location     | style    | explode |
//! |--------------|----------|---------|
//! | path         | `simple` | `false` |
//! | query / body | `form`   | `true`  |

use crate::descriptor::{AdditionalHeader, DataType, ModelApiParameter, ParamStyle, ValueSchema};
use crate::error::{AppError, AppResult};
use serde_json::{json, Map, Value};

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// URL path segment.
    Path,
    /// URL query string. Form-encoded body fields follow the same rules.
    Query,
}

impl ParamLocation {
    /// The OpenAPI `in` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
        }
    }

    /// Style applied when the descriptor leaves it out.
    pub fn default_style(&self) -> ParamStyle {
        match self {
            ParamLocation::Path => ParamStyle::Simple,
            ParamLocation::Query => ParamStyle::Form,
        }
    }

    /// Explode flag applied when the descriptor leaves it out or sends a non-boolean.
    pub fn default_explode(&self) -> bool {
        match self {
            ParamLocation::Path => false,
            ParamLocation::Query => true,
        }
    }
}

/// Explicit style, else the location default.
pub fn resolve_style(location: ParamLocation, value: &ValueSchema) -> ParamStyle {
    value.style.unwrap_or_else(|| location.default_style())
}

/// Explicit explode flag, else the location default.
pub fn resolve_explode(location: ParamLocation, value: &ValueSchema) -> bool {
    value
        .explode
        .unwrap_or_else(|| location.default_explode())
}

/// Builds the `schema` object for a declared type.
///
/// Arrays carry `items.type`. Objects carry `properties.type` set to the
/// element type name, the flat shape consumers of the generated document
/// already depend on.
pub fn build_type_schema(data_type: &DataType) -> Value {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!(data_type.as_str()));
    match data_type {
        DataType::Primitive(_) => {}
        DataType::Array(_) => {
            if let Some(item) = data_type.item_type() {
                schema.insert("items".to_string(), json!({ "type": item.as_str() }));
            }
        }
        DataType::Object(_) => {
            if let Some(item) = data_type.item_type() {
                schema.insert("properties".to_string(), json!({ "type": item.as_str() }));
            }
        }
    }
    Value::Object(schema)
}

/// Builds a path or query Parameter Object.
///
/// Every such parameter is emitted with `required: true`, query parameters included.
pub fn build_parameter(param: &ModelApiParameter, location: ParamLocation) -> Value {
    let mut obj = Map::new();
    obj.insert("in".to_string(), json!(location.as_str()));
    obj.insert("name".to_string(), json!(param.name));
    obj.insert("required".to_string(), json!(true));
    obj.insert(
        "schema".to_string(),
        build_type_schema(&param.value.data_type),
    );

    if param.value.data_type.is_composite() {
        obj.insert(
            "style".to_string(),
            json!(resolve_style(location, &param.value).as_str()),
        );
        obj.insert(
            "explode".to_string(),
            json!(resolve_explode(location, &param.value)),
        );
    }

    Value::Object(obj)
}

/// Builds a header Parameter Object. Headers carry no `required` flag.
pub fn build_header_parameter(header: &AdditionalHeader) -> Value {
    json!({
        "in": "header",
        "name": header.name,
        "schema": { "type": header.ty.as_str() },
    })
}

/// Builds one path Parameter Object per placeholder, in placeholder order.
///
/// # Errors
///
/// Returns `AppError::UndeclaredPathParameter` for the first placeholder
/// without a matching declaration.
pub fn build_path_parameters(
    placeholders: &[String],
    declared: &[ModelApiParameter],
) -> AppResult<Vec<Value>> {
    placeholders
        .iter()
        .map(|name| {
            declared
                .iter()
                .find(|p| &p.name == name)
                .map(|p| build_parameter(p, ParamLocation::Path))
                .ok_or_else(|| AppError::UndeclaredPathParameter(name.clone()))
        })
        .collect()
}
