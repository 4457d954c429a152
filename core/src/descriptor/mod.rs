#![deny(missing_docs)]

//! # Model API Descriptor
//!
//! Strongly typed form of the user-authored description of a third-party
//! prediction API. The serde shape matches the JSON the portal stores:
//! camelCase keys, `type`/`itemType` pairs, and string-valued enums such as
//! `"Bearer Token"`.
//!
//! - **types**: `DataType`, `PrimitiveType`, `ParamStyle`, `ValueSchema`.
//! - **validation**: document-level constraints and the save-time validator.

pub mod types;
pub mod validation;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use types::{AnyType, DataType, ParamStyle, PrimitiveType, ValueSchema};

/// HTTP method used to call the model endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `POST`
    Post,
    /// `GET`
    Get,
}

impl HttpMethod {
    /// Key used for the operation inside an OpenAPI path item.
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            HttpMethod::Post => "post",
            HttpMethod::Get => "get",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => f.write_str("POST"),
            HttpMethod::Get => f.write_str("GET"),
        }
    }
}

/// Authentication scheme the model endpoint expects.
///
/// Any label outside the three known ones is kept verbatim in
/// `Unrecognized` and treated as no authentication when building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthType {
    /// `"No Auth"`
    #[default]
    NoAuth,
    /// `"Bearer Token"`
    BearerToken,
    /// `"Basic Auth"`
    BasicAuth,
    /// Any other label.
    Unrecognized(String),
}

impl AuthType {
    /// The label stored in the descriptor.
    pub fn as_str(&self) -> &str {
        match self {
            AuthType::NoAuth => "No Auth",
            AuthType::BearerToken => "Bearer Token",
            AuthType::BasicAuth => "Basic Auth",
            AuthType::Unrecognized(label) => label,
        }
    }
}

impl From<String> for AuthType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "No Auth" => AuthType::NoAuth,
            "Bearer Token" => AuthType::BearerToken,
            "Basic Auth" => AuthType::BasicAuth,
            _ => AuthType::Unrecognized(label),
        }
    }
}

impl From<&str> for AuthType {
    fn from(label: &str) -> Self {
        AuthType::from(label.to_string())
    }
}

impl From<AuthType> for String {
    fn from(auth: AuthType) -> Self {
        match auth {
            AuthType::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// A static header sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalHeader {
    /// Header name.
    pub name: String,
    /// Declared header value type.
    #[serde(rename = "type")]
    pub ty: PrimitiveType,
    /// Value sent by the test runner. Not part of the generated document.
    #[serde(default)]
    pub value: Value,
}

/// A path or query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelApiParameter {
    /// Parameter name. For path parameters this matches the `{name}` placeholder.
    pub name: String,
    /// Type and serialization hints.
    #[serde(flatten)]
    pub value: ValueSchema,
}

impl ModelApiParameter {
    /// Creates a parameter.
    pub fn new(name: impl Into<String>, value: ValueSchema) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Path and query parameter declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelApiParameters {
    /// Declared path parameters, in any order.
    #[serde(default)]
    pub path_params: Vec<ModelApiParameter>,
    /// Declared query parameters, emitted in this order.
    #[serde(default)]
    pub query_params: Vec<ModelApiParameter>,
}

/// Encoding of the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestBodyMediaType {
    /// No request body.
    #[default]
    #[serde(rename = "none")]
    None,
    /// `multipart/form-data`
    #[serde(rename = "multipart/form-data")]
    MultipartFormData,
    /// `application/x-www-form-urlencoded`
    #[serde(rename = "application/x-www-form-urlencoded")]
    FormUrlEncoded,
}

impl RequestBodyMediaType {
    /// The media type string, `none` included.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestBodyMediaType::None => "none",
            RequestBodyMediaType::MultipartFormData => "multipart/form-data",
            RequestBodyMediaType::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// A single field of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyProperty {
    /// Form field name.
    pub field: String,
    /// Type and serialization hints.
    #[serde(flatten)]
    pub value: ValueSchema,
}

impl BodyProperty {
    /// Creates a body property.
    pub fn new(field: impl Into<String>, value: ValueSchema) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

/// Request body declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBodySpec {
    /// Body encoding. `none` disables the body entirely.
    #[serde(default)]
    pub media_type: RequestBodyMediaType,
    /// Body fields, emitted in this order.
    #[serde(default)]
    pub properties: Vec<BodyProperty>,
}

impl RequestBodySpec {
    /// Whether a body is sent at all.
    pub fn is_active(&self) -> bool {
        self.media_type != RequestBodyMediaType::None
    }
}

/// Media type of the prediction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResponseMediaType {
    /// `text/plain`
    #[serde(rename = "text/plain")]
    TextPlain,
    /// `application/json`
    #[default]
    #[serde(rename = "application/json")]
    ApplicationJson,
}

impl ResponseMediaType {
    /// The media type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMediaType::TextPlain => "text/plain",
            ResponseMediaType::ApplicationJson => "application/json",
        }
    }
}

fn default_status_code() -> u16 {
    200
}

/// Expected shape of a successful prediction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSpec {
    /// Success status code.
    #[serde(default = "default_status_code")]
    pub status_code: u16,
    /// Response media type.
    pub media_type: ResponseMediaType,
    /// Declared prediction type. Carried for the test runner only.
    #[serde(rename = "type", default)]
    pub ty: AnyType,
    /// Dot-path to the prediction inside a JSON object response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Default for ResponseSpec {
    fn default() -> Self {
        Self {
            status_code: default_status_code(),
            media_type: ResponseMediaType::default(),
            ty: AnyType::default(),
            field: None,
        }
    }
}

/// How the test runner groups prediction requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStrategy {
    /// One row per request.
    #[default]
    None,
    /// Several rows per multipart request.
    Multipart,
}

/// Connection settings for the test runner. Not consumed by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    /// Requests per minute; `-1` for unlimited.
    pub rate_limit: i64,
    /// Batching strategy.
    #[serde(default)]
    pub batch_strategy: BatchStrategy,
    /// Rows per batch when batching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_limit: Option<i64>,
    /// Concurrent connections; `-1` for unlimited.
    pub max_connections: i64,
    /// Per-request timeout in milliseconds.
    pub request_timeout: u64,
}

/// User-authored description of a third-party prediction API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelApiDescriptor {
    /// Request method.
    pub method: HttpMethod,
    /// Base URL, optionally containing `{name}` path placeholders.
    pub url: String,
    /// Literal suffix appended to `url` before parsing, e.g. `?debug=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_params: Option<String>,
    /// Authentication scheme.
    #[serde(default)]
    pub auth_type: AuthType,
    /// Credentials for the test runner. Opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type_config: Option<Value>,
    /// Headers injected into every request.
    #[serde(default)]
    pub additional_headers: Vec<AdditionalHeader>,
    /// Path and query parameters.
    #[serde(default)]
    pub parameters: ModelApiParameters,
    /// Request body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodySpec>,
    /// Successful response shape.
    #[serde(default)]
    pub response: ResponseSpec,
    /// Test runner connection settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_config: Option<RequestConfig>,
}

impl ModelApiDescriptor {
    /// Creates a descriptor with no parameters, no body and no auth.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            url_params: None,
            auth_type: AuthType::NoAuth,
            auth_type_config: None,
            additional_headers: Vec::new(),
            parameters: ModelApiParameters::default(),
            request_body: None,
            response: ResponseSpec::default(),
            request_config: None,
        }
    }

    /// Parses a descriptor from JSON.
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a descriptor from YAML.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// `url` followed by `urlParams`, the string the URL parser sees.
    pub fn full_url(&self) -> String {
        match &self.url_params {
            Some(params) => format!("{}{}", self.url, params),
            None => self.url.clone(),
        }
    }

    /// The request body, if one is actually sent.
    pub fn active_request_body(&self) -> Option<&RequestBodySpec> {
        self.request_body.as_ref().filter(|b| b.is_active())
    }
}
