//! # Error Handling
//!
//! Errors raised while loading a model API descriptor, validating it, or
//! building and rendering its OpenAPI document. The CLI prints their
//! `Display` text as-is, so each message is written for the portal user.

use derive_more::{Display, From};

/// Failure of any model API operation.
///
/// URL and path-parameter failures carry the offending text so callers can
/// name it. A bare `String` converts into `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Descriptor could not be read or the document could not be written.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Descriptor or document JSON could not be (de)serialized.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Descriptor or document YAML could not be (de)serialized.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The combined `url` + `urlParams` does not have the
    /// `scheme://host[:port][/path][?query]` shape.
    #[from(ignore)]
    #[display("Malformed model API URL: {_0}")]
    MalformedUrl(String),

    /// A `{name}` placeholder in the URL path has no `pathParams` entry.
    #[from(ignore)]
    #[display("Path parameter {{{_0}}} not defined")]
    UndeclaredPathParameter(String),

    /// A document-level constraint on the descriptor was violated.
    #[from(ignore)]
    #[display("Invalid descriptor: {_0}")]
    InvalidDescriptor(String),

    /// Collapsed validation failure surfaced by the save-time validator.
    #[from(ignore)]
    #[display("ModelAPI is invalid")]
    InvalidModelApi,

    /// Anything else, such as a missing descriptor file or an unknown format.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// Result of a model API operation.
pub type AppResult<T> = Result<T, AppError>;
