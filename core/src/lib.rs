#![deny(missing_docs)]

//! # Model API Core
//!
//! Generates OpenAPI 3.0.3 documents from user-authored descriptions of
//! third-party model prediction APIs.
//!
//! The builder is a pure function of its input: no state is kept between
//! calls and identical descriptors produce deep-equal documents.

/// Shared error types.
pub mod error;

/// Model API descriptor model and save-time validation.
pub mod descriptor;

/// OpenAPI document generation.
pub mod oas;

/// Rendering and on-demand export.
pub mod export;

pub use descriptor::validation::{check_descriptor, validate_model_api};
pub use descriptor::{
    AdditionalHeader, AnyType, AuthType, BatchStrategy, BodyProperty, DataType, HttpMethod,
    ModelApiDescriptor, ModelApiParameter, ModelApiParameters, ParamStyle, PrimitiveType,
    RequestBodyMediaType, RequestBodySpec, RequestConfig, ResponseMediaType, ResponseSpec,
    ValueSchema,
};
pub use error::{AppError, AppResult};
pub use export::{render_spec, ExportFormat};
pub use oas::{build_model_api_spec, parse_model_url, ParamLocation, ParsedModelUrl};
