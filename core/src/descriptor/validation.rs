#![deny(missing_docs)]

//! # Descriptor Validation
//!
//! The checks run when a model API descriptor is saved: document-level
//! constraints first, then a trial build of the OpenAPI document.
//!
//! Callers of [`validate_model_api`] only learn *that* the descriptor is
//! invalid. The specific reason is logged; use [`check_descriptor`] and
//! [`build_model_api_spec`] directly when it is needed.

use crate::descriptor::{ModelApiDescriptor, ModelApiParameter};
use crate::error::{AppError, AppResult};
use crate::oas::build_model_api_spec;
use std::collections::HashSet;
use tracing::debug;

/// Enforces the constraints the document store applies before the builder runs.
///
/// # Errors
///
/// Returns `AppError::InvalidDescriptor` naming the first violation.
pub fn check_descriptor(descriptor: &ModelApiDescriptor) -> AppResult<()> {
    if descriptor.url.trim().is_empty() {
        return Err(AppError::InvalidDescriptor("'url' must not be empty".into()));
    }

    let status = descriptor.response.status_code;
    if !(100..=599).contains(&status) {
        return Err(AppError::InvalidDescriptor(format!(
            "response status code {} is outside 100-599",
            status
        )));
    }

    for header in &descriptor.additional_headers {
        if header.name.trim().is_empty() {
            return Err(AppError::InvalidDescriptor(
                "additional header name must not be empty".into(),
            ));
        }
    }

    check_parameters(&descriptor.parameters.path_params, "path")?;
    for param in &descriptor.parameters.path_params {
        if let Some(style) = param.value.style.filter(|s| !s.is_path_style()) {
            return Err(AppError::InvalidDescriptor(format!(
                "path parameter '{}' cannot use style '{}'",
                param.name, style
            )));
        }
    }

    check_parameters(&descriptor.parameters.query_params, "query")?;
    for param in &descriptor.parameters.query_params {
        if let Some(style) = param.value.style.filter(|s| !s.is_query_style()) {
            return Err(AppError::InvalidDescriptor(format!(
                "query parameter '{}' cannot use style '{}'",
                param.name, style
            )));
        }
    }

    if let Some(body) = descriptor.active_request_body() {
        let mut seen = HashSet::new();
        for prop in &body.properties {
            if prop.field.trim().is_empty() {
                return Err(AppError::InvalidDescriptor(
                    "request body field name must not be empty".into(),
                ));
            }
            if !seen.insert(prop.field.as_str()) {
                return Err(AppError::InvalidDescriptor(format!(
                    "duplicate request body field '{}'",
                    prop.field
                )));
            }
            if let Some(style) = prop.value.style.filter(|s| !s.is_query_style()) {
                return Err(AppError::InvalidDescriptor(format!(
                    "request body field '{}' cannot use style '{}'",
                    prop.field, style
                )));
            }
        }
    }

    Ok(())
}

fn check_parameters(params: &[ModelApiParameter], location: &str) -> AppResult<()> {
    let mut seen = HashSet::new();
    for param in params {
        if param.name.trim().is_empty() {
            return Err(AppError::InvalidDescriptor(format!(
                "{} parameter name must not be empty",
                location
            )));
        }
        if !seen.insert(param.name.as_str()) {
            return Err(AppError::InvalidDescriptor(format!(
                "duplicate {} parameter '{}'",
                location, param.name
            )));
        }
    }
    Ok(())
}

/// Save-time validator.
///
/// Any failure collapses into `AppError::InvalidModelApi`.
pub fn validate_model_api(descriptor: &ModelApiDescriptor) -> AppResult<()> {
    check_descriptor(descriptor)
        .and_then(|_| build_model_api_spec(descriptor).map(|_| ()))
        .map_err(|err| {
            debug!(reason = %err, "model api validation failed");
            AppError::InvalidModelApi
        })
}

impl ModelApiDescriptor {
    /// See [`validate_model_api`].
    pub fn validate(&self) -> AppResult<()> {
        validate_model_api(self)
    }
}
