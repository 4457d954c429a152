#![deny(missing_docs)]

//! # Export
//!
//! On-demand export of a descriptor's OpenAPI document, as a value or as
//! rendered JSON / YAML text.

use crate::descriptor::ModelApiDescriptor;
use crate::error::{AppError, AppResult};
use crate::oas::build_model_api_spec;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Text format for a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl ExportFormat {
    /// Infers the format from a file extension. Anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ExportFormat::Yaml
            }
            _ => ExportFormat::Json,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(AppError::General(format!(
                "Unknown export format '{}', expected 'json' or 'yaml'",
                other
            ))),
        }
    }
}

/// Renders a document, keeping keys in build order.
pub fn render_spec(spec: &Value, format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(spec)?),
        ExportFormat::Yaml => Ok(serde_yaml::to_string(spec)?),
    }
}

impl ModelApiDescriptor {
    /// Builds the OpenAPI document for external consumption.
    ///
    /// Unlike [`ModelApiDescriptor::validate`], the specific failure is returned.
    pub fn export_model_api(&self) -> AppResult<Value> {
        let spec = build_model_api_spec(self)?;
        info!(method = %self.method, url = %self.url, "exported model api spec");
        Ok(spec)
    }

    /// Builds and renders the OpenAPI document.
    pub fn export_model_api_as(&self, format: ExportFormat) -> AppResult<String> {
        render_spec(&self.export_model_api()?, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::HttpMethod;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("spec.yaml")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(Path::new("spec.YML")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(Path::new("spec.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("spec")), ExportFormat::Json);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("YAML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("toml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_render_json_keeps_build_order() {
        let d = ModelApiDescriptor::new(HttpMethod::Post, "https://h.io/predict");
        let text = d.export_model_api_as(ExportFormat::Json).unwrap();
        let openapi = text.find("\"openapi\"").unwrap();
        let info = text.find("\"info\"").unwrap();
        let paths = text.find("\"paths\"").unwrap();
        assert!(openapi < info && info < paths);
    }

    #[test]
    fn test_render_yaml() {
        let d = ModelApiDescriptor::new(HttpMethod::Get, "https://h.io/predict");
        let text = d.export_model_api_as(ExportFormat::Yaml).unwrap();
        assert!(text.contains("openapi: 3.0.3"));
        assert!(text.contains("/predict"));
        assert!(text.contains("get:"));
    }

    #[test]
    fn test_export_propagates_specific_error() {
        let d = ModelApiDescriptor::new(HttpMethod::Get, "https://h.io/{x}");
        let err = d.export_model_api().unwrap_err();
        assert!(matches!(err, AppError::UndeclaredPathParameter(_)));
    }
}
