//! Descriptor file loading.

use modelapi_core::{AppError, AppResult, ExportFormat, ModelApiDescriptor};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a descriptor, choosing JSON or YAML from the file extension.
pub fn load_descriptor(path: &Path) -> AppResult<ModelApiDescriptor> {
    if !path.exists() {
        return Err(AppError::General(format!(
            "Descriptor file not found: {:?}",
            path
        )));
    }

    let content = fs::read_to_string(path)?;
    debug!(path = ?path, bytes = content.len(), "read descriptor");

    match ExportFormat::from_path(path) {
        ExportFormat::Yaml => ModelApiDescriptor::from_yaml(&content),
        ExportFormat::Json => ModelApiDescriptor::from_json(&content),
    }
}
