#![deny(missing_docs)]

//! # Export Command
//!
//! Loads a descriptor, builds its OpenAPI document and writes it out.

use crate::input::load_descriptor;
use modelapi_core::{render_spec, AppResult, ExportFormat};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the export command.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Path to the model API descriptor (.json, .yaml or .yml).
    #[clap(long, env = "MODELAPI_INPUT")]
    pub input: PathBuf,

    /// Output path for the OpenAPI document.
    /// If not provided, prints to stdout.
    #[clap(long, env = "MODELAPI_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format (`json` or `yaml`).
    /// Defaults to the output file extension, or JSON on stdout.
    #[clap(long, env = "MODELAPI_FORMAT", value_parser = parse_format)]
    pub format: Option<ExportFormat>,
}

/// Helper to parse the `--format` argument.
fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

/// Executes the export.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ExportArgs) -> AppResult<()> {
    let descriptor = load_descriptor(&args.input)?;
    let spec = descriptor.export_model_api()?;

    let format = args.format.unwrap_or_else(|| {
        args.output
            .as_deref()
            .map(ExportFormat::from_path)
            .unwrap_or_default()
    });
    let rendered = render_spec(&spec, format)?;

    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(out_path, rendered)?;
        info!(output = ?out_path, ?format, "OpenAPI document written");
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelapi_core::AppError;
    use tempfile::tempdir;

    const DESCRIPTOR: &str = r#"{
        "method": "POST",
        "url": "https://api.example.com/v1/{model}/predict",
        "authType": "Bearer Token",
        "parameters": {"pathParams": [{"name": "model", "type": "string"}]},
        "requestBody": {
            "mediaType": "multipart/form-data",
            "properties": [{"field": "age", "type": "integer"}]
        },
        "response": {"statusCode": 200, "mediaType": "text/plain"}
    }"#;

    #[test]
    fn test_export_to_yaml_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.json");
        let output = dir.path().join("out/nested/spec.yaml");
        fs::write(&input, DESCRIPTOR).unwrap();

        let args = ExportArgs {
            input,
            output: Some(output.clone()),
            format: None,
        };
        execute(&args).unwrap();

        let yaml = fs::read_to_string(&output).unwrap();
        assert!(yaml.contains("openapi: 3.0.3"));
        assert!(yaml.contains("/v1/{model}/predict"));
        assert!(yaml.contains("scheme: bearer"));
        assert!(yaml.contains("multipart/form-data:"));
    }

    #[test]
    fn test_export_format_override() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.json");
        let output = dir.path().join("spec.yaml");
        fs::write(&input, DESCRIPTOR).unwrap();

        let args = ExportArgs {
            input,
            output: Some(output.clone()),
            format: Some(ExportFormat::Json),
        };
        execute(&args).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["servers"][0]["url"], "https://api.example.com");
        assert_eq!(
            value["paths"]["/v1/{model}/predict"]["post"]["requestBody"]["content"]
                ["multipart/form-data"]["schema"]["required"],
            serde_json::json!(["age"])
        );
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("yml"), Ok(ExportFormat::Yaml));
        assert!(parse_format("xml").unwrap_err().contains("Unknown export format"));
    }

    #[test]
    fn test_export_reports_specific_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.json");
        fs::write(
            &input,
            r#"{"method": "GET", "url": "https://api.example.com/{missing}"}"#,
        )
        .unwrap();

        let args = ExportArgs {
            input,
            output: Some(dir.path().join("spec.json")),
            format: None,
        };
        match execute(&args).unwrap_err() {
            AppError::UndeclaredPathParameter(name) => assert_eq!(name, "missing"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("spec.json").exists());
    }
}
