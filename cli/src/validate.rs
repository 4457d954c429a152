#![deny(missing_docs)]

//! # Validate Command
//!
//! Runs the save-time validator against a descriptor file.

use crate::input::load_descriptor;
use modelapi_core::{build_model_api_spec, check_descriptor, validate_model_api, AppResult};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the model API descriptor (.json, .yaml or .yml).
    #[clap(long, env = "MODELAPI_INPUT")]
    pub input: PathBuf,

    /// Report the specific failure instead of the generic "ModelAPI is invalid".
    #[clap(long)]
    pub detailed: bool,
}

/// Executes the validation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ValidateArgs) -> AppResult<()> {
    let descriptor = load_descriptor(&args.input)?;

    if args.detailed {
        check_descriptor(&descriptor)?;
        build_model_api_spec(&descriptor)?;
    } else {
        validate_model_api(&descriptor)?;
    }

    info!(input = ?args.input, "descriptor is valid");
    println!("ModelAPI is valid");
    Ok(())
}
