//! Implementation of the `buildhelper clean` command.

use std::path::Path;

use anyhow::{Context, Result};

use buildhelper_lib::pipeline::{BuildPipeline, CleanOutcome};

use super::load;
use crate::output::{print_info, print_success};

/// Remove the configured build directory and everything in it.
pub fn cmd_clean(config_path: &Path, verbose: bool) -> Result<()> {
  let config = load(config_path, verbose)?;
  let mut pipeline = BuildPipeline::host(&config);

  match pipeline.clean().context("Clean failed")? {
    CleanOutcome::Removed => print_success(&format!("Removed {}", config.build_dir.display())),
    CleanOutcome::AlreadyClean => print_info(&format!("Nothing to clean, {} does not exist", config.build_dir.display())),
  }

  Ok(())
}
