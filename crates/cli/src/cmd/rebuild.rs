//! Implementation of the `buildhelper rebuild` command.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use buildhelper_lib::pipeline::BuildPipeline;

use super::{load, print_report};
use crate::output::print_info;

/// Clean, then build from scratch.
///
/// A failed clean is logged and the build still runs.
pub fn cmd_rebuild(config_path: &Path, verbose: bool) -> Result<()> {
  let config = load(config_path, verbose)?;
  let mut pipeline = BuildPipeline::host(&config);

  print_info(&format!("Rebuilding {}", config.project_name));

  let started = Instant::now();
  let report = pipeline.rebuild().context("Rebuild failed")?;
  print_report(&report, started.elapsed());

  Ok(())
}
