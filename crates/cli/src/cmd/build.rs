//! Implementation of the `buildhelper build` command.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use buildhelper_lib::pipeline::BuildPipeline;

use super::{load, print_report};
use crate::output::print_info;

/// Compile the sources whose object files are stale, then link.
///
/// This is also what runs when no command is given.
pub fn cmd_build(config_path: &Path, verbose: bool) -> Result<()> {
  let config = load(config_path, verbose)?;
  let mut pipeline = BuildPipeline::host(&config);

  print_info(&format!(
    "Building {} ({} source files)",
    config.project_name,
    config.source_files.len()
  ));

  let started = Instant::now();
  let report = pipeline.build().context("Build failed")?;
  print_report(&report, started.elapsed());

  Ok(())
}
