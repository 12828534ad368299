mod build;
mod clean;
mod init;
mod rebuild;

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use init::cmd_init;
pub use rebuild::cmd_rebuild;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use buildhelper_lib::config::{BuildConfig, load_config};
use buildhelper_lib::pipeline::BuildReport;

use crate::output::{format_duration, print_config, print_stat, print_success};

/// Load the configuration, dumping it first when `verbose` is set.
fn load(path: &Path, verbose: bool) -> Result<BuildConfig> {
  let config = load_config(path).with_context(|| format!("Failed to load configuration from {}", path.display()))?;
  if verbose {
    print_config(&config);
  }
  Ok(config)
}

fn print_report(report: &BuildReport, elapsed: Duration) {
  println!();
  if report.is_up_to_date() {
    print_success(&format!("Up to date, relinked in {}", format_duration(elapsed)));
  } else {
    print_success(&format!("Build successful in {}", format_duration(elapsed)));
  }
  print_stat("Output", &report.output.display().to_string());
  print_stat("Compiled", &report.compiled.len().to_string());
  print_stat("Up to date", &report.skipped.len().to_string());
}
