//! Implementation of the `buildhelper init` command.
//!
//! Writes a starter configuration next to a guide describing every field.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use buildhelper_lib::consts::GUIDE_FILE;
use buildhelper_lib::init::{InitOptions, init};

use crate::output::symbols;

/// Execute the init command.
///
/// The guide is written to the same directory as the configuration file.
///
/// # Errors
///
/// Returns an error if either file already exists or cannot be written.
pub fn cmd_init(config_path: &Path) -> Result<()> {
  let options = InitOptions {
    config_path: config_path.to_path_buf(),
    guide_path: config_path.with_file_name(GUIDE_FILE),
  };

  let result = init(&options).context("Failed to initialize project")?;

  println!(
    "{} {}",
    symbols::SUCCESS.green(),
    "Initialized buildhelper project!".green().bold()
  );
  println!();
  println!("  {} Configuration: {}", symbols::INFO.cyan(), result.config_path.display());
  println!("  {} Guide:         {}", symbols::INFO.cyan(), result.guide_path.display());
  println!();
  println!("{}", "Next steps:".bold());
  println!(
    "  1. Edit {} to list your sources",
    result.config_path.display().to_string().cyan()
  );
  println!("  2. Run: {}", "buildhelper build".cyan());

  Ok(())
}
