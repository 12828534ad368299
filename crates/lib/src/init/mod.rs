//! Scaffolding for a new project.
//!
//! Writes a default `build.json` and a `BUILD_GUIDE.md` describing every
//! configuration field.

mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub use templates::{BUILD_GUIDE_TEMPLATE, BUILD_JSON_TEMPLATE};

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
  #[error("file already exists: {}", path.display())]
  PathExists { path: PathBuf },

  #[error("failed to write file {}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },
}

/// Where to write the generated files.
pub struct InitOptions {
  /// Path of the configuration file to create
  pub config_path: PathBuf,
  /// Path of the guide document to create
  pub guide_path: PathBuf,
}

/// Files written by a successful initialization.
#[derive(Debug)]
pub struct InitResult {
  pub config_path: PathBuf,
  pub guide_path: PathBuf,
}

/// Write the default configuration and the guide.
///
/// # Errors
///
/// Returns an error if either file already exists (nothing is written in
/// that case) or if writing fails.
pub fn init(options: &InitOptions) -> Result<InitResult, InitError> {
  for path in [&options.config_path, &options.guide_path] {
    if path.exists() {
      return Err(InitError::PathExists { path: path.clone() });
    }
  }

  write(&options.config_path, BUILD_JSON_TEMPLATE)?;
  write(&options.guide_path, BUILD_GUIDE_TEMPLATE)?;

  info!(
    config = %options.config_path.display(),
    guide = %options.guide_path.display(),
    "initialized project"
  );

  Ok(InitResult {
    config_path: options.config_path.clone(),
    guide_path: options.guide_path.clone(),
  })
}

fn write(path: &Path, content: &str) -> Result<(), InitError> {
  fs::write(path, content).map_err(|e| InitError::WriteFile {
    path: path.to_path_buf(),
    source: e,
  })
}
