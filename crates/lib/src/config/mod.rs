//! Loading of `build.json` project descriptions.
//!
//! The loader reads a JSON document, fills in defaults for missing or empty
//! values, expands source directories and validates the required fields.
//! The build engine only ever sees the resulting [`BuildConfig`].

mod scan;
mod types;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub use scan::{expand_source_files, is_cpp_file};
pub use types::{
  BuildConfig, ConfigError, DEFAULT_BUILD_DIR, DEFAULT_COMPILER, DEFAULT_CPP_STANDARD, DEFAULT_OPTIMIZATION,
  OutputType,
};

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
  project_name: Option<String>,
  output_name: Option<String>,
  output_type: Option<String>,
  compiler: Option<String>,
  cpp_standard: Option<String>,
  optimization: Option<String>,
  debug: Option<bool>,
  build_dir: Option<String>,
  source_files: Option<Vec<String>>,
  include_dirs: Option<Vec<String>>,
  library_dirs: Option<Vec<String>>,
  libraries: Option<Vec<String>>,
  compile_flags: Option<Vec<String>>,
  link_flags: Option<Vec<String>>,
}

/// Read and validate the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<BuildConfig, ConfigError> {
  let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
    path: path.to_path_buf(),
    source: e,
  })?;

  parse_config(&content, path)
}

/// Parse and validate configuration text. `origin` is only used in errors.
pub fn parse_config(content: &str, origin: &Path) -> Result<BuildConfig, ConfigError> {
  let raw: RawConfig = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
    path: origin.to_path_buf(),
    source: e,
  })?;

  let output_type = match non_empty(raw.output_type) {
    Some(value) => value.parse()?,
    None => OutputType::Executable,
  };

  let source_entries = paths(raw.source_files);
  let source_files = expand_source_files(&source_entries)?;

  let config = BuildConfig {
    project_name: non_empty(raw.project_name).unwrap_or_default(),
    output_name: non_empty(raw.output_name),
    output_type,
    compiler: non_empty(raw.compiler).unwrap_or_else(|| DEFAULT_COMPILER.to_string()),
    cpp_standard: non_empty(raw.cpp_standard).unwrap_or_else(|| DEFAULT_CPP_STANDARD.to_string()),
    optimization: non_empty(raw.optimization).unwrap_or_else(|| DEFAULT_OPTIMIZATION.to_string()),
    debug: raw.debug.unwrap_or(false),
    source_files,
    include_dirs: paths(raw.include_dirs),
    library_dirs: paths(raw.library_dirs),
    libraries: strings(raw.libraries),
    compile_flags: strings(raw.compile_flags),
    link_flags: strings(raw.link_flags),
    build_dir: PathBuf::from(non_empty(raw.build_dir).unwrap_or_else(|| DEFAULT_BUILD_DIR.to_string())),
  };

  validate(&config)?;
  debug!(
    project = %config.project_name,
    sources = config.source_files.len(),
    "loaded configuration"
  );

  Ok(config)
}

fn validate(config: &BuildConfig) -> Result<(), ConfigError> {
  if config.project_name.is_empty() {
    return Err(ConfigError::MissingField { field: "project_name" });
  }
  if config.source_files.is_empty() {
    return Err(ConfigError::MissingField { field: "source_files" });
  }
  Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

fn strings(values: Option<Vec<String>>) -> Vec<String> {
  values
    .unwrap_or_default()
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect()
}

fn paths(values: Option<Vec<String>>) -> Vec<PathBuf> {
  strings(values).into_iter().map(PathBuf::from).collect()
}
