//! Configuration types shared by the loader and the build engine.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_COMPILER: &str = "g++";
pub const DEFAULT_CPP_STANDARD: &str = "c++17";
pub const DEFAULT_OPTIMIZATION: &str = "O2";
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot open config file {}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("invalid config file {}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("{field} is required in config file")]
  MissingField { field: &'static str },

  #[error("invalid output_type {value:?}: expected \"executable\" or \"library\"")]
  InvalidOutputType { value: String },

  #[error("failed to scan source directory {}", path.display())]
  ScanDir { path: PathBuf, source: walkdir::Error },
}

/// Kind of artifact produced by the link step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputType {
  #[default]
  Executable,
  Library,
}

impl OutputType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Executable => "executable",
      Self::Library => "library",
    }
  }

  pub fn is_library(&self) -> bool {
    matches!(self, Self::Library)
  }
}

impl fmt::Display for OutputType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for OutputType {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "executable" => Ok(Self::Executable),
      "library" => Ok(Self::Library),
      other => Err(ConfigError::InvalidOutputType {
        value: other.to_string(),
      }),
    }
  }
}

/// A fully validated project description.
///
/// Built once per run by the loader and read-only afterwards. `source_files`
/// has already had directories expanded to concrete files, and both
/// `project_name` and `source_files` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  pub project_name: String,
  /// Artifact base name; falls back to `project_name` when unset.
  pub output_name: Option<String>,
  pub output_type: OutputType,
  pub compiler: String,
  pub cpp_standard: String,
  /// Optimization level without the leading dash (`O0`, `O2`, `Os`, ...).
  pub optimization: String,
  pub debug: bool,
  pub source_files: Vec<PathBuf>,
  pub include_dirs: Vec<PathBuf>,
  pub library_dirs: Vec<PathBuf>,
  pub libraries: Vec<String>,
  pub compile_flags: Vec<String>,
  pub link_flags: Vec<String>,
  pub build_dir: PathBuf,
}

impl BuildConfig {
  /// Create a configuration with default toolchain settings.
  pub fn new(project_name: impl Into<String>, source_files: Vec<PathBuf>) -> Self {
    Self {
      project_name: project_name.into(),
      output_name: None,
      output_type: OutputType::Executable,
      compiler: DEFAULT_COMPILER.to_string(),
      cpp_standard: DEFAULT_CPP_STANDARD.to_string(),
      optimization: DEFAULT_OPTIMIZATION.to_string(),
      debug: false,
      source_files,
      include_dirs: Vec::new(),
      library_dirs: Vec::new(),
      libraries: Vec::new(),
      compile_flags: Vec::new(),
      link_flags: Vec::new(),
      build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
    }
  }

  /// Base name of the final artifact, before platform decoration.
  pub fn artifact_name(&self) -> &str {
    self.output_name.as_deref().unwrap_or(&self.project_name)
  }
}
