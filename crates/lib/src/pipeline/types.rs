//! Types for running the build pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::staleness::StalenessError;
use crate::toolchain::ToolError;

/// Where the pipeline is in a `build` run.
///
/// `Failed` is reachable from every state except `Done`, and no stage runs
/// after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipelineState {
  #[default]
  Idle,
  EnsuringDirectory,
  Compiling,
  Linking,
  Done,
  Failed,
}

impl PipelineState {
  pub fn is_terminal(&self) -> bool {
    matches!(self, Self::Done | Self::Failed)
  }
}

impl fmt::Display for PipelineState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Idle => "idle",
      Self::EnsuringDirectory => "ensuring-directory",
      Self::Compiling => "compiling",
      Self::Linking => "linking",
      Self::Done => "done",
      Self::Failed => "failed",
    };
    f.write_str(name)
  }
}

/// Errors that abort a pipeline command.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("failed to create build directory {}", path.display())]
  CreateBuildDir { path: PathBuf, source: io::Error },

  #[error(transparent)]
  Staleness(#[from] StalenessError),

  #[error("failed to compile {}", file.display())]
  Compile { file: PathBuf, source: ToolError },

  #[error("failed to link {}", output.display())]
  Link { output: PathBuf, source: ToolError },

  #[error("failed to remove build directory {}", path.display())]
  Clean { path: PathBuf, source: io::Error },
}

/// Summary of a successful `build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
  /// The linked artifact.
  pub output: PathBuf,
  /// Sources that were compiled, in source order.
  pub compiled: Vec<PathBuf>,
  /// Sources whose object files were already up to date, in source order.
  pub skipped: Vec<PathBuf>,
}

impl BuildReport {
  /// Whether every object file was reused.
  pub fn is_up_to_date(&self) -> bool {
    self.compiled.is_empty()
  }
}

/// What `clean` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
  /// The build directory existed and was removed.
  Removed,
  /// There was no build directory to remove.
  AlreadyClean,
}
