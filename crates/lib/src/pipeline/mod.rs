//! The incremental build pipeline.
//!
//! A `build` runs three stages in strict order and stops at the first
//! failure:
//!
//! 1. ensure the build directory exists
//! 2. compile every stale source, in source order
//! 3. link all object files into the final artifact
//!
//! Linking always runs after a successful compile stage, even when every
//! source was skipped.

mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::BuildConfig;
use crate::platform::{FileSystem, HostFs, Os, object_file_path, output_file_path};
use crate::staleness::StalenessOracle;
use crate::toolchain::{ProcessRunner, ToolRunner, compile_invocation, link_invocation};

pub use types::{BuildError, BuildReport, CleanOutcome, PipelineState};

/// Object files of one build, positionally aligned with the sources.
type ArtifactSet = Vec<PathBuf>;

struct CompileOutcome {
  objects: ArtifactSet,
  compiled: Vec<PathBuf>,
  skipped: Vec<PathBuf>,
}

/// Drives `build`, `clean` and `rebuild` for one configuration.
pub struct BuildPipeline<'a, F: FileSystem + ?Sized, R: ToolRunner> {
  config: &'a BuildConfig,
  fs: &'a F,
  runner: R,
  os: Os,
  state: PipelineState,
}

impl<'a> BuildPipeline<'a, HostFs, ProcessRunner> {
  /// A pipeline over the real filesystem and toolchain.
  pub fn host(config: &'a BuildConfig) -> Self {
    Self::new(config, &HostFs, ProcessRunner)
  }
}

impl<'a, F: FileSystem + ?Sized, R: ToolRunner> BuildPipeline<'a, F, R> {
  pub fn new(config: &'a BuildConfig, fs: &'a F, runner: R) -> Self {
    Self {
      config,
      fs,
      runner,
      os: Os::current(),
      state: PipelineState::Idle,
    }
  }

  /// Name artifacts for `os` instead of the host.
  pub fn with_os(mut self, os: Os) -> Self {
    self.os = os;
    self
  }

  pub fn state(&self) -> PipelineState {
    self.state
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  /// Path of the artifact produced by the link stage.
  pub fn output_path(&self) -> PathBuf {
    output_file_path(self.config, self.os)
  }

  /// Compile stale sources and link the artifact.
  pub fn build(&mut self) -> Result<BuildReport, BuildError> {
    self.state = PipelineState::Idle;
    let output = self.output_path();

    info!(
      project = %self.config.project_name,
      os = %self.os,
      output = %output.display(),
      "starting build"
    );

    match self.run_stages(&output) {
      Ok(report) => {
        self.transition(PipelineState::Done);
        info!(
          output = %report.output.display(),
          compiled = report.compiled.len(),
          skipped = report.skipped.len(),
          "build successful"
        );
        Ok(report)
      }
      Err(e) => {
        self.transition(PipelineState::Failed);
        Err(e)
      }
    }
  }

  /// Remove the build directory and everything in it.
  ///
  /// A missing build directory is not an error.
  pub fn clean(&mut self) -> Result<CleanOutcome, BuildError> {
    self.state = PipelineState::Idle;
    let config = self.config;
    let build_dir = &config.build_dir;

    if !self.fs.exists(build_dir) {
      info!(path = %build_dir.display(), "build directory does not exist");
      self.transition(PipelineState::Done);
      return Ok(CleanOutcome::AlreadyClean);
    }

    info!(path = %build_dir.display(), "cleaning build directory");
    if let Err(e) = self.fs.remove_dir_all(build_dir) {
      error!(path = %build_dir.display(), error = %e, "failed to remove build directory");
      self.transition(PipelineState::Failed);
      return Err(BuildError::Clean {
        path: build_dir.clone(),
        source: e,
      });
    }

    self.transition(PipelineState::Done);
    info!("clean complete");
    Ok(CleanOutcome::Removed)
  }

  /// Clean, then build. Only the build result counts.
  pub fn rebuild(&mut self) -> Result<BuildReport, BuildError> {
    info!(project = %self.config.project_name, "rebuilding");

    if let Err(e) = self.clean() {
      warn!(error = %e, "clean failed, building anyway");
    }

    self.build()
  }

  fn run_stages(&mut self, output: &Path) -> Result<BuildReport, BuildError> {
    self.ensure_build_directory()?;
    let outcome = self.compile_all()?;
    self.link_all(&outcome.objects, output)?;

    Ok(BuildReport {
      output: output.to_path_buf(),
      compiled: outcome.compiled,
      skipped: outcome.skipped,
    })
  }

  fn ensure_build_directory(&mut self) -> Result<(), BuildError> {
    self.transition(PipelineState::EnsuringDirectory);
    let config = self.config;
    let build_dir = &config.build_dir;

    if self.fs.exists(build_dir) {
      return Ok(());
    }

    info!(path = %build_dir.display(), "creating build directory");
    self.fs.create_dir(build_dir).map_err(|e| {
      error!(path = %build_dir.display(), error = %e, "failed to create build directory");
      BuildError::CreateBuildDir {
        path: build_dir.clone(),
        source: e,
      }
    })
  }

  fn compile_all(&mut self) -> Result<CompileOutcome, BuildError> {
    self.transition(PipelineState::Compiling);

    let config = self.config;
    let mut oracle = StalenessOracle::new(self.fs);
    let mut outcome = CompileOutcome {
      objects: ArtifactSet::with_capacity(config.source_files.len()),
      compiled: Vec::new(),
      skipped: Vec::new(),
    };

    for source in &config.source_files {
      let object = object_file_path(&config.build_dir, source);

      let stale = oracle.needs_recompile(source, &object).map_err(|e| {
        error!(source = %source.display(), error = %e, "cannot decide whether to compile");
        BuildError::from(e)
      })?;

      if stale {
        info!(source = %source.display(), "compiling");
        let invocation = compile_invocation(config, source, &object);
        self.runner.run(&invocation).map_err(|e| {
          error!(source = %source.display(), error = %e, "failed to compile");
          BuildError::Compile {
            file: source.clone(),
            source: e,
          }
        })?;
        outcome.compiled.push(source.clone());
      } else {
        info!(source = %source.display(), "skipping (up to date)");
        outcome.skipped.push(source.clone());
      }

      outcome.objects.push(object);
    }

    Ok(outcome)
  }

  fn link_all(&mut self, objects: &[PathBuf], output: &Path) -> Result<(), BuildError> {
    self.transition(PipelineState::Linking);
    info!(objects = objects.len(), output = %output.display(), "linking");

    let invocation = link_invocation(self.config, objects, output);
    self.runner.run(&invocation).map_err(|e| {
      error!(output = %output.display(), error = %e, "failed to link");
      BuildError::Link {
        output: output.to_path_buf(),
        source: e,
      }
    })
  }

  fn transition(&mut self, next: PipelineState) {
    debug!(from = %self.state, to = %next, "pipeline state");
    self.state = next;
  }
}
