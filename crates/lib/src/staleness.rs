//! Modification-time based staleness checks.
//!
//! A source needs recompiling when its object file is missing or strictly
//! older than the source. Header dependencies are not tracked.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::debug;

use crate::platform::FileSystem;

/// Last observed modification time per queried path.
pub type ModTimeCache = HashMap<PathBuf, SystemTime>;

/// Errors reported by [`StalenessOracle::needs_recompile`].
#[derive(Debug, Error)]
pub enum StalenessError {
  /// The object file exists but its source is gone.
  #[error("source file does not exist: {}", path.display())]
  SourceMissing { path: PathBuf },
}

/// Answers whether a source file must be recompiled into its object file.
///
/// Modification times are read at most once per path and then served from
/// the cache for the lifetime of the oracle. The filesystem is assumed not to
/// change underneath a single build.
pub struct StalenessOracle<'a, F: FileSystem + ?Sized> {
  fs: &'a F,
  cache: ModTimeCache,
}

impl<'a, F: FileSystem + ?Sized> StalenessOracle<'a, F> {
  pub fn new(fs: &'a F) -> Self {
    Self {
      fs,
      cache: ModTimeCache::new(),
    }
  }

  /// Whether a file or directory exists at `path`.
  pub fn exists(&self, path: &Path) -> bool {
    self.fs.exists(path)
  }

  /// Modification time of `path`, or `UNIX_EPOCH` if it cannot be read.
  ///
  /// Only successful reads are cached.
  pub fn mod_time(&mut self, path: &Path) -> SystemTime {
    if let Some(time) = self.cache.get(path) {
      return *time;
    }

    match self.fs.modified(path) {
      Ok(time) => {
        self.cache.insert(path.to_path_buf(), time);
        time
      }
      Err(e) => {
        debug!(path = %path.display(), error = %e, "cannot stat, treating as oldest");
        UNIX_EPOCH
      }
    }
  }

  /// Decide whether `source` must be compiled into `object`.
  ///
  /// Checked in order: a missing object always needs compiling; a missing
  /// source next to an existing object is an error; otherwise the source must
  /// be strictly newer than the object. Equal times count as up to date.
  pub fn needs_recompile(&mut self, source: &Path, object: &Path) -> Result<bool, StalenessError> {
    if !self.exists(object) {
      debug!(object = %object.display(), "object missing");
      return Ok(true);
    }

    if !self.exists(source) {
      return Err(StalenessError::SourceMissing {
        path: source.to_path_buf(),
      });
    }

    let source_time = self.mod_time(source);
    let object_time = self.mod_time(object);

    Ok(source_time > object_time)
  }

  /// The modification times observed so far.
  pub fn cache(&self) -> &ModTimeCache {
    &self.cache
  }
}
