//! Filesystem capability used by the build engine.
//!
//! The pipeline and the staleness check only touch the filesystem through
//! [`FileSystem`], so tests can observe or fake individual calls while the
//! production code runs against [`HostFs`].

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// The filesystem operations the build engine needs.
///
/// All calls are synchronous and are never retried.
pub trait FileSystem {
  /// Whether an entry (file or directory) exists at `path`.
  fn exists(&self, path: &Path) -> bool;

  /// Last modification time of the entry at `path`.
  fn modified(&self, path: &Path) -> io::Result<SystemTime>;

  /// Create a single directory. The parent must already exist.
  fn create_dir(&self, path: &Path) -> io::Result<()>;

  /// Remove a directory and everything below it.
  fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// The host operating system's filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileSystem for HostFs {
  fn exists(&self, path: &Path) -> bool {
    fs::metadata(path).is_ok()
  }

  fn modified(&self, path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
  }

  fn create_dir(&self, path: &Path) -> io::Result<()> {
    create_dir(path)
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path)
  }
}

#[cfg(unix)]
fn create_dir(path: &Path) -> io::Result<()> {
  use std::os::unix::fs::DirBuilderExt;

  fs::DirBuilder::new().mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> io::Result<()> {
  fs::create_dir(path)
}
