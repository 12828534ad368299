//! Expansion of directory entries in `source_files`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::types::ConfigError;
use crate::consts::CPP_EXTENSIONS;

/// Replace every directory entry with the C++ sources directly inside it.
///
/// Scanning is non-recursive and only picks up regular files, sorted by file
/// name. Entries that are not directories are passed through untouched,
/// whether or not they exist.
pub fn expand_source_files(entries: &[PathBuf]) -> Result<Vec<PathBuf>, ConfigError> {
  let mut result = Vec::with_capacity(entries.len());

  for entry in entries {
    if entry.is_dir() {
      info!(directory = %entry.display(), "scanning directory");
      let files = list_cpp_files(entry)?;
      info!(directory = %entry.display(), count = files.len(), "found C++ files");
      result.extend(files);
    } else {
      result.push(entry.clone());
    }
  }

  Ok(result)
}

/// Whether a file name carries one of the recognised C++ source suffixes.
pub fn is_cpp_file(file_name: &str) -> bool {
  CPP_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

fn list_cpp_files(directory: &Path) -> Result<Vec<PathBuf>, ConfigError> {
  let mut files = Vec::new();

  let walker = WalkDir::new(directory)
    .min_depth(1)
    .max_depth(1)
    .sort_by_file_name();

  for entry in walker {
    let entry = entry.map_err(|e| ConfigError::ScanDir {
      path: directory.to_path_buf(),
      source: e,
    })?;

    if !entry.file_type().is_file() {
      continue;
    }

    match entry.file_name().to_str() {
      Some(name) if is_cpp_file(name) => files.push(entry.into_path()),
      _ => debug!(path = %entry.path().display(), "ignoring non-source file"),
    }
  }

  Ok(files)
}
