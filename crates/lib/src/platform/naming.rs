//! Output paths for object files and final artifacts.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, OutputType};
use crate::consts::OBJECT_EXTENSION;
use crate::platform::os::Os;

/// Object file path for `source` inside `build_dir`.
///
/// Only the base name is kept, and its extension is replaced by the object
/// extension. A `\` inside a UTF-8 file name also counts as a separator, so
/// Windows-style paths behave the same on every host. Names are never
/// lossily converted: distinct non-UTF-8 names keep distinct objects. Two
/// sources with the same base name in different directories map to the same
/// object file.
pub fn object_file_path(build_dir: &Path, source: &Path) -> PathBuf {
  let file_name = source.file_name().unwrap_or(source.as_os_str());
  let file_name = match file_name.to_str() {
    Some(name) => OsStr::new(name.rsplit('\\').next().unwrap_or(name)),
    None => file_name,
  };
  let stem = Path::new(file_name).file_stem().unwrap_or(file_name);

  let mut object = stem.to_os_string();
  object.push(".");
  object.push(OBJECT_EXTENSION);
  build_dir.join(object)
}

/// File name of the final artifact on `os`.
pub fn output_file_name(config: &BuildConfig, os: Os) -> String {
  let name = config.artifact_name();
  match config.output_type {
    OutputType::Executable => format!("{name}{}", os.executable_suffix()),
    OutputType::Library => format!(
      "{}{name}{}",
      os.shared_library_prefix(),
      os.shared_library_suffix()
    ),
  }
}

/// Path of the final artifact inside the build directory on `os`.
pub fn output_file_path(config: &BuildConfig, os: Os) -> PathBuf {
  config.build_dir.join(output_file_name(config, os))
}
