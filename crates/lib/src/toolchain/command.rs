//! Construction of compiler and linker invocations from a configuration.

use std::ffi::OsString;
use std::path::Path;

use crate::config::BuildConfig;
use crate::toolchain::Invocation;

/// Compile one source file into one object file.
///
/// `<compiler> -std=<standard> -<opt> [-g] -I<dir>... <flags>... -c <source> -o <object>`
pub fn compile_invocation(config: &BuildConfig, source: &Path, object: &Path) -> Invocation {
  let mut invocation = Invocation::new(&config.compiler);

  invocation
    .arg(format!("-std={}", config.cpp_standard))
    .arg(format!("-{}", config.optimization));

  if config.debug {
    invocation.arg("-g");
  }

  invocation
    .args(config.include_dirs.iter().map(|dir| prefixed("-I", dir)))
    .args(&config.compile_flags)
    .arg("-c")
    .arg(source)
    .arg("-o")
    .arg(object);

  invocation
}

/// Link every object file into the final artifact.
///
/// `<compiler> <objects>... -L<dir>... -l<lib>... <flags>... -o <output> [-shared]`
pub fn link_invocation<P: AsRef<Path>>(config: &BuildConfig, objects: &[P], output: &Path) -> Invocation {
  let mut invocation = Invocation::new(&config.compiler);

  invocation
    .args(objects.iter().map(|o| o.as_ref().as_os_str()))
    .args(config.library_dirs.iter().map(|dir| prefixed("-L", dir)))
    .args(config.libraries.iter().map(|lib| format!("-l{lib}")))
    .args(&config.link_flags)
    .arg("-o")
    .arg(output);

  if config.output_type.is_library() {
    invocation.arg("-shared");
  }

  invocation
}

fn prefixed(flag: &str, path: &Path) -> OsString {
  let mut arg = OsString::from(flag);
  arg.push(path);
  arg
}
