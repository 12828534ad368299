use std::fmt;

/// Operating system variants that decide artifact naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime.
  ///
  /// Unix flavours other than macOS are named like Linux.
  pub fn current() -> Self {
    match std::env::consts::OS {
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      _ => Self::Linux,
    }
  }

  /// Name used in log fields, matching `std::env::consts::OS`.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "macos",
      Self::Windows => "windows",
    }
  }

  /// Suffix appended to executables, including the leading dot.
  pub fn executable_suffix(&self) -> &'static str {
    match self {
      Self::Windows => ".exe",
      Self::Linux | Self::MacOs => "",
    }
  }

  /// Suffix appended to shared libraries, including the leading dot.
  pub fn shared_library_suffix(&self) -> &'static str {
    match self {
      Self::Linux => ".so",
      Self::MacOs => ".dylib",
      Self::Windows => ".dll",
    }
  }

  /// Prefix conventionally given to shared library file names.
  pub fn shared_library_prefix(&self) -> &'static str {
    match self {
      Self::Windows => "",
      Self::Linux | Self::MacOs => "lib",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
