/// Configuration file read when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "build.json";

/// Guide document written next to the configuration by `init`.
pub const GUIDE_FILE: &str = "BUILD_GUIDE.md";

/// Extension given to every object file in the build directory.
pub const OBJECT_EXTENSION: &str = "o";

/// File name suffixes recognised as C++ sources when scanning a directory.
pub const CPP_EXTENSIONS: &[&str] = &[".cpp", ".cc", ".cxx", ".c++", ".C"];
