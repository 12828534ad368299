//! Platform conventions: operating system detection, the filesystem
//! capability used by the build engine, and artifact naming.

pub mod fs;
pub mod naming;
pub mod os;

pub use fs::{FileSystem, HostFs};
pub use naming::{object_file_path, output_file_name, output_file_path};
pub use os::Os;
