//! buildhelper-lib: incremental build engine for small C++ projects.
//!
//! Given a validated [`config::BuildConfig`], the [`pipeline::BuildPipeline`]
//! compiles every stale source into an object file and links the objects into
//! an executable or shared library:
//! - `config`: loading `build.json` into a `BuildConfig`
//! - `staleness`: modification-time checks deciding what to recompile
//! - `toolchain`: compiler and linker invocations, run as child processes
//! - `pipeline`: the build / clean / rebuild state machine
//! - `platform`: filesystem access and platform artifact naming
//! - `init`: scaffolding for new projects

pub mod config;
pub mod consts;
pub mod init;
pub mod pipeline;
pub mod platform;
pub mod staleness;
pub mod toolchain;
