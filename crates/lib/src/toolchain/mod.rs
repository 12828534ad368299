//! Compile and link actions.
//!
//! Compiler and linker runs are described as an [`Invocation`], an explicit
//! program plus argument list, and handed to a [`ToolRunner`]. Arguments are
//! never joined into a shell command line, so paths with spaces or shell
//! metacharacters reach the toolchain unchanged.

mod command;
mod process;

use std::ffi::OsString;
use std::fmt;
use std::io;

use thiserror::Error;

pub use command::{compile_invocation, link_invocation};
pub use process::ProcessRunner;

/// Errors from running an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
  /// The program could not be started at all.
  #[error("failed to start {program}")]
  Spawn { program: String, source: io::Error },

  /// The program ran and exited unsuccessfully. `code` is `None` when it was
  /// terminated by a signal.
  #[error("{command} {}", exit_description(*code))]
  Failed { command: String, code: Option<i32> },
}

fn exit_description(code: Option<i32>) -> String {
  match code {
    Some(code) => format!("exited with code {code}"),
    None => "was terminated by a signal".to_string(),
  }
}

/// A single external program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<OsString>,
}

impl Invocation {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }

  pub fn arg(&mut self, arg: impl Into<OsString>) -> &mut Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(&mut self, args: I) -> &mut Self
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", arg.to_string_lossy())?;
    }
    Ok(())
  }
}

/// Runs invocations to completion.
///
/// Implementations block until the tool exits; success is decided by the
/// exit status alone.
pub trait ToolRunner {
  fn run(&mut self, invocation: &Invocation) -> Result<(), ToolError>;
}
