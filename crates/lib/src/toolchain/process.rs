//! Running invocations as child processes.

use std::process::Command;

use tracing::{debug, info};

use crate::toolchain::{Invocation, ToolError, ToolRunner};

/// Spawns each invocation as a child process and waits for it.
///
/// The child inherits stdin, stdout and stderr, so compiler diagnostics reach
/// the terminal directly. There is no timeout: a tool that never exits blocks
/// the build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
  fn run(&mut self, invocation: &Invocation) -> Result<(), ToolError> {
    info!(command = %invocation, "executing");

    let status = Command::new(&invocation.program)
      .args(&invocation.args)
      .status()
      .map_err(|e| ToolError::Spawn {
        program: invocation.program.clone(),
        source: e,
      })?;

    debug!(program = %invocation.program, status = %status, "process exited");

    if !status.success() {
      return Err(ToolError::Failed {
        command: invocation.to_string(),
        code: status.code(),
      });
    }

    Ok(())
  }
}
