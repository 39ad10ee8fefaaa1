use crate::error::{CpupError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Runs external programs. Every invocation names its working directory
/// explicitly; the process-wide current directory is never touched.
pub trait CommandRunner: Send + Sync {
    /// Runs `program args...` inside `cwd` and returns its stdout.
    /// A non-zero exit status is an error carrying the program's stderr.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String>;
}

/// [`CommandRunner`] backed by real child processes.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    fn ensure_success(output: &Output, command: &str) -> Result<()> {
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        Err(CpupError::CommandExecution(match output.status.code() {
            Some(code) if detail.is_empty() => format!("'{command}' exited with code {code}"),
            Some(code) => format!("'{command}' exited with code {code}: {detail}"),
            None => format!("'{command}' was terminated by a signal"),
        }))
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let command = format!("{} {}", program, args.join(" "));
        tracing::debug!(command = %command, cwd = %cwd.display(), "running");

        let output = Command::new(program)
            .current_dir(cwd)
            .args(args)
            .output()
            .map_err(|e| {
                CpupError::CommandExecution(format!("Failed to execute '{command}': {e}"))
            })?;

        Self::ensure_success(&output, &command)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
