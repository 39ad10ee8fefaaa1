use crate::agents::command_runner::CommandRunner;
use crate::error::{CpupError, Result};
use crate::repository::RegistryClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// npm registry client built on `npm view <id> version`.
///
/// Lookups run inside the project so a project-level `.npmrc` (private
/// registries, scopes) is honoured.
pub struct NpmRegistry {
    runner: Arc<dyn CommandRunner>,
    program: String,
    cwd: PathBuf,
}

impl NpmRegistry {
    pub fn new<P: AsRef<Path>>(
        runner: Arc<dyn CommandRunner>,
        program: impl Into<String>,
        cwd: P,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }
}

impl RegistryClient for NpmRegistry {
    fn fetch_latest_version(&self, plugin_id: &str) -> Result<String> {
        let stdout = self
            .runner
            .run(&self.program, &["view", plugin_id, "version"], &self.cwd)?;

        let version = stdout.trim();
        if version.is_empty() {
            return Err(CpupError::CommandExecution(format!(
                "npm returned no version for '{plugin_id}'"
            )));
        }

        tracing::debug!(plugin = plugin_id, version, "resolved latest version");
        Ok(version.to_string())
    }
}
