use crate::agents::command_runner::CommandRunner;
use crate::error::{CpupError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CordovaAgent drives the Cordova CLI inside a single project.
pub struct CordovaAgent {
    runner: Arc<dyn CommandRunner>,
    program: String,
    project_path: PathBuf,
}

impl CordovaAgent {
    pub fn new<P: AsRef<Path>>(
        runner: Arc<dyn CommandRunner>,
        program: impl Into<String>,
        project_path: P,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Raw output of `cordova plugin list`
    pub fn list_plugins(&self) -> Result<String> {
        self.cordova(&["plugin", "list"]).map_err(|e| match e {
            CpupError::CommandExecution(msg) => CpupError::Listing(msg),
            other => CpupError::Listing(other.to_string()),
        })
    }

    /// Remove a plugin, bypassing dependency checks
    pub fn remove_plugin(&self, plugin_id: &str) -> Result<()> {
        self.cordova(&["plugin", "remove", plugin_id, "--force"])
            .map(|_| ())
    }

    /// Add a plugin by id; Cordova resolves the latest registry version
    pub fn add_plugin(&self, plugin_id: &str) -> Result<()> {
        self.cordova(&["plugin", "add", plugin_id]).map(|_| ())
    }

    fn cordova(&self, args: &[&str]) -> Result<String> {
        self.runner.run(&self.program, args, &self.project_path)
    }
}
