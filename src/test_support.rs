//! Scripted stand-ins for the external CLIs.

use crate::agents::command_runner::CommandRunner;
use crate::error::{CpupError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Records every invocation and answers from a script keyed by the full
/// command line (`"cordova plugin list"`). Unscripted commands succeed with
/// empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, message: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }

    pub fn working_dirs(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, cwd)| cwd.clone())
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls
            .lock()
            .unwrap()
            .push((command.clone(), cwd.to_path_buf()));

        match self.responses.get(&command) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(message)) => Err(CpupError::CommandExecution(message.clone())),
            None => Ok(String::new()),
        }
    }
}
