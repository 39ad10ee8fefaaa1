use crate::agents::command_runner::CommandRunner;
use crate::config::ToolConfig;
use crate::repository::{NpmRegistry, RegistryClient};
use std::path::Path;
use std::sync::Arc;

pub struct RegistryFactory;

impl RegistryFactory {
    pub fn create_npm(
        runner: Arc<dyn CommandRunner>,
        config: &ToolConfig,
        project_path: &Path,
    ) -> Arc<dyn RegistryClient> {
        Arc::new(NpmRegistry::new(runner, config.npm_bin.as_str(), project_path))
    }
}
