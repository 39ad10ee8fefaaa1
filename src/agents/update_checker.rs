use crate::agents::cordova_cli::CordovaAgent;
use crate::agents::update::{CheckReport, UpdateResult};
use crate::cordova::{InstalledPlugin, PluginListParser};
use crate::error::Result;
use crate::repository::{RegistryClient, VersionStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// UpdateChecker compares every installed plugin with the registry.
///
/// Lookups run strictly one after another. A failed lookup becomes an error
/// entry in the report and never aborts the batch; only a failed listing is
/// fatal.
pub struct UpdateChecker {
    registry: Arc<dyn RegistryClient>,
    parser: Arc<dyn PluginListParser>,
    version_strategy: Arc<dyn VersionStrategy>,
}

impl UpdateChecker {
    pub fn new(
        registry: Arc<dyn RegistryClient>,
        parser: Arc<dyn PluginListParser>,
        version_strategy: Arc<dyn VersionStrategy>,
    ) -> Self {
        Self {
            registry,
            parser,
            version_strategy,
        }
    }

    /// Installed plugins as reported by the Cordova CLI
    pub fn installed_plugins(&self, cordova: &CordovaAgent) -> Result<Vec<InstalledPlugin>> {
        let raw = cordova.list_plugins()?;
        let plugins = self.parser.parse(&raw);
        tracing::debug!(count = plugins.len(), "parsed plugin listing");
        Ok(plugins)
    }

    pub fn check(&self, cordova: &CordovaAgent) -> Result<CheckReport> {
        let plugins = self.installed_plugins(cordova)?;

        let pb = ProgressBar::new(plugins.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        let mut results = Vec::with_capacity(plugins.len());
        for plugin in &plugins {
            pb.set_message(format!("Checking {}", plugin.id));
            results.push(self.check_plugin(plugin));
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(CheckReport::new(results))
    }

    fn check_plugin(&self, plugin: &InstalledPlugin) -> UpdateResult {
        match self.registry.fetch_latest_version(&plugin.id) {
            Ok(latest) => {
                let has_update = self.version_strategy.is_upgrade(&plugin.version, &latest);
                UpdateResult::checked(&plugin.id, &plugin.version, latest, has_update)
            }
            Err(e) => {
                tracing::warn!(plugin = %plugin.id, error = %e, "registry lookup failed");
                UpdateResult::failed(&plugin.id, &plugin.version, e.to_string())
            }
        }
    }
}
