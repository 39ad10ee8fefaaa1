use crate::agents::cordova_cli::CordovaAgent;
use crate::agents::update::context::{UpdateResult, UpdateSummary};
use crate::agents::update::interaction::UpdateInteraction;
use crate::error::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Walks the outdated plugins one at a time, asking before each update.
///
/// An accepted update removes the plugin (forced) and adds it back by id so
/// Cordova installs the latest registry version. Updates mutate the
/// project's plugin state on disk, so they never overlap.
pub struct InteractiveUpdater<'a, R, W> {
    cordova: &'a CordovaAgent,
    interaction: &'a mut UpdateInteraction<R, W>,
}

impl<'a, R: BufRead, W: Write> InteractiveUpdater<'a, R, W> {
    pub fn new(cordova: &'a CordovaAgent, interaction: &'a mut UpdateInteraction<R, W>) -> Self {
        Self {
            cordova,
            interaction,
        }
    }

    pub fn apply(&mut self, outdated: &[&UpdateResult]) -> Result<UpdateSummary> {
        let mut summary = UpdateSummary::default();

        for result in outdated {
            let latest = result.latest_version.as_deref().unwrap_or_default();
            if !self
                .interaction
                .confirm_plugin(&result.plugin, &result.current_version, latest)?
            {
                summary.skipped.push(result.plugin.clone());
                continue;
            }

            match self.update_plugin(&result.plugin) {
                Ok(()) => {
                    println!(
                        "{}",
                        format!("✓ {} updated to {}", result.plugin, latest).green()
                    );
                    summary.updated.push(result.plugin.clone());
                }
                Err(e) => {
                    tracing::warn!(plugin = %result.plugin, error = %e, "plugin update failed");
                    eprintln!(
                        "{}",
                        format!("✗ Failed to update {}: {}", result.plugin, e).red()
                    );
                    summary.failed.push((result.plugin.clone(), e.to_string()));
                }
            }
        }

        Ok(summary)
    }

    fn update_plugin(&self, plugin_id: &str) -> Result<()> {
        self.cordova.remove_plugin(plugin_id)?;
        self.cordova.add_plugin(plugin_id)
    }
}
