use std::env;

/// Environment variable overriding the Cordova CLI executable.
pub const CORDOVA_BIN_ENV: &str = "CPUP_CORDOVA_BIN";
/// Environment variable overriding the npm CLI executable.
pub const NPM_BIN_ENV: &str = "CPUP_NPM_BIN";

/// External programs the tool drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub cordova_bin: String,
    pub npm_bin: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        if cfg!(target_os = "windows") {
            Self {
                cordova_bin: "cordova.cmd".to_string(),
                npm_bin: "npm.cmd".to_string(),
            }
        } else {
            Self {
                cordova_bin: "cordova".to_string(),
                npm_bin: "npm".to_string(),
            }
        }
    }
}

impl ToolConfig {
    /// Defaults, overridden by `CPUP_CORDOVA_BIN` / `CPUP_NPM_BIN` when set.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            env::var(CORDOVA_BIN_ENV).ok(),
            env::var(NPM_BIN_ENV).ok(),
        )
    }

    fn with_overrides(mut self, cordova: Option<String>, npm: Option<String>) -> Self {
        if let Some(bin) = cordova.filter(|b| !b.trim().is_empty()) {
            self.cordova_bin = bin;
        }
        if let Some(bin) = npm.filter(|b| !b.trim().is_empty()) {
            self.npm_bin = bin;
        }
        self
    }
}
