use crate::cordova::compare_versions;
use crate::error::Result;
use std::sync::Arc;

pub mod factory;
pub mod npm;

pub use factory::RegistryFactory;
pub use npm::NpmRegistry;

/// Source of the latest published version of a plugin.
pub trait RegistryClient: Send + Sync {
    fn fetch_latest_version(&self, plugin_id: &str) -> Result<String>;
}

pub trait VersionStrategy: Send + Sync {
    fn is_upgrade(&self, current: &str, candidate: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct DefaultVersionStrategy;

impl VersionStrategy for DefaultVersionStrategy {
    fn is_upgrade(&self, current: &str, candidate: &str) -> bool {
        compare_versions(current, candidate)
    }
}

impl DefaultVersionStrategy {
    pub fn shared() -> Arc<dyn VersionStrategy> {
        Arc::new(Self)
    }
}
