pub mod plugin_list;
pub mod version;

pub use plugin_list::{InstalledPlugin, PluginListParser, TextListParser};
pub use version::compare_versions;
