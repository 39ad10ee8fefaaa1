pub mod command_runner;
pub mod cordova_cli;
pub mod project_scanner;
pub mod update_checker;

pub mod update;

pub use cordova_cli::CordovaAgent;
pub use project_scanner::ProjectScannerAgent;
pub use update_checker::UpdateChecker;
