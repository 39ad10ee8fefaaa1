use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpupError {
    #[error("Project path '{}' does not exist", .0.display())]
    InvalidPath(PathBuf),

    #[error("'{}' is not a Cordova project (config.xml not found)", .0.display())]
    MissingManifest(PathBuf),

    #[error("Failed to list installed plugins: {0}")]
    Listing(String),

    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CpupError>;
