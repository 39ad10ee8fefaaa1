use crate::error::{CpupError, Result};
use std::path::{Path, PathBuf};

/// File whose presence marks a Cordova project root.
pub const MANIFEST_FILE: &str = "config.xml";

/// ProjectScannerAgent validates the project structure
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Validates the project structure
    pub fn validate(&self) -> Result<ProjectInfo> {
        if !self.project_path.exists() {
            return Err(CpupError::InvalidPath(self.project_path.clone()));
        }

        let project_path = self
            .project_path
            .canonicalize()
            .map_err(|_| CpupError::InvalidPath(self.project_path.clone()))?;

        let manifest_path = project_path.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(CpupError::MissingManifest(project_path));
        }

        Ok(ProjectInfo {
            project_path,
            manifest_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project_path: PathBuf,
    pub manifest_path: PathBuf,
}
