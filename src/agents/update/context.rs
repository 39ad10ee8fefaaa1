/// Outcome of checking one installed plugin against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub plugin: String,
    pub current_version: String,
    /// Absent when the registry lookup failed
    pub latest_version: Option<String>,
    pub has_update: bool,
    pub error: Option<String>,
}

impl UpdateResult {
    pub fn checked(
        plugin: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
        has_update: bool,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            current_version: current_version.into(),
            latest_version: Some(latest_version.into()),
            has_update,
            error: None,
        }
    }

    pub fn failed(
        plugin: impl Into<String>,
        current_version: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            current_version: current_version.into(),
            latest_version: None,
            has_update: false,
            error: Some(error.into()),
        }
    }
}

/// Results of a check pass, in listing order
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub results: Vec<UpdateResult>,
}

impl CheckReport {
    pub fn new(results: Vec<UpdateResult>) -> Self {
        Self { results }
    }

    /// Entries eligible for the interactive update stage
    pub fn outdated(&self) -> Vec<&UpdateResult> {
        self.results.iter().filter(|r| r.has_update).collect()
    }

    /// Entries whose registry lookup failed
    pub fn failures(&self) -> Vec<&UpdateResult> {
        self.results.iter().filter(|r| r.error.is_some()).collect()
    }

    pub fn is_up_to_date(&self) -> bool {
        self.total_updates() == 0
    }

    pub fn total_updates(&self) -> usize {
        self.results.iter().filter(|r| r.has_update).count()
    }
}

/// Tracks what happened during the interactive update stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    /// Plugin id and failure message
    pub failed: Vec<(String, String)>,
}

impl UpdateSummary {
    pub fn attempted(&self) -> usize {
        self.updated.len() + self.failed.len()
    }
}
