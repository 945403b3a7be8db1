//! Per-package results of an install run.

use serde::Serialize;

use crate::package::Requirement;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Succeeded,
    /// `code` is `None` when the process was killed by a signal
    Failed { code: Option<i32> },
    /// Dry run; nothing was executed
    Planned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    pub requirement: String,
    pub command: Vec<String>,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl InstallOutcome {
    pub fn new(requirement: &Requirement, command: Vec<String>, status: OutcomeStatus) -> Self {
        Self {
            requirement: requirement.target(),
            command,
            status,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    pub fn failures(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
