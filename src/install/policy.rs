//! What to do when a package manager invocation fails.

use std::fmt;

use crate::runtime::ProcessExit;

/// Failure handling for a non-zero package manager exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Carry on without reporting anything
    #[default]
    Ignore,
    /// Log a warning and carry on
    Log,
    /// Stop at the first failed install
    FailFast,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Ignore => write!(f, "ignore"),
            FailurePolicy::Log => write!(f, "log"),
            FailurePolicy::FailFast => write!(f, "fail-fast"),
        }
    }
}

/// An install that exited unsuccessfully under [`FailurePolicy::FailFast`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallFailed {
    pub target: String,
    pub exit: ProcessExit,
}

impl fmt::Display for InstallFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to install {} ({}). Remaining packages were skipped.",
            self.target, self.exit
        )
    }
}

impl std::error::Error for InstallFailed {}
