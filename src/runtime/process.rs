//! Child process execution.

use anyhow::{Context, Result, anyhow};
use std::fmt;
use tokio::process::Command;

use super::RealRuntime;

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn run_impl(&self, command: &[String]) -> Result<ProcessExit> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| anyhow!("Cannot run an empty command"))?;

        // stdin/stdout/stderr are inherited by default for status()
        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .with_context(|| format!("Failed to run '{}'", program))?;

        Ok(ProcessExit {
            code: status.code(),
        })
    }
}
