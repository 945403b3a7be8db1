use anyhow::{Result, anyhow};
use log::debug;
use std::path::PathBuf;

use super::{FailurePolicy, Installer};
use crate::{package::Manifest, runtime::Runtime};

/// Package manager invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "pip";

/// User-facing settings, usually straight from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub program: String,
    pub file: Option<PathBuf>,
    pub policy: FailurePolicy,
    pub dry_run: bool,
    /// Keep stdout free for a machine-readable report
    pub quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            file: None,
            policy: FailurePolicy::default(),
            dry_run: false,
            quiet: false,
        }
    }
}

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub program: String,
    pub file: Option<PathBuf>,
    pub policy: FailurePolicy,
    pub dry_run: bool,
    pub quiet: bool,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, options: Options) -> Result<Self> {
        let program = options.program.trim().to_string();
        if program.is_empty() {
            return Err(anyhow!("Package manager program cannot be empty"));
        }
        debug!(
            "Using package manager '{}' with failure policy '{}'",
            program, options.policy
        );

        Ok(Self {
            runtime,
            program,
            file: options.file,
            policy: options.policy,
            dry_run: options.dry_run,
            quiet: options.quiet,
        })
    }

    /// The requirements file if one was given, the built-in list otherwise.
    pub fn manifest(&self) -> Result<Manifest> {
        match &self.file {
            Some(path) => {
                debug!("Loading requirements from {}", path.display());
                Manifest::load(&self.runtime, path)
            }
            None => Ok(Manifest::builtin()),
        }
    }

    pub fn into_installer(self) -> Installer<R> {
        Installer::new(self.runtime, self.program)
            .with_policy(self.policy)
            .with_dry_run(self.dry_run)
            .with_echo(!self.quiet)
    }
}
