use anyhow::Result;
use log::{debug, info, warn};

use crate::{
    package::{Manifest, Requirement},
    runtime::{ProcessExit, Runtime},
};

pub mod config;
mod policy;
mod report;

pub use config::{Config, DEFAULT_PROGRAM, Options};
pub use policy::{FailurePolicy, InstallFailed};
pub use report::{InstallOutcome, InstallReport, OutcomeStatus};

/// Subcommand passed to the package manager.
pub const INSTALL_SUBCOMMAND: &str = "install";

#[tracing::instrument(skip(runtime))]
pub async fn install<R: Runtime>(runtime: R, options: Options) -> Result<InstallReport> {
    let config = Config::new(runtime, options)?;
    run(config).await
}

#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime>(config: Config<R>) -> Result<InstallReport> {
    let manifest = config.manifest()?;
    let installer = config.into_installer();
    installer.install_all(&manifest).await
}

/// The full command line for installing `requirement`:
/// `[program, "install", target]`.
pub fn install_command(program: &str, requirement: &Requirement) -> Vec<String> {
    vec![
        program.to_string(),
        INSTALL_SUBCOMMAND.to_string(),
        requirement.target(),
    ]
}

pub struct Installer<R: Runtime> {
    pub runtime: R,
    pub program: String,
    pub policy: FailurePolicy,
    pub dry_run: bool,
    /// Print dry-run commands to stdout
    pub echo: bool,
}

impl<R: Runtime> Installer<R> {
    pub fn new(runtime: R, program: impl Into<String>) -> Self {
        Self {
            runtime,
            program: program.into(),
            policy: FailurePolicy::default(),
            dry_run: false,
            echo: true,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run the package manager once for `requirement` and wait for it.
    ///
    /// The exit status is recorded in the outcome but never turned into an
    /// error here; only a failure to start the process is.
    #[tracing::instrument(skip(self))]
    pub async fn install(&self, requirement: &Requirement) -> Result<InstallOutcome> {
        let command = install_command(&self.program, requirement);

        if self.dry_run {
            if self.echo {
                println!("{}", command.join(" "));
            }
            return Ok(InstallOutcome::new(
                requirement,
                command,
                OutcomeStatus::Planned,
            ));
        }

        info!("Installing {}", requirement);
        let exit = self.runtime.run(&command).await?;
        let status = if exit.success() {
            OutcomeStatus::Succeeded
        } else {
            OutcomeStatus::Failed { code: exit.code }
        };

        Ok(InstallOutcome::new(requirement, command, status))
    }

    /// Install every requirement in manifest order, one process at a time.
    #[tracing::instrument(skip(self, manifest))]
    pub async fn install_all(&self, manifest: &Manifest) -> Result<InstallReport> {
        let mut report = InstallReport::default();

        for requirement in manifest.iter() {
            let outcome = self.install(requirement).await?;

            if let OutcomeStatus::Failed { code } = outcome.status {
                let exit = ProcessExit { code };
                match self.policy {
                    FailurePolicy::Ignore => {
                        debug!("Ignoring failed install of {} ({})", requirement, exit);
                    }
                    FailurePolicy::Log => {
                        warn!("Failed to install {} ({}), continuing", requirement, exit);
                    }
                    FailurePolicy::FailFast => {
                        return Err(InstallFailed {
                            target: requirement.target(),
                            exit,
                        }
                        .into());
                    }
                }
            }

            report.outcomes.push(outcome);
        }

        Ok(report)
    }
}
