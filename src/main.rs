use anyhow::Result;
use clap::Parser;
use pyreqs::install::{DEFAULT_PROGRAM, FailurePolicy, Options, install};
use std::path::PathBuf;

/// pyreqs - Python requirements installer
///
/// Runs `<pm> install <package>` (or `<package>==<version>` for pinned
/// entries) once per requirement, strictly in order.
///
/// Without --file, installs the built-in notebook, data-science, ML and
/// web-serving package list.
///
/// Examples:
///   pyreqs                               # Install the built-in list with pip
///   pyreqs -f requirements.txt           # Install from a requirements file
///   pyreqs --pm pip3 --on-failure log    # Use pip3 and warn on failures
#[derive(Parser, Debug)]
#[command(author, version = env!("PYREQS_VERSION"), about)]
struct Cli {
    /// Requirements file, one "name" or "name==version" per line
    #[arg(long = "file", short = 'f', env = "PYREQS_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Package manager executable
    #[arg(long = "pm", env = "PYREQS_PM", value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// What to do when an install exits with a non-zero status
    #[arg(long = "on-failure", value_enum, value_name = "POLICY", default_value_t = FailurePolicy::Ignore)]
    pub policy: FailurePolicy,

    /// Print the install commands without running them
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Print a JSON report of every install after the run
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            program: self.program.clone(),
            file: self.file.clone(),
            policy: self.policy,
            dry_run: self.dry_run,
            // The JSON report already carries every command
            quiet: self.json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = pyreqs::runtime::RealRuntime;

    let report = install(runtime, cli.options()).await?;
    if cli.json {
        println!("{}", report.to_json()?);
    }
    Ok(())
}
