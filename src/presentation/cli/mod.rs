pub mod report;

use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::debug;

use crate::application::use_cases::diff_manifests::{DiffManifestsConfig, DiffManifestsUseCase};
use report::{DiffReport, ReportOptions};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// manifest-diff - Compare project revisions between two repo manifests
#[derive(Parser, Debug)]
#[command(name = "manifest-diff")]
#[command(about = "Compare project revisions between two repo manifests")]
#[command(override_usage = "manifest-diff <OLD_MANIFEST> <NEW_MANIFEST>")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Old and new manifest files, in that order
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Compare two manifests
    Diff { old: PathBuf, new: PathBuf },
    /// Anything other than exactly two manifests
    Usage,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        match self.manifests.as_slice() {
            [old, new] => Invocation::Diff {
                old: old.clone(),
                new: new.clone(),
            },
            _ => Invocation::Usage,
        }
    }

    /// Usage line printed when the argument count is wrong
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// CLI application runner
pub struct CliApp {
    invocation: Invocation,
}

impl CliApp {
    /// Parse the process arguments
    ///
    /// `--help` and `--version` are answered here and exit immediately.
    /// Arguments clap cannot make sense of fall back to the usage message.
    pub fn new() -> Self {
        let invocation = match Cli::try_parse() {
            Ok(cli) => cli.invocation(),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                debug!(error = %e, "unrecognized arguments");
                Invocation::Usage
            }
        };
        Self { invocation }
    }

    pub fn from_invocation(invocation: Invocation) -> Self {
        Self { invocation }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.execute(&mut out) {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    /// Run the invocation, writing the report (or usage) to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        match &self.invocation {
            Invocation::Usage => {
                writeln!(out, "{}", Cli::usage())?;
                Ok(())
            }
            Invocation::Diff { old, new } => {
                let config = DiffManifestsConfig::new(old, new);
                let diff = DiffManifestsUseCase::new(config).execute()?;

                DiffReport::new(&diff, ReportOptions::default()).write_to(out)?;
                Ok(())
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
