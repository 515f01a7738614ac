use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use gods_config::{DataConfig, GeneralConfig};

/// Top-level CLI parser for the `gods` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gods",
    version,
    about = "Look up deity names and pick ones that are not taken yet"
)]
pub struct Cli {
    /// Name to look up, or a file of names (one per line) ending in the batch
    /// suffix. Omit to start the interactive menu.
    pub target: Option<String>,

    /// Reference table (tab-separated). Overrides `data.reference_path`.
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Used-name log (tab-separated). Overrides `data.used_log_path`.
    #[arg(long)]
    pub used_log: Option<PathBuf>,

    /// Quiet mode (errors only in the log)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Outcome of parsing the command line.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Arguments clap rejected (extra targets, unknown flags). Answered with
    /// the usage text on stdout rather than clap's error.
    Malformed(clap::Error),
}

/// Parse `args`. Help and version requests come back as `Err` so the caller
/// can let clap print them and exit.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(error) if is_informational(error.kind()) => Err(error),
        Err(error) => Ok(Invocation::Malformed(error)),
    }
}

const fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// What the process should do for a given invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Lookup(String),
    Batch(PathBuf),
    Usage,
}

impl Cli {
    /// Resolve the run mode. Single-character targets are rejected.
    #[must_use]
    pub fn mode(&self, general: &GeneralConfig) -> Mode {
        let Some(target) = self.target.as_deref().map(str::trim) else {
            return Mode::Interactive;
        };
        if target.chars().count() <= 1 {
            Mode::Usage
        } else if general.is_batch_file(target) {
            Mode::Batch(PathBuf::from(target))
        } else {
            Mode::Lookup(target.to_string())
        }
    }

    /// Data file locations with command-line overrides applied.
    #[must_use]
    pub fn data_paths(&self, data: &DataConfig) -> DataConfig {
        DataConfig {
            reference_path: self
                .reference
                .clone()
                .unwrap_or_else(|| data.reference_path.clone()),
            used_log_path: self
                .used_log
                .clone()
                .unwrap_or_else(|| data.used_log_path.clone()),
        }
    }
}
