use std::io::{self, Write};

use anyhow::Context;
use gods_config::{DataConfig, GodsConfig};
use gods_dialog::Console;

mod cli;
mod commands;
mod context;

fn main() {
    if let Err(error) = run() {
        eprintln!("gods error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let invocation = cli::parse_from(std::env::args_os()).unwrap_or_else(|error| error.exit());
    let config = GodsConfig::load().context("failed to load gods configuration")?;

    let cli = match invocation {
        cli::Invocation::Run(cli) => cli,
        cli::Invocation::Malformed(error) => {
            init_tracing(false, config.general.debug)?;
            tracing::debug!(error = %error.kind(), "rejected command line");
            return commands::lookup::usage(&mut io::stdout().lock(), &config.general.batch_suffix);
        }
    };
    init_tracing(cli.quiet, cli.verbose || config.general.debug)?;

    let paths = cli.data_paths(&config.data);
    match cli.mode(&config.general) {
        cli::Mode::Usage => {
            commands::lookup::usage(&mut io::stdout().lock(), &config.general.batch_suffix)
        }
        cli::Mode::Lookup(query) => lookup(&paths, &[query]),
        cli::Mode::Batch(path) => {
            let queries = commands::lookup::read_batch(&path)?;
            lookup(&paths, &queries)
        }
        cli::Mode::Interactive => interactive(&paths),
    }
}

fn lookup(paths: &DataConfig, queries: &[String]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    let table = context::load_reference(&paths.reference_path, &mut out)?;
    commands::lookup::run(&table, queries, &mut out)?;
    out.flush()?;
    Ok(())
}

fn interactive(paths: &DataConfig) -> anyhow::Result<()> {
    let (table, used) = {
        let mut out = io::stdout().lock();
        let table = context::load_reference(&paths.reference_path, &mut out)?;
        let used = context::load_used_log(&paths.used_log_path, &mut out)?;
        (table, used)
    };

    let mut session = context::Session::new(table, used, paths.used_log_path.clone());
    let mut console = Console::stdio();
    commands::menu::run(&mut console, &mut session).context("interactive session ended")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GODS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
