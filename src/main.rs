//! filecheck CLI binary entry point.
//! Resolves settings, runs the pipeline and maps the outcome to an exit code.

use clap::Parser;
use filecheck::cli::Cli;
use filecheck::{config, runner, utils};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let outcome = config::resolve_effective(&cli.overrides(), &cwd).and_then(|eff| runner::run(&eff));
    match outcome {
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    }
}
