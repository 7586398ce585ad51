//! End-to-end run: scan, probe, print, save.

use crate::aggregate::run_probes;
use crate::config::{ConsoleFormat, Effective};
use crate::error::FatalError;
use crate::models::RunSummary;
use crate::output;
use crate::scan::{scan_directory, ScanOptions};
use tracing::debug;

/// Execute one run with resolved settings.
///
/// Returns the summary once the report is on disk. Any `Err` means no
/// report was written.
pub fn run(eff: &Effective) -> Result<RunSummary, FatalError> {
    let human = eff.format == ConsoleFormat::Human;
    if let Some(cfg) = &eff.config_path {
        debug!(config = %cfg.display(), "using config file");
        if human {
            eprintln!("{} Using config: {}", crate::utils::info_prefix(), cfg.display());
        }
    }

    let opts = ScanOptions {
        extensions: eff.extensions.clone(),
        exclude: eff.exclude.clone(),
        skip: vec![eff.output.clone()],
    };
    if human {
        output::print_discovering(&eff.root);
    }
    let found = scan_directory(&eff.root, &opts)?;
    if human {
        output::print_found(found.files.len());
    }

    let summary = run_probes(&eff.root, &found.files, |p| {
        if human {
            output::print_testing(p);
        }
    });

    output::print_summary(&summary, &found.unreadable, eff.format)?;
    output::write_report(&summary, &eff.output)?;
    if human {
        output::print_saved(&eff.output);
    }
    Ok(summary)
}
