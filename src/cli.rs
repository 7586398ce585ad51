//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "filecheck",
    version,
    about = "Simple file test runner",
    long_about = "filecheck — walk a directory, check that each file is readable, count lines and bytes, and write a JSON report.\n\nConfiguration precedence: CLI > filecheck.toml > defaults.",
    after_help = "Examples:\n  filecheck\n  filecheck src --extensions .rs .toml\n  filecheck . --exclude 'target/**' --output reports/files.json\n  filecheck docs --format json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Directory to test (default: current directory)")]
    pub directory: Option<String>,
    #[arg(long, num_args = 1.., value_name = "EXT", help = "File extensions to test (e.g. --extensions .py .js .txt)")]
    pub extensions: Option<Vec<String>>,
    #[arg(long, help = "Output file for JSON report (default: test_report.json)")]
    pub output: Option<String>,
    #[arg(long, num_args = 1.., value_name = "GLOB", help = "Skip files whose root-relative path matches a glob")]
    pub exclude: Option<Vec<String>>,
    #[arg(long, help = "Console output mode: human|json (default: human)")]
    pub format: Option<String>,
    #[arg(long, help = "Path to filecheck.toml|yaml (default: discovered in current dir)")]
    pub config: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            directory: self.directory.clone(),
            extensions: self.extensions.clone(),
            exclude: self.exclude.clone(),
            output: self.output.clone(),
            format: self.format.clone(),
            config: self.config.clone(),
        }
    }
}
