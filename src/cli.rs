//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use idxstrip::StripError;
use idxstrip::output::OutputMode;

/// idxstrip - Strip numeric suffixes from index names in SQL dumps
#[derive(Parser, Debug)]
#[command(
    name = "idxstrip",
    version,
    about = "Strip numeric suffixes from backtick-quoted index names",
    long_about = "Rewrite CREATE INDEX, RENAME INDEX and DROP INDEX lines of a SQL file.\n\n\
                  Backtick-quoted identifiers on those lines lose their trailing digits \
                  (`idx_email2` becomes `idx_email`). Every other line is printed unchanged."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Path to the SQL file to rewrite
    #[arg(value_name = "SQL_FILE")]
    pub sql_file: Option<PathBuf>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(sql_file) = cli.sql_file else {
        return Err(StripError::usage(env!("CARGO_BIN_NAME")).into());
    };

    if !cli.extra.is_empty() {
        log::debug!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    commands::strip(&sql_file, output_mode)
}
