//! End-to-end report pipeline
//!
//! period -> log entries -> per-image aggregates -> rendered table

use crate::cli::Cli;
use crate::log_extractor::{last_log_for_period, LogCommand};
use crate::process_stats::aggregate;
use crate::table_output::render_table;
use std::path::PathBuf;
use tracing::debug;

/// Settings for a single report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Duration string handed to the log tool
    pub period: String,
    /// Path of the log-query tool
    pub log_command: PathBuf,
}

impl ReportConfig {
    /// Build a config from parsed arguments if exactly one non-empty period was given
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let period = crate::cli::validate_period(&cli.period)?;
        Some(Self {
            period,
            log_command: cli.log_command.clone(),
        })
    }
}

/// Run the pipeline and return the table text, or `None` if nothing was found
pub fn run(config: &ReportConfig) -> Option<String> {
    let command = LogCommand::new(&config.log_command);
    let entries = last_log_for_period(&command, &config.period);
    let processes = aggregate(&entries);

    debug!(
        entries = entries.len(),
        images = processes.len(),
        "aggregated log entries"
    );

    if processes.is_empty() {
        return None;
    }
    Some(render_table(&processes))
}
