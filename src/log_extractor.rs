//! System log extraction
//!
//! Runs the log-query tool as `log show --last <period> --style=json` and
//! decodes its stdout into [`LogEntry`] records. Every failure is reported on
//! stdout and degrades to an empty entry list, so the rest of the pipeline
//! always runs.

use crate::cli::DEFAULT_LOG_COMMAND;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// One record of the log tool's JSON output.
///
/// The tool emits many more fields per record; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "traceID")]
    pub trace_id: u64,
    /// Executable that produced the record (absent or null for some records)
    #[serde(rename = "processImagePath", default)]
    pub process_image_path: Option<String>,
    #[serde(rename = "processID")]
    pub process_id: i64,
}

impl LogEntry {
    /// Image path if present and non-empty
    pub fn image_path(&self) -> Option<&str> {
        self.process_image_path
            .as_deref()
            .filter(|path| !path.is_empty())
    }
}

/// Errors that can occur while querying the log tool
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Carries the tool's stderr, or `unknown` when it is not valid UTF-8
    #[error("{stderr}")]
    Exit { status: ExitStatus, stderr: String },

    #[error("failed to decode log output: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode the tool's stdout as a JSON array of [`LogEntry`]
pub fn decode_log_output(stdout: &[u8]) -> Result<Vec<LogEntry>, ExtractError> {
    let entries: Vec<LogEntry> = serde_json::from_slice(stdout)?;
    Ok(entries)
}

/// The external log-query command
#[derive(Debug, Clone)]
pub struct LogCommand {
    program: PathBuf,
}

impl Default for LogCommand {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_COMMAND)
    }
}

impl LogCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the tool for a given period
    pub fn args(period: &str) -> [&str; 4] {
        ["show", "--last", period, "--style=json"]
    }

    /// Run the tool and decode its output.
    ///
    /// Both pipes are drained to the end before the exit status is looked at.
    pub fn run(&self, period: &str) -> Result<Vec<LogEntry>, ExtractError> {
        debug!(program = %self.program.display(), period, "launching log query");

        let output = Command::new(&self.program)
            .args(Self::args(period))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExtractError::Spawn {
                command: self.program.display().to_string(),
                source,
            })?;

        trace!(
            status = ?output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "log query finished"
        );

        if !output.status.success() {
            let stderr =
                String::from_utf8(output.stderr).unwrap_or_else(|_| "unknown".to_string());
            return Err(ExtractError::Exit {
                status: output.status,
                stderr,
            });
        }

        let entries = decode_log_output(&output.stdout)?;
        debug!(entries = entries.len(), "decoded log entries");
        Ok(entries)
    }
}

/// Fetch the log entries for the last `period`, or nothing on any failure.
///
/// Failures are printed as `ERROR: <message>` on stdout.
pub fn last_log_for_period(command: &LogCommand, period: &str) -> Vec<LogEntry> {
    match command.run(period) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "log query produced no entries");
            println!("ERROR: {}", err);
            Vec::new()
        }
    }
}
