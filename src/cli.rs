//! CLI argument parsing for running-process-size
//!
//! The period argument is collected as a list and checked by
//! [`validate_period`], so a wrong argument count prints the usage text and
//! exits cleanly instead of producing a clap error. Unrecognised flags count
//! as extra arguments.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default location of the system log-query tool
pub const DEFAULT_LOG_COMMAND: &str = "/usr/bin/log";

/// Usage text printed when the argument count is wrong
pub const USAGE: &str = "USAGE: RunningProcessSize <num>[s/m/h]

WARNING: entering 2h+ will take a while to parse...
";

#[derive(Parser, Debug)]
#[command(name = "running-process-size")]
#[command(version)]
#[command(
    about = "List processes launched in a recent log window with their image sizes",
    long_about = None
)]
pub struct Cli {
    /// How far back to search the system log (e.g. 30s, 10m, 2h)
    #[arg(value_name = "PERIOD")]
    pub period: Vec<String>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Log-query tool to invoke as `<tool> show --last <PERIOD> --style=json`
    #[arg(
        long = "log-command",
        value_name = "PATH",
        default_value = DEFAULT_LOG_COMMAND,
        hide = true
    )]
    pub log_command: PathBuf,
}

/// Parse the command line, or `None` if it contains an unrecognised flag.
///
/// Help, version and other clap errors exit the process as usual.
pub fn parse_args_from<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(err) if err.kind() == ErrorKind::UnknownArgument => None,
        Err(err) => err.exit(),
    }
}

/// Return the period iff exactly one non-empty positional argument was given.
///
/// A wrong argument count prints the usage text; an empty period is silently
/// treated as nothing to do. The string is otherwise passed through untouched,
/// the log tool is the one that decides whether it is a valid duration.
pub fn validate_period(args: &[String]) -> Option<String> {
    match args {
        [period] if period.is_empty() => None,
        [period] => Some(period.clone()),
        _ => {
            print_usage();
            None
        }
    }
}

/// Print the usage text to stdout
pub fn print_usage() {
    println!("{}", USAGE);
}
