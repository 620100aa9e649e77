use anyhow::Result;
use running_process_size::cli::{self, print_usage};
use running_process_size::report::{self, ReportConfig};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    // Unknown flags and a wrong argument count are not failures, just nothing to do
    let Some(args) = cli::parse_args_from(std::env::args_os()) else {
        print_usage();
        return Ok(());
    };

    init_tracing(args.debug);

    let Some(config) = ReportConfig::from_cli(&args) else {
        return Ok(());
    };

    if let Some(table) = report::run(&config) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(table.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
