//! running-process-size - summarize recently launched processes from the system log
//!
//! This library queries the system log for a recent time window, groups the
//! launch records by process image path, and renders each image's on-disk size
//! together with the process IDs that ran it.

pub mod cli;
pub mod log_extractor;
pub mod process_stats;
pub mod report;
pub mod table_output;
