//! Fixed-width table output for aggregated process images
//!
//! Rows are sorted by image path in descending order. Columns are padded to a
//! minimum width and never truncated, so long values push the rest of the row
//! to the right.

use crate::process_stats::ProcessAggregate;
use std::collections::HashMap;

/// Minimum width of the process ID column
pub const C1_WIDTH: usize = 25;

/// Minimum width of the process image column
pub const C2_WIDTH: usize = 50;

/// Length of the dashed separator line
pub const LINE_WIDTH: usize = C1_WIDTH + C2_WIDTH + C1_WIDTH;

/// Pad `item` with trailing spaces up to `min_width` characters
pub fn pad(item: &str, min_width: usize) -> String {
    format!("{:<width$}", item, width = min_width)
}

/// Process IDs as one string, each preceded by a space (" 1 2 3")
pub fn format_process_ids(process_ids: &[i64]) -> String {
    process_ids
        .iter()
        .map(|pid| format!(" {}", pid))
        .collect()
}

fn format_row(ids: &str, image: &str, size: &str) -> String {
    format!("{} {} {}", pad(ids, C1_WIDTH), pad(image, C2_WIDTH), size)
}

/// Render the whole table, including the leading and trailing blank lines
pub fn render_table(processes: &HashMap<String, ProcessAggregate>) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format_row(" ProcessIDs", "ProcessImage", "ProcessImageSize"));
    output.push('\n');
    output.push_str(&"-".repeat(LINE_WIDTH));
    output.push('\n');

    let mut sorted: Vec<_> = processes.iter().collect();
    sorted.sort_by(|a, b| b.0.cmp(a.0));

    for (path, aggregate) in sorted {
        output.push_str(&format_row(
            &format_process_ids(&aggregate.process_ids),
            path,
            &aggregate.image_size.to_string(),
        ));
        output.push('\n');
    }

    output.push('\n');
    tracing::debug!(rows = processes.len(), "rendered process table");
    output
}
