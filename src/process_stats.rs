//! Per-image process aggregation
//!
//! Groups log entries by process image path, recording the image's on-disk
//! size at first sighting and every distinct process ID in first-seen order.

use crate::log_extractor::LogEntry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::trace;

/// Aggregated data for a single process image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessAggregate {
    /// Size of the image file in bytes, taken when the path was first seen
    pub image_size: u64,
    /// Distinct process IDs in the order they were first seen
    pub process_ids: Vec<i64>,
}

/// Size of the regular file at `path`, or 0 if it cannot be read
pub fn file_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => 0,
    }
}

/// Tracks aggregates for all process images seen in one run
#[derive(Debug, Default)]
pub struct ProcessTracker {
    /// Map from image path to aggregate
    processes: HashMap<String, ProcessAggregate>,
}

impl ProcessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one log entry, reading image sizes from the file system
    pub fn record(&mut self, entry: &LogEntry) {
        self.record_with(entry, file_size);
    }

    /// Record one log entry using `size_of` to size newly seen images.
    ///
    /// `size_of` is called at most once per path over the tracker's lifetime.
    pub fn record_with<F>(&mut self, entry: &LogEntry, size_of: F)
    where
        F: FnOnce(&Path) -> u64,
    {
        let Some(path) = entry.image_path() else {
            trace!(trace_id = entry.trace_id, "skipping entry without image path");
            return;
        };

        match self.processes.get_mut(path) {
            Some(aggregate) => {
                if !aggregate.process_ids.contains(&entry.process_id) {
                    aggregate.process_ids.push(entry.process_id);
                }
            }
            None => {
                let image_size = size_of(Path::new(path));
                trace!(path, image_size, pid = entry.process_id, "new process image");
                self.processes.insert(
                    path.to_string(),
                    ProcessAggregate {
                        image_size,
                        process_ids: vec![entry.process_id],
                    },
                );
            }
        }
    }

    pub fn processes(&self) -> &HashMap<String, ProcessAggregate> {
        &self.processes
    }

    pub fn into_processes(self) -> HashMap<String, ProcessAggregate> {
        self.processes
    }
}

/// Aggregate a sequence of entries in a single pass
pub fn aggregate(entries: &[LogEntry]) -> HashMap<String, ProcessAggregate> {
    let mut tracker = ProcessTracker::new();
    for entry in entries {
        tracker.record(entry);
    }
    tracker.into_processes()
}
