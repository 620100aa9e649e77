//! Property-based tests for aggregation and table rendering
//!
//! Core properties tested:
//! 1. Entries without an image path never produce a key
//! 2. Process IDs are distinct and kept in first-seen order
//! 3. Image size is sampled once per path
//! 4. Rendering is deterministic and sorted by path, descending
//! 5. Log decoding never panics

use proptest::prelude::*;
use running_process_size::log_extractor::{decode_log_output, LogEntry};
use running_process_size::process_stats::ProcessTracker;
use running_process_size::table_output::render_table;
use std::collections::HashMap;

fn arb_entry() -> impl Strategy<Value = LogEntry> {
    (
        any::<u64>(),
        prop::option::of(prop_oneof![Just(String::new()), "/bin/[a-e]{1,3}"]),
        0i64..50,
    )
        .prop_map(|(trace_id, path, process_id)| LogEntry {
            trace_id,
            process_image_path: path,
            process_id,
        })
}

/// Aggregate with a fake size probe that returns how many paths were sized so far
fn aggregate_counting(entries: &[LogEntry]) -> (HashMap<String, u64>, ProcessTracker) {
    let mut first_sizes = HashMap::new();
    let mut tracker = ProcessTracker::new();
    let mut sized = 0u64;
    for entry in entries {
        tracker.record_with(entry, |path| {
            sized += 1;
            first_sizes.insert(path.to_str().unwrap().to_string(), sized);
            sized
        });
    }
    (first_sizes, tracker)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_pathless_entries_never_produce_keys(entries in prop::collection::vec(arb_entry(), 0..40)) {
        let (_, tracker) = aggregate_counting(&entries);

        prop_assert!(!tracker.processes().contains_key(""));
        for path in tracker.processes().keys() {
            prop_assert!(entries
                .iter()
                .any(|e| e.process_image_path.as_deref() == Some(path.as_str())));
        }
    }

    #[test]
    fn prop_process_ids_distinct_in_first_seen_order(entries in prop::collection::vec(arb_entry(), 0..40)) {
        let (_, tracker) = aggregate_counting(&entries);

        for (path, aggregate) in tracker.processes() {
            let mut expected: Vec<i64> = Vec::new();
            for entry in entries.iter().filter(|e| e.image_path() == Some(path.as_str())) {
                if !expected.contains(&entry.process_id) {
                    expected.push(entry.process_id);
                }
            }
            prop_assert_eq!(&aggregate.process_ids, &expected);
        }
    }

    #[test]
    fn prop_image_size_sampled_once(entries in prop::collection::vec(arb_entry(), 0..40)) {
        let (first_sizes, tracker) = aggregate_counting(&entries);

        prop_assert_eq!(first_sizes.len(), tracker.processes().len());
        for (path, aggregate) in tracker.processes() {
            prop_assert_eq!(aggregate.image_size, first_sizes[path]);
        }
    }

    #[test]
    fn prop_render_sorted_descending(entries in prop::collection::vec(arb_entry(), 1..40)) {
        let (_, tracker) = aggregate_counting(&entries);
        let table = render_table(tracker.processes());
        prop_assert_eq!(&table, &render_table(tracker.processes()));

        let rows: Vec<&str> = table.lines().skip(3).filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(rows.len(), tracker.processes().len());

        let paths: Vec<&str> = rows
            .iter()
            .map(|row| {
                // Process IDs never contain '/', so the path starts at the first one
                let start = row.find('/').unwrap();
                row[start..].split(' ').next().unwrap()
            })
            .collect();
        let mut sorted = paths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(paths, sorted);
    }

    #[test]
    fn prop_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode_log_output(&data);
    }
}
