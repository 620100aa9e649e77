#![no_main]

use libfuzzer_sys::fuzz_target;
use running_process_size::log_extractor::decode_log_output;
use running_process_size::process_stats::ProcessTracker;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary tool output must never panic
    if let Ok(entries) = decode_log_output(data) {
        let mut tracker = ProcessTracker::new();
        for entry in &entries {
            tracker.record_with(entry, |_| 0);
        }
        assert!(!tracker.processes().contains_key(""));
    }
});
