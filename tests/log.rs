// tests/log.rs
//
// File logger: level tags, debug gating and switching files after init.
// Logger state is process-wide, so the stateful checks live in one test.

use std::fs;

use council_lists::log::{self, fmt_elapsed};
use council_lists::{logd, loge, logf, logw};

#[test]
fn elapsed_stamp() {
    assert_eq!(fmt_elapsed(0), "00:00:00.000");
    assert_eq!(fmt_elapsed(3_723_045), "01:02:03.045");
}

#[test]
fn levels_gating_and_reinit() {
    let tmp = tempfile::tempdir().unwrap();

    let quiet = tmp.path().join("quiet.log");
    log::init(&quiet, false);
    assert_eq!(log::log_path(), quiet);

    logf!("info {}", 1);
    logd!("hidden debug");
    logw!("careful");
    loge!("broken");

    let text = fs::read_to_string(&quiet).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "{text}");
    assert!(lines[0].starts_with('[') && lines[0].ends_with("[INFO] info 1"), "{text}");
    assert!(lines[1].ends_with("[WARN] careful"));
    assert!(lines[2].ends_with("[ERROR] broken"));
    assert!(!text.contains("hidden debug"));

    // A later init moves output and verbosity; parent dirs appear on first write
    let loud = tmp.path().join("nested").join("loud.log");
    log::init(&loud, true);
    logd!("shown debug");
    logf!("after switch");

    let text = fs::read_to_string(&loud).unwrap();
    assert!(text.contains("[DEBUG] shown debug"), "{text}");
    assert!(text.contains("[INFO] after switch"), "{text}");
    assert!(!fs::read_to_string(&quiet).unwrap().contains("after switch"));
}
