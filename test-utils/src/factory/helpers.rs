//! Shared helper utilities for factory methods.

use serde_json::{json, Value};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A minimal service translation document with the given main heading.
pub fn service_document(heading: &str) -> Value {
    json!({
        "sec_one_heading_one": heading,
        "sec_two": [],
        "sec_three": [],
        "sec_four": [],
        "faqs": [],
        "laws": []
    })
}

/// A minimal team member translation document with the given name.
pub fn team_member_document(name: &str) -> Value {
    json!({
        "name": name,
        "sec_two": [],
        "faqs": []
    })
}
