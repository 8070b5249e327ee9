use crate::core::UuidSet;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// 8-4-4-4-12 hex groups, any case. Version and variant bits are not checked.
///
/// Word boundaries are ASCII-only: a non-ASCII letter next to the UUID does
/// not hide it.
pub fn uuid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)(?-u:\b)[0-9a-f]{8}(?-u:\b)-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-(?-u:\b)[0-9a-f]{12}(?-u:\b)",
        )
        .expect("UUID pattern is a valid regex")
    })
}

pub fn is_uuid_like(value: &str) -> bool {
    uuid_pattern().is_match(value)
}

/// Walks `value` and collects every UUID-shaped string in first-encounter order.
///
/// Object members are visited in document order, array elements by index.
/// A string that embeds a UUID (`"urn:uuid:..."`) contributes the embedded
/// UUID. Numbers, booleans and null contribute nothing.
pub fn find_uuids(value: &Value) -> UuidSet {
    let mut uuids = UuidSet::new();
    collect_uuids(value, &mut uuids);
    uuids
}

fn collect_uuids(value: &Value, uuids: &mut UuidSet) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                collect_uuids(child, uuids);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_uuids(item, uuids);
            }
        }
        Value::String(s) => {
            for found in uuid_pattern().find_iter(s) {
                if uuids.insert(found.as_str()) {
                    tracing::trace!("Found UUID {}", found.as_str());
                }
            }
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}
