//! Parse and fold stage: turns the repaired array into one skill mapping

use crate::skills::{ResultMapping, SkillEntry};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Key that marks a progress message rather than skill data.
pub const STATUS_KEY: &str = "status";

/// Parse repaired text into the sequence of stream entries.
///
/// A bare object is treated as a one-element sequence. Anything other than an
/// array or object is rejected with a short reason.
pub fn parse_stream(text: &str) -> Result<Vec<Value>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(object) => Ok(vec![Value::Object(object)]),
        other => Err(format!("expected an array or object, found {}", value_kind(&other))),
    }
}

/// Whether an entry is a progress/status message.
pub fn is_status_message(entry: &Map<String, Value>) -> bool {
    entry.contains_key(STATUS_KEY)
}

/// Merge every non-status object into one mapping.
///
/// Conflict policy is last-write-wins: an entry later in the stream replaces
/// any earlier value for the same skill. Non-object entries are ignored.
pub fn fold_entries(entries: Vec<Value>) -> BTreeMap<String, Value> {
    let mut merged = BTreeMap::new();
    let mut skipped_status = 0usize;

    for entry in entries {
        let object = match entry {
            Value::Object(object) => object,
            other => {
                log::debug!("Ignoring non-object stream entry ({})", value_kind(&other));
                continue;
            }
        };

        if is_status_message(&object) {
            skipped_status += 1;
            continue;
        }

        for (skill, record) in object {
            if merged.insert(skill.clone(), record).is_some() {
                log::debug!("Skill '{}' reported more than once, keeping latest", skill);
            }
        }
    }

    if skipped_status > 0 {
        log::debug!("Skipped {} status messages", skipped_status);
    }
    merged
}

/// Decode each merged value into a typed entry.
///
/// Total: a value that is not a skill record stays in the mapping as
/// [`SkillEntry::Unverified`].
pub fn decode_entries(merged: BTreeMap<String, Value>) -> ResultMapping {
    let entries = merged
        .into_iter()
        .map(|(skill, value)| {
            let entry = SkillEntry::from_value(value);
            if let SkillEntry::Unverified(raw) = &entry {
                log::warn!("Key '{}' is not a skill record ({}), keeping it unverified", skill, value_kind(raw));
            }
            (skill, entry)
        })
        .collect();
    ResultMapping::from_entries(entries)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
