//! Human-readable summaries of what changed between two JSON snapshots

use std::collections::BTreeSet;

use serde_json::Value;

/// Bookkeeping fields that change on every update
const IGNORED_FIELDS: [&str; 1] = ["updatedAt"];

const MAX_STRING_LEN: usize = 50;

/// Summarize top-level field changes, e.g. `amount: -450 -> -500`
///
/// Returns `None` when nothing but ignored bookkeeping fields changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(b), Value::Object(a)) => {
            let keys: BTreeSet<&String> = b.keys().chain(a.keys()).collect();
            keys.into_iter()
                .filter(|key| !IGNORED_FIELDS.contains(&key.as_str()))
                .filter_map(|key| match (b.get(key), a.get(key)) {
                    (Some(old), Some(new)) if old == new => None,
                    (Some(old), Some(new)) => {
                        Some(format!("{}: {} -> {}", key, format_value(old), format_value(new)))
                    }
                    (Some(old), None) => Some(format!("{}: {} -> (removed)", key, format_value(old))),
                    (None, Some(new)) => Some(format!("{}: (added) -> {}", key, format_value(new))),
                    (None, None) => None,
                })
                .collect::<Vec<_>>()
        }
        _ if before == after => Vec::new(),
        _ => vec![format!("{} -> {}", format_value(before), format_value(after))],
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_STRING_LEN => {
            let head: String = s.chars().take(MAX_STRING_LEN - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
    }
}
