//! Record post-processing: mark each fetched record as processed.
//!
//! The transform is a shallow copy per record plus one inserted flag. It
//! never mutates its input and is total over any slice of JSON objects.

use anyhow::{bail, Result};
use serde_json::{Map, Value};

/// Key inserted into every output record.
const PROCESSED_KEY: &str = "processed";

/// Returns a new vector where each record is a copy of the input record with
/// `"processed": true` added. Order and length are preserved, and every
/// original field is carried over unchanged. A pre-existing `processed` key
/// is overwritten.
pub fn mark_processed(records: &[Map<String, Value>]) -> Vec<Map<String, Value>> {
    records
        .iter()
        .map(|record| {
            let mut out = record.clone();
            out.insert(PROCESSED_KEY.to_string(), Value::Bool(true));
            out
        })
        .collect()
}

/// JSON-level form of [`mark_processed`] for callers holding an untyped body.
///
/// The value must be an array of objects; anything else is an error naming
/// the offending element index.
pub fn mark_processed_json(value: &Value) -> Result<Value> {
    let items = match value.as_array() {
        Some(items) => items,
        None => bail!("records input must be a JSON array, got {}", kind(value)),
    };

    let mut records: Vec<Map<String, Value>> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(obj) => records.push(obj.clone()),
            None => bail!("records[{}] must be a JSON object, got {}", i, kind(item)),
        }
    }

    let marked = mark_processed(&records);
    Ok(Value::Array(marked.into_iter().map(Value::Object).collect()))
}

/// Short JSON type name for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
