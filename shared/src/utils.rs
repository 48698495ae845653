use serde_json::Value;

// Both catalog providers nest their payload under a top-level "results"
// array. A missing or non-array field becomes an empty list rather than
// an error, so callers always get a sequence.
pub fn extract_results(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
