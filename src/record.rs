//! Canonical record type, provenance stamping, and structural helpers

use serde_json::{Map, Value};

use crate::venues::Venue;

/// Engine version reported by [`crate::StreamNormalizer::version`] and stamped
/// into every provenance marker. Read-only for the lifetime of the process.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved key holding the `[venue, version]` provenance pair
pub const PROVENANCE_KEY: &str = "marketfy";

/// Unified, venue-independent output shape. Key order is insertion order and
/// is part of the output contract.
pub type CanonicalRecord = Map<String, Value>;

/// Append the provenance pair to the outermost level of a result.
/// Applied once per top-level call, never to nested batch elements.
pub fn stamp_provenance(record: &mut CanonicalRecord, venue: Venue) {
    record.insert(
        PROVENANCE_KEY.to_string(),
        Value::Array(vec![
            Value::String(venue.id().to_string()),
            Value::String(ENGINE_VERSION.to_string()),
        ]),
    );
}

/// Return a copy of `map` with `key` holding `default` if absent.
/// Existing keys keep their order; a newly inserted key lands last.
pub fn ensure_key_with_default(map: &Map<String, Value>, key: &str, default: Value) -> Map<String, Value> {
    let mut out = map.clone();
    if !out.contains_key(key) {
        out.insert(key.to_string(), default);
    }
    out
}

/// Whether `text` decodes as a JSON document; never panics
pub fn is_parseable_json(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Present value cloned, or the `false` sentinel the venues use for
/// "not applicable"
pub(crate) fn value_or_false(map: &Map<String, Value>, key: &str) -> Value {
    map.get(key).cloned().unwrap_or(Value::Bool(false))
}
