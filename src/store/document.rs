//! # Document Primitives
//!
//! Object-id generation and validation, timestamp stamping, and the shallow
//! merge used by partial updates.
//!
//! Object ids are 24 lowercase hex characters: a 4-byte UNIX-seconds prefix
//! followed by 8 random bytes. The time prefix keeps ids roughly ordered by
//! creation; the random tail makes collisions negligible.

use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::{SecondsFormat, Utc};
use rand::RngCore;
use regex::Regex;
use serde_json::{Map, Value};

/// Field holding the store-assigned identity.
pub const ID_FIELD: &str = "_id";

/// Creation timestamp field, set once on insert.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Modification timestamp field, advanced on every update.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

static OBJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9a-fA-F]{24}$").unwrap());

/// Generates a fresh 24-hex object id.
pub fn new_object_id() -> String {
    let secs = Utc::now().timestamp().max(0) as u32;
    let mut tail = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut tail);

    let mut id = String::with_capacity(24);
    let _ = write!(id, "{:08x}", secs);
    for byte in tail {
        let _ = write!(id, "{:02x}", byte);
    }
    id
}

/// Returns true if `candidate` has the 24-hex object-id shape.
pub fn is_object_id(candidate: &str) -> bool {
    OBJECT_ID_RE.is_match(candidate)
}

/// Current timestamp in the stored wire format (RFC 3339, millis, UTC).
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Stamps a new document with its identity and both timestamps.
///
/// Returns the assigned id.
pub fn stamp_new(doc: &mut Map<String, Value>) -> String {
    let id = new_object_id();
    let now = now_timestamp();
    doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
    doc.insert(CREATED_AT_FIELD.to_string(), Value::String(now.clone()));
    doc.insert(UPDATED_AT_FIELD.to_string(), Value::String(now));
    id
}

/// Shallow-merges `patch` into `doc` and advances `updatedAt`.
///
/// Identity and creation time are immutable; patch entries for them are
/// ignored.
pub fn apply_patch(doc: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        if key == ID_FIELD || key == CREATED_AT_FIELD || key == UPDATED_AT_FIELD {
            continue;
        }
        doc.insert(key, value);
    }
    doc.insert(
        UPDATED_AT_FIELD.to_string(),
        Value::String(now_timestamp()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_id_shape() {
        let id = new_object_id();
        assert_eq!(id.len(), 24);
        assert!(is_object_id(&id));
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_object_ids_are_unique() {
        let a = new_object_id();
        let b = new_object_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_object_id_rejects_bad_input() {
        assert!(!is_object_id("zzz"));
        assert!(!is_object_id(""));
        assert!(!is_object_id("0123456789abcdef0123456")); // 23 chars
        assert!(!is_object_id("0123456789abcdef012345678")); // 25 chars
        assert!(!is_object_id("0123456789abcdef0123456g")); // non-hex
        assert!(is_object_id("0123456789ABCDEF01234567")); // upper hex accepted
    }

    #[test]
    fn test_stamp_new_sets_identity_and_timestamps() {
        let mut doc = Map::new();
        doc.insert("name".to_string(), json!("A"));

        let id = stamp_new(&mut doc);

        assert_eq!(doc.get(ID_FIELD), Some(&Value::String(id.clone())));
        assert!(is_object_id(&id));
        assert_eq!(doc.get(CREATED_AT_FIELD), doc.get(UPDATED_AT_FIELD));
    }

    #[test]
    fn test_apply_patch_merges_and_protects_identity() {
        let mut doc = Map::new();
        let id = stamp_new(&mut doc);
        doc.insert("name".to_string(), json!("before"));
        doc.insert("kept".to_string(), json!("untouched"));
        let created = doc.get(CREATED_AT_FIELD).cloned();

        let mut patch = Map::new();
        patch.insert("name".to_string(), json!("after"));
        patch.insert(ID_FIELD.to_string(), json!("ffffffffffffffffffffffff"));
        patch.insert(CREATED_AT_FIELD.to_string(), json!("1970-01-01T00:00:00Z"));
        apply_patch(&mut doc, patch);

        assert_eq!(doc.get("name"), Some(&json!("after")));
        assert_eq!(doc.get("kept"), Some(&json!("untouched")));
        assert_eq!(doc.get(ID_FIELD), Some(&Value::String(id)));
        assert_eq!(doc.get(CREATED_AT_FIELD).cloned(), created);
    }
}
