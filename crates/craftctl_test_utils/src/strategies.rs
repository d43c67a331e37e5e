//! Proptest strategies for property keys and values.

use proptest::prelude::*;

/// Keys as a user might type them: mixed case, spaces and underscores.
pub fn raw_key() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,24}"
}

/// Keys that cannot be written as one `key=value` line: an `=`, a line
/// break, or a leading `#`.
pub fn malformed_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,8}=[a-z=]{0,8}",
        "[a-z]{0,8}[\r\n][a-z]{0,8}",
        "\t{0,2}#[a-z]{0,8}",
    ]
}

/// Keys already in stored form.
pub fn stored_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,24}"
}

/// Values that may contain newlines and `=` but never a carriage return.
pub fn raw_value() -> impl Strategy<Value = String> {
    "[ -~\n]{0,40}"
}

/// Single-line values as they appear in a stored file.
pub fn stored_value() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

/// A map of stored keys to stored values.
pub fn stored_properties() -> impl Strategy<Value = std::collections::BTreeMap<String, String>> {
    prop::collection::btree_map(stored_key(), stored_value(), 0..16)
}
