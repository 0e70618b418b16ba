//! Recursive binary-to-text normalization of decoded responses.
//!
//! The daemon encodes most strings as raw msgpack binary, so a decoded
//! response tree is littered with `Value::Binary` scalars. [`debufferize`]
//! rewrites the tree so every binary scalar becomes text while sequence
//! order and map entry order are preserved exactly.
//!
//! # Example
//!
//! ```
//! use msfrpc_client::normalize::debufferize;
//! use rmpv::Value;
//!
//! let raw = Value::Array(vec![Value::Binary(b"shell".to_vec()), Value::from(7)]);
//! let text = debufferize(raw);
//! assert_eq!(text, Value::Array(vec![Value::from("shell"), Value::from(7)]));
//! ```

use rmpv::Value;

/// Recursively convert every binary scalar in a decoded value to text.
///
/// - binary -> UTF-8 text (invalid sequences become U+FFFD)
/// - array  -> new array with each element normalized, order preserved
/// - map    -> new map with the same entries in the same order; keys and
///   values are both normalized, so binary keys become text keys
/// - any other scalar is returned unchanged
///
/// Pure and deterministic; applying it twice is a no-op since the first
/// pass leaves no binary scalar behind. Decoded msgpack is always acyclic,
/// so the recursion terminates at the tree's leaves.
pub fn debufferize(value: Value) -> Value {
    match value {
        Value::Binary(bytes) => Value::from(String::from_utf8_lossy(&bytes).into_owned()),
        Value::Array(items) => Value::Array(items.into_iter().map(debufferize).collect()),
        Value::Map(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, val)| (debufferize(key), debufferize(val)))
                .collect(),
        ),
        other => other,
    }
}
