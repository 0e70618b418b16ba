//! Remote failure detection and reconstruction.
//!
//! A failed call does not change the transport-level shape of the
//! response: the daemon returns a map carrying an `error` marker, a
//! human-readable message and the remote backtrace. [`translate`] inspects
//! a normalized response and converts that marker into a [`RemoteError`];
//! anything else passes through untouched.

use std::fmt;

use rmpv::Value;

use crate::error::Result;

/// An error reported by the remote service for an executed call.
///
/// Rendered as the message followed by the full backtrace so diagnostics
/// survive the trip into local error chains:
///
/// ```text
/// Invalid Module
///     Backtrace:
///         lib/msf/core/rpc/v10/rpc_module.rb:104:in `rpc_execute'
///         lib/msf/core/rpc/v10/service.rb:151:in `process'
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// Human-readable message from the daemon.
    pub message: String,
    /// Remote backtrace frames, outermost first, order as received.
    pub backtrace: Vec<String>,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "    Backtrace:")?;
        for frame in &self.backtrace {
            writeln!(f, "        {}", frame)?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteError {}

/// Inspect a normalized response for the remote-error marker.
///
/// If the value is a map whose `error` entry is truthy, the message and
/// backtrace are extracted and returned as an error; otherwise the value is
/// passed through unchanged. The marker is tested for truthiness, not mere
/// presence: `error: false`, `error: 0` and `error: ""` all count as
/// success.
pub fn translate(value: Value) -> Result<Value> {
    match value {
        Value::Map(ref entries) if map_entry(entries, "error").is_some_and(is_truthy) => {
            let message = map_entry(entries, "error_message")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            let backtrace = map_entry(entries, "error_backtrace")
                .and_then(Value::as_array)
                .map(|frames| {
                    frames
                        .iter()
                        .filter_map(|frame| frame.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            tracing::warn!("remote call failed: {}", message);
            Err(RemoteError { message, backtrace }.into())
        }
        other => Ok(other),
    }
}

/// Look up a map entry by string key, first match wins.
pub(crate) fn map_entry<'a>(entries: &'a [(Value, Value)], key: &str) -> Option<&'a Value> {
    entries
        .iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

/// Truthiness of a normalized scalar: nil, `false`, numeric zero and the
/// empty string are falsy, everything else (empty containers included) is
/// truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Nil => false,
        Value::Boolean(b) => *b,
        Value::Integer(n) => n.as_i64() != Some(0) && n.as_u64() != Some(0),
        Value::F32(f) => *f != 0.0,
        Value::F64(f) => *f != 0.0,
        Value::String(s) => s.as_str().is_none_or(|s| !s.is_empty()),
        Value::Binary(b) => !b.is_empty(),
        _ => true,
    }
}
