//! MsgPack codec using `rmp-serde` and `rmpv`.
//!
//! Encoding uses `to_vec_named` so any map-shaped argument is serialized
//! with its field names, which is what the daemon's dynamically typed
//! dispatcher expects. Decoding goes through `rmpv` because a response's
//! shape is only known at runtime.
//!
//! # Example
//!
//! ```
//! use msfrpc_client::codec::MsgPackCodec;
//! use rmpv::Value;
//!
//! let envelope = vec![Value::from("core.version"), Value::from("TOKEN")];
//! let bytes = MsgPackCodec::encode(&envelope).unwrap();
//! let decoded = MsgPackCodec::decode(&bytes).unwrap();
//! assert_eq!(decoded, Value::Array(envelope));
//! ```

use rmpv::Value;

use crate::error::Result;

/// MessagePack codec for call envelopes and responses.
pub struct MsgPackCodec;

impl MsgPackCodec {
    /// Encode a value to MsgPack bytes.
    ///
    /// A `Vec<Value>` envelope encodes as an ordered msgpack array with no
    /// type coercion beyond what the format itself does.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(value)?)
    }

    /// Decode MsgPack bytes into a dynamic [`Value`].
    ///
    /// The exact inverse of [`encode`](Self::encode): array order and map
    /// entry order come back as sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not well-formed msgpack.
    #[inline]
    pub fn decode(bytes: &[u8]) -> Result<Value> {
        let mut cursor = bytes;
        Ok(rmpv::decode::read_value(&mut cursor)?)
    }

    /// Decode MsgPack bytes into a statically typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be deserialized to type T.
    #[inline]
    pub fn decode_as<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        rmp_serde::from_slice(bytes).map_err(|e| {
            crate::error::MsfRpcError::Protocol(format!("unexpected response shape: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_roundtrip() {
        let envelope = vec![
            Value::from("auth.login"),
            Value::from("alice"),
            Value::from("secret"),
        ];
        let bytes = MsgPackCodec::encode(&envelope).unwrap();
        assert_eq!(MsgPackCodec::decode(&bytes).unwrap(), Value::Array(envelope));
    }

    #[test]
    fn test_envelope_is_fixarray_of_str() {
        let envelope = vec![Value::from("core.stop"), Value::from("T")];
        let bytes = MsgPackCodec::encode(&envelope).unwrap();

        // 0x92 = fixarray(2), 0xa9 = fixstr(9) "core.stop"
        assert_eq!(bytes[0], 0x92);
        assert_eq!(bytes[1], 0xa9);
        assert_eq!(&bytes[2..11], b"core.stop");
    }

    #[test]
    fn test_order_preserved() {
        let envelope = vec![Value::from("m"), Value::from(1), Value::from(2), Value::from(3)];
        let bytes = MsgPackCodec::encode(&envelope).unwrap();
        let decoded = MsgPackCodec::decode(&bytes).unwrap();
        let items = decoded.as_array().unwrap();
        assert_eq!(items[1], Value::from(1));
        assert_eq!(items[2], Value::from(2));
        assert_eq!(items[3], Value::from(3));
    }

    #[test]
    fn test_decode_binary_payload() {
        // The daemon answers with raw binary scalars; they must decode as
        // Value::Binary, not text.
        let bytes = MsgPackCodec::encode(&serde_bytes::Bytes::new(b"payload")).unwrap();
        assert_eq!(bytes[0], 0xc4, "expected bin8 format");
        assert_eq!(
            MsgPackCodec::decode(&bytes).unwrap(),
            Value::Binary(b"payload".to_vec())
        );
    }

    #[test]
    fn test_decode_map_preserves_entry_order() {
        let map = Value::Map(vec![
            (Value::from("b"), Value::from(2)),
            (Value::from("a"), Value::from(1)),
        ]);
        let bytes = MsgPackCodec::encode(&map).unwrap();
        assert_eq!(MsgPackCodec::decode(&bytes).unwrap(), map);
    }

    #[test]
    fn test_decode_error_on_invalid_data() {
        // 0xc1 is the one reserved byte in the msgpack spec.
        assert!(MsgPackCodec::decode(&[0xc1]).is_err());
    }

    #[test]
    fn test_decode_as_typed() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct LoginResult {
            result: String,
            token: String,
        }

        let original = LoginResult {
            result: "success".to_string(),
            token: "TEMP123".to_string(),
        };
        let bytes = MsgPackCodec::encode(&original).unwrap();
        let decoded: LoginResult = MsgPackCodec::decode_as(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_as_shape_mismatch() {
        let bytes = MsgPackCodec::encode(&vec![Value::from(1)]).unwrap();
        let result: Result<String> = MsgPackCodec::decode_as(&bytes);
        assert!(result.is_err());
    }
}
