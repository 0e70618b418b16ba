//! Codec module - msgpack framing for call envelopes and responses.
//!
//! The codec is the only place that touches the binary serialization
//! format. [`MsgPackCodec`] wraps `rmp-serde` on the encode side and
//! `rmpv` on the decode side; the rest of the crate deals in
//! [`rmpv::Value`] trees.
//!
//! # Design
//!
//! The codec is a marker struct with static methods rather than a trait
//! object. Requests have a statically known shape (an ordered array), so
//! they encode through serde; responses have no static shape at all, so
//! they decode into the dynamic `Value` model.

mod msgpack;

pub use msgpack::MsgPackCodec;
