//! Transport module - the HTTP request/response exchange.
//!
//! One call is one POST to the daemon's `/api/1.0` endpoint and one full
//! response body back. The transport knows nothing about envelopes or
//! msgpack beyond the content-type marker it sends.

mod http;

pub use http::{HttpTransport, TransportConfig, API_PATH, CONTENT_TYPE};
