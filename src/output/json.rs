//! JSON output formatting
//!
//! Every JSON document is wrapped as `{"data": ..., "meta": {...}}` so scripts
//! can tell which client produced it and when.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub client_version: &'static str,
}

impl Meta {
    fn now() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            client_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope {
        data,
        meta: Meta::now(),
    })
}
