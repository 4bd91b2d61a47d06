//! Base64 data URIs for image and voice payloads.

#[cfg(test)]
#[path = "data_uri_test.rs"]
mod data_uri_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::consts::FALLBACK_MIME;

/// Encode `bytes` as `data:<mime>;base64,<payload>`.
///
/// An empty `mime` falls back to `application/octet-stream`, matching what a
/// browser `FileReader` produces for unclassified files.
#[must_use]
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { FALLBACK_MIME } else { mime.trim() };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Concatenate recorded chunks in capture order and encode them as one URI.
#[must_use]
pub fn encode_chunks(mime: &str, chunks: &[Vec<u8>]) -> String {
    let joined = chunks.concat();
    encode(mime, &joined)
}
