//! Client error type.
//!
//! ERROR HANDLING
//! ==============
//! Controllers never panic on bad input from the page or the network. Every
//! fallible step returns `ClientError`; the browser glue logs it and moves the
//! affected feature into a visible failure state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A required `data-*` attribute is absent from the host container.
    #[error("missing page attribute `data-{0}`")]
    MissingAttribute(&'static str),
    /// A `data-*` attribute is present but cannot be parsed.
    #[error("invalid page attribute `data-{name}`: {value:?}")]
    InvalidAttribute { name: &'static str, value: String },
    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A payload could not be encoded or decoded.
    #[error("malformed payload: {0}")]
    Decode(String),
    /// Microphone access was refused or failed.
    #[error("microphone unavailable: {0}")]
    Permission(String),
    /// A browser API needed for the operation does not exist here.
    #[error("{0} is not available in this environment")]
    Unavailable(&'static str),
}

impl ClientError {
    /// Whether retrying the same request could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status(code) => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Render a thrown JS value for logs and error messages.
#[cfg(feature = "csr")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
