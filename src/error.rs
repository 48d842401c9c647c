use thiserror::Error;

/// Errors raised while setting up a debate: HTTP client construction and IO.
///
/// Turn-level generation problems never surface here; they are reported as
/// [`GenerationError`] values so the controller can decide how to render them.
#[derive(Debug, Error)]
pub enum DebateError {
    /// HTTP client construction or transport errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DebateError {
    fn from(err: reqwest::Error) -> Self {
        DebateError::HttpError(err.to_string())
    }
}

/// Category of a failed response generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The participant has no API key configured.
    MissingCredential,
    /// The provider answered without any text.
    EmptyResponse,
    /// The request could not be sent or the provider returned an error status.
    TransportFailure,
    /// The provider answered with a body that could not be decoded.
    MalformedResponse,
    /// The generation did not complete within the turn timeout.
    Timeout,
    /// No provider implementation is registered for the configured kind.
    ProviderUnavailable,
}

/// A tagged generation failure: what went wrong and a human readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("{kind:?}: {detail}")]
pub struct GenerationError {
    pub kind: FailureKind,
    pub detail: String,
}

impl GenerationError {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(FailureKind::MissingCredential, "Missing Gemini API key.")
    }

    pub fn empty_response() -> Self {
        Self::new(FailureKind::EmptyResponse, "No response")
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::TransportFailure, detail)
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedResponse, detail)
    }

    /// Text used when the failure is rendered as a regular transcript entry.
    pub fn transcript_text(&self) -> String {
        match self.kind {
            FailureKind::EmptyResponse => "(No response)".to_string(),
            _ => format!("Error: {}", self.detail),
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GenerationError::malformed(err.to_string())
        } else if err.is_timeout() {
            GenerationError::new(FailureKind::Timeout, err.to_string())
        } else {
            GenerationError::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_renders_fixed_literal() {
        assert_eq!(
            GenerationError::missing_credential().transcript_text(),
            "Error: Missing Gemini API key."
        );
    }

    #[test]
    fn empty_response_renders_placeholder() {
        assert_eq!(
            GenerationError::empty_response().transcript_text(),
            "(No response)"
        );
    }

    #[test]
    fn transport_failure_is_prefixed() {
        let err = GenerationError::transport("connection refused");
        assert_eq!(err.transcript_text(), "Error: connection refused");
        assert_eq!(err.kind, FailureKind::TransportFailure);
    }
}
