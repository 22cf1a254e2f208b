//! Error types for the Aplos API client.

use thiserror::Error;

/// A specialized `Result` type for Aplos operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Aplos API operations.
///
/// Each variant corresponds to one failure mode: transport, decoding,
/// cryptography, key material, authentication, or file I/O. Errors are
/// never swallowed; every layer wraps the underlying cause so it stays
/// inspectable via [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection, TLS, protocol errors).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("request timeout")]
    Timeout,

    /// Response body did not parse as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value did not match the expected wire shape (bad base64,
    /// malformed date/time string, non-UTF-8 token plaintext).
    #[error("decode error: {0}")]
    Decode(String),

    /// RSA decryption of the server-issued token failed.
    #[error("decryption failed: {0}")]
    Crypto(#[from] rsa::Error),

    /// Private key material was malformed or not an RSA key.
    #[error("invalid key material: {0}")]
    Key(String),

    /// The authentication handshake failed; wraps the underlying cause.
    #[error("authentication failed: {0}")]
    Auth(#[source] Box<Error>),

    /// Reading the key file from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Returns `true` if the failure happened while decoding a response
    /// or other wire data.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Json(_) | Error::Decode(_))
    }

    /// Returns `true` if the request failed at the transport level,
    /// including timeouts.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Timeout)
    }

    /// Wrap a failure from the token handshake.
    pub(crate) fn auth(cause: Error) -> Self {
        Error::Auth(Box::new(cause))
    }

    /// Map a `reqwest` failure, surfacing deadline expiry as its own kind.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_preserves_cause() {
        let err = Error::auth(Error::Decode("bad base64".into()));
        assert!(err.is_auth_error());

        let source = std::error::Error::source(&err).expect("cause retained");
        assert!(source.to_string().contains("bad base64"));
    }

    #[test]
    fn classification() {
        assert!(Error::Timeout.is_transport_error());
        assert!(Error::Decode("x".into()).is_decode_error());
        assert!(!Error::Timeout.is_auth_error());
        assert!(!Error::Key("x".into()).is_decode_error());
    }
}
