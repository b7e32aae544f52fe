//! runtime::errors
//!
//! Failure taxonomy for talking to the runtime.
//!
//! # Classification
//!
//! Every failure raised while obtaining a payload from the runtime falls
//! into exactly one [`ErrorKind`]:
//!
//! - **Connect**: the runtime could not be reached
//! - **Protocol**: the peer was reached but the exchange was malformed
//! - **Response**: the runtime answered `ok = false`
//!
//! Only Connect is ever recoverable, and only in auto mode.
//!
//! # Example
//!
//! ```
//! use lodetime::runtime::{ErrorKind, TransportError};
//!
//! let err = TransportError::Response {
//!     code: "busy".to_string(),
//!     message: "graph rebuilding".to_string(),
//! };
//! assert_eq!(err.kind(), ErrorKind::Response);
//! assert_eq!(err.to_string(), "response: busy: graph rebuilding");
//! ```

use std::fmt;

use thiserror::Error;

/// Closed classification of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Connect,
    Protocol,
    Response,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Connect => "connect",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Response => "response",
        })
    }
}

/// Errors from a status exchange with the runtime.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint could not be resolved or dialed within the deadline.
    #[error("connect: {endpoint}: {message}")]
    Connect { endpoint: String, message: String },

    /// Write, read, or decode of the exchange failed.
    #[error("protocol: {0}")]
    Protocol(String),

    /// The runtime reported `ok = false` with an error object.
    #[error("response: {code}: {message}")]
    Response { code: String, message: String },

    /// The runtime reported `ok = false` without an error object.
    #[error("response: unknown error")]
    UnknownResponse,
}

impl TransportError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransportError::Connect { .. } => ErrorKind::Connect,
            TransportError::Protocol(_) => ErrorKind::Protocol,
            TransportError::Response { .. } | TransportError::UnknownResponse => {
                ErrorKind::Response
            }
        }
    }

    /// Whether the runtime was simply absent.
    pub fn is_connect(&self) -> bool {
        self.kind() == ErrorKind::Connect
    }

    pub(crate) fn connect(endpoint: &str, message: impl fmt::Display) -> Self {
        TransportError::Connect {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn protocol(message: impl fmt::Display) -> Self {
        TransportError::Protocol(message.to_string())
    }
}
