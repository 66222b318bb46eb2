use thiserror::Error;

use crate::decode::DecodeError;

/// Failure taxonomy for fetch operations.
///
/// Transport failure and decode failure stay distinguishable so a caller
/// can tell "server unreachable" apart from "server sent garbage".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The caller supplied no usable URL; no request was attempted.
    #[error("no request url was provided")]
    BadUrl,

    /// The request failed before a body was obtained: connection error,
    /// timeout, or a non-success status.
    #[error("transport failure: {message}")]
    InvalidData { message: String },

    /// A body was received but did not match the expected shape.
    #[error(transparent)]
    Decoding(#[from] DecodeError),
}

/// Error category for callers that branch without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    BadUrl,
    InvalidData,
    Decoding,
}

impl FetchError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::BadUrl => FetchErrorKind::BadUrl,
            Self::InvalidData { .. } => FetchErrorKind::InvalidData,
            Self::Decoding(_) => FetchErrorKind::Decoding,
        }
    }
}
