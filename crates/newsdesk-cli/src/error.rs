use thiserror::Error;

use newsdesk_core::FetchErrorKind;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fetch(#[from] newsdesk_core::FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::BadUrl => 2,
                FetchErrorKind::InvalidData => 3,
                FetchErrorKind::Decoding => 4,
            },
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
