use thiserror::Error;

/// Message shown for any non-2xx response; the server body is never surfaced.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to fetch";

/// Message shown when a transport failure carries no description.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Why a page fetch did not produce records.
///
/// The `Display` output is what the controller stores as its error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    RequestFailed { status: u16 },
    #[error("{0}")]
    Transport(String),
    #[error("{}", FALLBACK_ERROR_MESSAGE)]
    Unknown,
    #[error("{0}")]
    Decode(String),
    #[error("page numbers start at 1, got {0}")]
    InvalidPage(u32),
}

impl FetchError {
    pub fn from_transport(err: anyhow::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Transport(message)
        }
    }

    pub fn from_decode(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
