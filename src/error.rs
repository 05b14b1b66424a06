use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Parse error")]
pub struct ParseError;

/// A failed call to the remote game service.
///
/// None of these are fatal: the session stays usable and the next
/// successful call resynchronizes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No response at all: connection refused, reset, timed out.
    #[error("network failure: {0}")]
    Network(String),
    /// Non-success status. `message` is the server's detail when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Success status with a body that does not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
