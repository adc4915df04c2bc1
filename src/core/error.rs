use super::constants::NAME_ERROR_MESSAGE;
use thiserror::Error;

/// Why a submitted name was rejected.
///
/// Every variant renders as the same user-facing message; the variant itself
/// is only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", NAME_ERROR_MESSAGE)]
    TooShort { len: usize },
    #[error("{}", NAME_ERROR_MESSAGE)]
    TooLong { len: usize },
    #[error("{}", NAME_ERROR_MESSAGE)]
    InvalidCharacter(char),
}

/// The audio subsystem could not produce a context for the chime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("audio unavailable: {0}")]
pub struct AudioUnavailable(pub String);
