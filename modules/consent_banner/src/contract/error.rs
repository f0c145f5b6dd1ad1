//! Contract error types for the consent banner
//!
//! These errors are transport-agnostic and used for in-process communication.

/// Consent banner domain errors
///
/// The sanitizer and the renderer never fail: malformed input is coerced
/// to safe defaults and every option lookup resolves to a value. The only
/// failure surface is the option store and the page directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentError {
    /// The option store rejected a read or write
    Storage {
        /// Failure description
        reason: String,
    },
    /// The page directory could not be queried
    PageDirectory {
        /// Failure description
        reason: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for ConsentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage { reason } => {
                write!(f, "Option store failure: {}", reason)
            }
            Self::PageDirectory { reason } => {
                write!(f, "Page directory failure: {}", reason)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for ConsentError {}
