//! Error types for the Contextwise domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//!
//! Lookup failures never reach a renderer: the detectors substitute a
//! sentinel at the point of failure. The types exist so collaborators can
//! report *why* a lookup failed and detectors can log it.

use thiserror::Error;

/// The top-level error type for Contextwise operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Live lookup errors ---
    #[error("Lookup unavailable: {0}")]
    Lookup(#[from] LookupError),

    // --- Input errors ---
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown time context: {0}")]
    UnknownTimeContext(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a geolocation or network lookup produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("unexpected status {status_code}")]
    Status { status_code: u16 },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("name resolution failed: {0}")]
    Resolution(String),

    #[error("lookup disabled")]
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_displays_correctly() {
        let err = Error::Lookup(LookupError::Status { status_code: 503 });
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().starts_with("Lookup unavailable"));
    }

    #[test]
    fn unknown_role_displays_name() {
        let err = Error::UnknownRole("Astronaut".into());
        assert_eq!(err.to_string(), "Unknown role: Astronaut");
    }
}
