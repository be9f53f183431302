//! Error types for access decisions
//!
//! Evaluating a specification never fails. The only failure a caller sees is
//! a gate refusing a subject, reported as [`GateError::AccessDenied`] and
//! returned to the caller, who decides whether to print it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for gate operations
pub type GateResult<T> = std::result::Result<T, GateError>;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Stable, machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Subject does not satisfy the gate's specification
    AccessDenied,
}

impl ErrorCode {
    /// Code string for logs and client output
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AccessDenied => "ACCESS_DENIED",
        }
    }

    /// Error category for log fields
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::AccessDenied => "authorization",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// GATE ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The subject failed the gate's specification
    #[error("{gate}: access denied, user: {subject}")]
    AccessDenied {
        /// Gate name
        gate: String,
        /// Display form of the refused subject
        subject: String,
    },
}

impl GateError {
    pub fn access_denied(gate: impl Into<String>, subject: impl fmt::Display) -> Self {
        GateError::AccessDenied {
            gate: gate.into(),
            subject: subject.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GateError::AccessDenied { .. } => ErrorCode::AccessDenied,
        }
    }

    /// Name of the gate that produced this error
    pub fn gate(&self) -> &str {
        match self {
            GateError::AccessDenied { gate, .. } => gate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_display() {
        let err = GateError::access_denied("high level", "Alex (Type:ADMIN Locked:false)");
        assert_eq!(
            err.to_string(),
            "high level: access denied, user: Alex (Type:ADMIN Locked:false)"
        );
        assert_eq!(err.gate(), "high level");
    }

    #[test]
    fn test_error_code() {
        let err = GateError::access_denied("g", "u");
        assert_eq!(err.code(), ErrorCode::AccessDenied);
        assert_eq!(err.code().to_string(), "ACCESS_DENIED");
        assert_eq!(err.code().category(), "authorization");
        assert_eq!(
            serde_json::to_string(&ErrorCode::AccessDenied).unwrap(),
            "\"ACCESS_DENIED\""
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = GateError::access_denied("g", "u").into();
        assert!(err.downcast_ref::<GateError>().is_some());
    }
}
