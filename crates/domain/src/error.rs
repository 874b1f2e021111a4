//! Unified error types for the domain layer
//!
//! Provides a common error type used across all progression operations,
//! enabling consistent error handling without forcing callers to use String
//! or anyhow.

use thiserror::Error;

/// Unified error type for progression domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed numeric input (level zero, bad curve coefficients, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Upgrade ID not present in the static catalog
    #[error("Unknown upgrade: {0}")]
    UnknownUpgrade(String),

    /// Gang already owns this upgrade
    #[error("Upgrade already owned: {0}")]
    AlreadyOwned(String),

    /// Gang level is below the upgrade's requirement
    #[error("Level too low: requires {required}, gang is {actual}")]
    LevelTooLow { required: u32, actual: u32 },

    /// Doctrine ID is not one of the registered paths
    #[error("Unknown doctrine: {0}")]
    UnknownDoctrine(String),
}

impl DomainError {
    /// Creates an invalid-argument error for malformed numeric input.
    ///
    /// Use this when curve or config inputs are out of range:
    /// - Level zero passed to the curve
    /// - Zero growth coefficients
    /// - Non-finite or sub-1.0 cap multipliers
    /// - Cap thresholds out of order
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an unknown-upgrade error
    pub fn unknown_upgrade(id: impl Into<String>) -> Self {
        Self::UnknownUpgrade(id.into())
    }

    /// Create an already-owned error
    pub fn already_owned(id: impl Into<String>) -> Self {
        Self::AlreadyOwned(id.into())
    }

    /// Create a level-too-low error
    pub fn level_too_low(required: u32, actual: u32) -> Self {
        Self::LevelTooLow { required, actual }
    }

    /// Create an unknown-doctrine error
    pub fn unknown_doctrine(id: impl Into<String>) -> Self {
        Self::UnknownDoctrine(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = DomainError::invalid_argument("level must be >= 1");
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: level must be >= 1");
    }

    #[test]
    fn test_unknown_upgrade_error() {
        let err = DomainError::unknown_upgrade("golden_toilet");
        assert!(matches!(err, DomainError::UnknownUpgrade(_)));
        assert!(err.to_string().contains("golden_toilet"));
    }

    #[test]
    fn test_level_too_low_error() {
        let err = DomainError::level_too_low(10, 5);
        assert_eq!(err, DomainError::LevelTooLow { required: 10, actual: 5 });
        assert_eq!(err.to_string(), "Level too low: requires 10, gang is 5");
    }

    #[test]
    fn test_unknown_doctrine_error() {
        let err = DomainError::unknown_doctrine("warpath");
        assert!(matches!(err, DomainError::UnknownDoctrine(_)));
        assert!(err.to_string().contains("warpath"));
    }
}
