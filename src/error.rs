// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Error types for command-line parsing.
//!
//! Every failure here is a user-input error detected while scanning the
//! argument vector. The `Display` text of each variant is the diagnostic
//! line written to the [`Logger`](crate::logging::Logger), so it names the
//! offending flag or token.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ArgsError
//! ├── MissingValue        - value flag at the end of the argument vector
//! ├── UnknownFlag         - token not in the flag table
//! ├── InvalidNumericField - non-positive (or, in strict mode, non-numeric) step
//! ├── DeviceOutOfRange    - -device outside [0, count)
//! ├── MalformedTimeFlag   - -time not followed by `kernels`
//! └── InvalidConfig       - a parsed configuration violates an invariant
//! ```

use thiserror::Error;

/// Result type alias for owl-args operations.
pub type Result<T> = std::result::Result<T, ArgsError>;

/// Errors produced while turning an argument vector into a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgsError {
    /// A value flag was the last token.
    #[error("{flag} expects {expects}")]
    MissingValue {
        /// The flag that needed a value.
        flag: String,
        /// Human description of the expected argument.
        expects: String,
    },

    /// Token is not a recognized flag.
    #[error("Argument '{0}' not understood")]
    UnknownFlag(String),

    /// A step flag received a value that is not a positive integer.
    #[error("invalid {flag} '{value}'")]
    InvalidNumericField {
        /// The flag being parsed.
        flag: String,
        /// The raw token as given on the command line.
        value: String,
    },

    /// Requested device ordinal is not among the enumerated devices.
    #[error("invalid -device {index} (must be between [0, {}])", max_ordinal(.count))]
    DeviceOutOfRange {
        /// Ordinal as parsed from the command line.
        index: i64,
        /// Number of devices available at parse time.
        count: usize,
    },

    /// `-time` was not followed by the literal `kernels`.
    #[error("-time expects 'kernels'")]
    MalformedTimeFlag,

    /// A configuration failed invariant validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Fieldless discriminant of [`ArgsError`], for callers that branch on the
/// failure class without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ArgsError::MissingValue`].
    MissingValue,
    /// See [`ArgsError::UnknownFlag`].
    UnknownFlag,
    /// See [`ArgsError::InvalidNumericField`].
    InvalidNumericField,
    /// See [`ArgsError::DeviceOutOfRange`].
    DeviceOutOfRange,
    /// See [`ArgsError::MalformedTimeFlag`].
    MalformedTimeFlag,
    /// See [`ArgsError::InvalidConfig`].
    InvalidConfig,
}

/// Highest valid ordinal for `count` devices; `-1` when there are none.
#[allow(clippy::cast_possible_wrap, clippy::trivially_copy_pass_by_ref)]
fn max_ordinal(count: &usize) -> i64 {
    *count as i64 - 1
}

impl ArgsError {
    /// Create a missing value error.
    pub fn missing_value(flag: impl Into<String>, expects: impl Into<String>) -> Self {
        Self::MissingValue {
            flag: flag.into(),
            expects: expects.into(),
        }
    }

    /// Create an unknown flag error.
    pub fn unknown_flag(token: impl Into<String>) -> Self {
        Self::UnknownFlag(token.into())
    }

    /// Create an invalid numeric field error.
    pub fn invalid_numeric(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumericField {
            flag: flag.into(),
            value: value.into(),
        }
    }

    /// Create a device out of range error.
    #[must_use]
    pub fn device_out_of_range(index: i64, count: usize) -> Self {
        Self::DeviceOutOfRange { index, count }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// The failure class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::UnknownFlag(_) => ErrorKind::UnknownFlag,
            Self::InvalidNumericField { .. } => ErrorKind::InvalidNumericField,
            Self::DeviceOutOfRange { .. } => ErrorKind::DeviceOutOfRange,
            Self::MalformedTimeFlag => ErrorKind::MalformedTimeFlag,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArgsError::missing_value("-logstep", "<N> argument");
        assert_eq!(err.to_string(), "-logstep expects <N> argument");

        let err = ArgsError::unknown_flag("-bogus");
        assert_eq!(err.to_string(), "Argument '-bogus' not understood");

        let err = ArgsError::invalid_numeric("-savestep", "-5");
        assert_eq!(err.to_string(), "invalid -savestep '-5'");

        assert_eq!(
            ArgsError::MalformedTimeFlag.to_string(),
            "-time expects 'kernels'"
        );
    }

    #[test]
    fn test_device_range_display() {
        let err = ArgsError::device_out_of_range(3, 2);
        assert_eq!(
            err.to_string(),
            "invalid -device 3 (must be between [0, 1])"
        );

        // No devices at all still renders a sane upper bound.
        let err = ArgsError::device_out_of_range(0, 0);
        assert!(err.to_string().contains("[0, -1]"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            ArgsError::unknown_flag("x").kind(),
            ErrorKind::UnknownFlag
        );
        assert_eq!(
            ArgsError::device_out_of_range(-1, 4).kind(),
            ErrorKind::DeviceOutOfRange
        );
        assert_eq!(
            ArgsError::invalid_config("bad").kind(),
            ErrorKind::InvalidConfig
        );
    }
}
