//! Error types and handling for the band engine
//!
//! This module defines the `BandsError` enum. Only upfront checks produce
//! errors: structurally invalid parameters and mis-sized output buffers.
//! Short input and non-finite prices are not errors; they surface as NaN
//! slots in the output.

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandsError {
    /// Window length of zero
    InvalidLength {
        /// Rejected length
        length: usize,
        /// Human-readable rule that was broken
        reason: String,
    },

    /// A parameter outside its accepted range, e.g. a NaN multiplier
    InvalidParameter {
        /// Field name as the host spells it (`stdDevMultiplier`)
        name: String,
        /// Rejected value, formatted
        value: String,
        /// What would have been accepted
        expected: String,
    },

    /// Output buffer or companion column has the wrong number of elements
    LengthMismatch {
        /// Required element count
        expected: usize,
        /// Element count provided
        actual: usize,
    },
}

impl BandsError {
    /// Shorthand for [`BandsError::InvalidLength`].
    ///
    /// ```rust
    /// use bbands_core::error::BandsError;
    ///
    /// let err = BandsError::invalid_length(0, "length must be greater than zero");
    /// assert_eq!(err.to_string(), "Invalid length 0: length must be greater than zero");
    /// ```
    pub fn invalid_length<S: Into<String>>(length: usize, reason: S) -> Self {
        BandsError::InvalidLength {
            length,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`BandsError::InvalidParameter`].
    pub fn invalid_parameter<S: Into<String>>(name: S, value: S, expected: S) -> Self {
        BandsError::InvalidParameter {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Shorthand for [`BandsError::LengthMismatch`].
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        BandsError::LengthMismatch { expected, actual }
    }
}

impl core::fmt::Display for BandsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BandsError::InvalidLength { length, reason } => {
                write!(f, "Invalid length {}: {}", length, reason)
            }
            BandsError::InvalidParameter {
                name,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}': got '{}', expected {}",
                    name, value, expected
                )
            }
            BandsError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BandsError {}

/// Result type alias for engine operations
pub type Result<T> = core::result::Result<T, BandsError>;
