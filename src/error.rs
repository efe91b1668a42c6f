//! Error types for the seqbench library.
//!
//! Policies have no fault path: an operation a container kind cannot
//! express reports [`Outcome::NotApplicable`](crate::traits::Outcome). The
//! only errors are invalid parameters handed to fallible constructors.
//!
//! ## Example Usage
//!
//! ```
//! use seqbench::error::ConfigError;
//! use seqbench::policy::operation::RandomErase;
//!
//! // Fallible constructor for user-configurable parameters
//! assert!(RandomErase::try_new(0.25).is_ok());
//!
//! // Out-of-range probability is caught without panicking
//! let bad = RandomErase::try_new(1.5);
//! assert!(matches!(bad, Err(ConfigError::InvalidProbability(p)) if p == 1.5));
//! ```

use thiserror::Error;

/// Error returned when policy parameters are invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A probability outside `[0, 1]` (or NaN).
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Any other rejected parameter.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates a free-form `ConfigError::Invalid`.
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
