// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Shared trait interfaces.
//!
//! - [`ValidatableConfig`] - invariant checks on a finished configuration
//!
//! The collaborator traits the parser consumes live next to their
//! implementations: [`DeviceEnumerator`](crate::device::DeviceEnumerator)
//! and [`Logger`](crate::logging::Logger).

use crate::error::Result;

/// Configuration validation trait.
///
/// # Example
///
/// ```rust
/// use owl_args::{ArgsError, Result, ValidatableConfig};
///
/// #[derive(Clone)]
/// struct Cadence {
///     every: u64,
/// }
///
/// impl ValidatableConfig for Cadence {
///     fn validate(&self) -> Result<()> {
///         if self.every == 0 {
///             return Err(ArgsError::invalid_config("every must be > 0"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Cadence { every: 10 }.validate().is_ok());
/// ```
pub trait ValidatableConfig: Clone + Send + Sync {
    /// Validate the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError::InvalidConfig` if validation fails.
    fn validate(&self) -> Result<()>;
}
