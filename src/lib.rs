// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! # owl-args
//!
//! Command-line configuration for a GPU Lucas-Lehmer batch tester: turns an
//! argument vector into a validated, normalized [`Configuration`], prints
//! usage on request, or rejects the input with a diagnostic that names the
//! offending flag.
//!
//! ## Design Philosophy
//!
//! **Injected collaborators**: the parser asks a [`DeviceEnumerator`] about
//! hardware and writes through a [`Logger`]. Neither is global, so a test
//! can hand it two fake GPUs and read back every line it printed.
//!
//! **Three-way outcome**: [`ParseOutcome`] separates a usable configuration,
//! a help request and a rejected command line. Nothing half-parsed escapes.
//!
//! ## Modules
//!
//! - [`config`] - the [`Configuration`] record, its defaults and normalization
//! - [`parser`] - the single-pass scanner and [`ParseOutcome`]
//! - [`flags`] - the fixed flag table
//! - [`device`] - device enumeration (static list or CUDA via candle)
//! - [`logging`] - the [`Logger`] seam and tracing subscriber setup
//! - [`error`] - [`ArgsError`] and the crate [`Result`]
//!
//! ## Quick Start
//!
//! ```rust
//! use owl_args::{ConfigParser, MemoryLogger, ParseOutcome, StaticDevices};
//!
//! let devices = StaticDevices::new(["Radeon VII"]);
//! let logger = MemoryLogger::new();
//!
//! let outcome = ConfigParser::new(&devices, &logger)
//!     .parse(["gpuowl", "-logstep", "10000", "-uid", "alice/box1"]);
//!
//! let config = outcome.config().expect("valid arguments");
//! assert_eq!(config.check_step, 100_000);
//! assert!(logger.contents().contains("-uid alice/box1"));
//! ```
//!
//! ## Feature Flags
//!
//! - `cuda` - let [`CandleDevices`] open CUDA devices through `candle-core`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod device;
pub mod error;
pub mod flags;
pub mod logging;
pub mod numeric;
pub mod parser;
pub mod traits;
pub mod usage;

// Re-exports for convenience
pub use config::{Configuration, DEFAULT_LOG_STEP};
pub use device::{
    CandleDevices, DeviceEnumerator, DeviceHandle, StaticDevices, MAX_LISTED_DEVICES,
};
pub use error::{ArgsError, ErrorKind, Result};
pub use logging::{
    init_logging, LogConfig, LogLevel, Logger, MemoryLogger, Severity, TracingLogger,
};
pub use parser::{ConfigParser, ParseOutcome, ParserOptions};
pub use traits::ValidatableConfig;

/// Parse `argv` with default options.
///
/// Shorthand for `ConfigParser::new(devices, logger).parse(argv)`.
pub fn parse_args<I, S>(
    argv: I,
    devices: &dyn DeviceEnumerator,
    logger: &dyn Logger,
) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ConfigParser::new(devices, logger).parse(argv)
}
