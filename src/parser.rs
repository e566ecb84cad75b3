// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Argument vector → [`Configuration`].
//!
//! [`ConfigParser::parse`] makes one left-to-right pass over the arguments
//! (the program name at index 0 is skipped), stops at the first problem, and
//! only then normalizes the derived cadences. Work happens on a private copy
//! of the defaults, so a caller never sees a half-applied configuration.
//!
//! ```text
//! Scanning ──token──▶ Scanning
//!    │  ├──bad token──▶ Failed       (ParseOutcome::Error)
//!    │  └──-h/--help──▶ HelpPrinted  (ParseOutcome::Help)
//!    └──end of input──▶ Normalizing ──▶ Succeeded (ParseOutcome::Parsed)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use owl_args::{ConfigParser, MemoryLogger, ParseOutcome, StaticDevices};
//!
//! let devices = StaticDevices::new(["RTX 4070"]);
//! let logger = MemoryLogger::new();
//! let parser = ConfigParser::new(&devices, &logger);
//!
//! match parser.parse(["gpuowl", "-logstep", "1000", "-device", "0"]) {
//!     ParseOutcome::Parsed(config) => {
//!         assert_eq!(config.save_step, 500_000);
//!         assert_eq!(config.device, Some(0));
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

use crate::config::Configuration;
use crate::device::DeviceEnumerator;
use crate::error::{ArgsError, Result};
use crate::flags::{lookup, FlagKind, ValueContext};
use crate::logging::{Logger, Severity};
use crate::usage::Usage;

/// Warning written when `-time kernels` is dropped during normalization.
pub const TIME_KERNELS_IGNORED: &str = "Ignoring time kernels because logStep == 1";

/// Knobs for [`ConfigParser`].
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Reject numeric tokens that are not integers in full.
    ///
    /// Off by default: `"abc"` reads as 0 and `"12x"` as 12, which is what
    /// existing command lines for this tool expect.
    pub strict_numbers: bool,
    /// Write the configuration summary after a successful parse.
    pub echo: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict_numbers: false,
            echo: true,
        }
    }
}

impl ParserOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict numeric parsing.
    #[must_use]
    pub fn with_strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = strict;
        self
    }

    /// Enable or disable the configuration echo.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

/// How a parse ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ParseOutcome {
    /// All arguments accepted; the configuration is normalized.
    Parsed(Configuration),
    /// Usage was printed; the caller should exit without error.
    Help,
    /// The arguments were rejected; the diagnostic has been logged.
    Error(ArgsError),
}

impl ParseOutcome {
    /// Whether a usable configuration was produced.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Whether help was requested.
    #[must_use]
    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help)
    }

    /// Whether the arguments were rejected.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The parsed configuration, if any.
    #[must_use]
    pub fn config(&self) -> Option<&Configuration> {
        match self {
            Self::Parsed(config) => Some(config),
            _ => None,
        }
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ArgsError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// `Ok(Some(config))` on success, `Ok(None)` for help.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the arguments were invalid.
    pub fn into_result(self) -> Result<Option<Configuration>> {
        match self {
            Self::Parsed(config) => Ok(Some(config)),
            Self::Help => Ok(None),
            Self::Error(err) => Err(err),
        }
    }
}

/// What the scan loop ended with, before normalization.
enum Scan {
    Complete(Configuration),
    Help,
}

/// Parses argument vectors against a device set, reporting through a logger.
pub struct ConfigParser<'a> {
    devices: &'a dyn DeviceEnumerator,
    logger: &'a dyn Logger,
    options: ParserOptions,
}

impl<'a> ConfigParser<'a> {
    /// Parser with default [`ParserOptions`].
    #[must_use]
    pub fn new(devices: &'a dyn DeviceEnumerator, logger: &'a dyn Logger) -> Self {
        Self {
            devices,
            logger,
            options: ParserOptions::default(),
        }
    }

    /// Replace the parser options.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a full argument vector, program name included.
    ///
    /// Exactly one error line is logged for a rejected vector. Help writes
    /// the usage text. Success writes the configuration summary (unless
    /// disabled) and, if `-time kernels` had to be dropped, one warning.
    pub fn parse<I, S>(&self, argv: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = match self.scan(argv) {
            Ok(Scan::Complete(config)) => config,
            Ok(Scan::Help) => {
                tracing::debug!("help requested, stopping");
                return ParseOutcome::Help;
            }
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), "arguments rejected");
                self.logger.write(Severity::Error, &err.to_string());
                return ParseOutcome::Error(err);
            }
        };

        if config.normalize() {
            self.logger.write(Severity::Warn, TIME_KERNELS_IGNORED);
        }
        if self.options.echo {
            self.logger.write(Severity::Info, &config.summary());
        }
        ParseOutcome::Parsed(config)
    }

    /// The help text for the current device set and `log_step`.
    #[must_use]
    pub fn usage(&self, log_step: u64) -> String {
        Usage::new(log_step, self.devices).to_string()
    }

    fn scan<I, S>(&self, argv: I) -> Result<Scan>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ctx = ValueContext {
            devices: self.devices,
            strict_numbers: self.options.strict_numbers,
        };
        let mut config = Configuration::default();
        let mut tokens = argv.into_iter().skip(1);

        while let Some(token) = tokens.next() {
            let token = token.as_ref();
            let Some(flag) = lookup(token) else {
                return Err(ArgsError::unknown_flag(token));
            };

            match flag.kind {
                FlagKind::Help => {
                    self.logger
                        .write(Severity::Info, &self.usage(config.log_step));
                    return Ok(Scan::Help);
                }
                FlagKind::Switch(apply) => apply(&mut config),
                FlagKind::Value { expects, apply } => {
                    let value = tokens
                        .next()
                        .ok_or_else(|| ArgsError::missing_value(flag.name, expects))?;
                    apply(&mut config, value.as_ref(), &ctx)?;
                }
                FlagKind::Literal { literal, apply } => match tokens.next() {
                    Some(next) if next.as_ref() == literal => apply(&mut config),
                    _ => return Err(ArgsError::MalformedTimeFlag),
                },
            }
        }

        Ok(Scan::Complete(config))
    }
}
