// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! The run configuration produced by the parser.
//!
//! ## Cadences
//!
//! `log_step` is the base unit of progress. `save_step` (checkpointing) and
//! `check_step` (Jacobi-symbol verification) are kept as whole multiples of
//! it. A value of `0` for either means "not given on the command line" and
//! is resolved by [`Configuration::normalize`]:
//!
//! | Field | Unset default |
//! |-------|---------------|
//! | `save_step` | `500 * log_step` |
//! | `check_step` | `10 * log_step` |
//!
//! ## Invariants after a successful parse
//!
//! 1. `log_step > 0`
//! 2. `save_step >= log_step`, `save_step % log_step == 0`
//! 3. `check_step >= log_step`, `check_step % log_step == 0`
//! 4. `time_kernels` implies `log_step > 1`
//! 5. `device` is `None` or an available ordinal

use std::fmt;

use crate::device::DeviceEnumerator;
use crate::error::{ArgsError, Result};
use crate::traits::ValidatableConfig;

/// Default `-logstep`.
pub const DEFAULT_LOG_STEP: u64 = 20_000;

/// Unset `save_step` resolves to this many log steps.
pub const SAVE_STEP_FACTOR: u64 = 500;

/// Unset `check_step` resolves to this many log steps.
pub const CHECK_STEP_FACTOR: u64 = 10;

/// Validated, normalized run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Options passed through verbatim to the OpenCL compiler (`-cl`).
    pub compiler_args: String,
    /// Identifier prepended to result lines (`-uid`).
    pub uid: String,
    /// Iterations between progress logs (`-logstep`).
    pub log_step: u64,
    /// Iterations between checkpoints (`-savestep`); 0 until normalized.
    pub save_step: u64,
    /// Iterations between correctness checks (`-checkstep`); 0 until normalized.
    pub check_step: u64,
    /// Selected device ordinal (`-device`); `None` lets the caller choose.
    pub device: Option<usize>,
    /// Benchmark individual kernels (`-time kernels`).
    pub time_kernels: bool,
    /// Run the self tests instead of the work queue (`-selftest`).
    pub self_test: bool,
    /// Use the legacy kernel variants (`-legacy`).
    pub use_legacy_kernels: bool,
    /// Iterative double-check for unreliable hardware (`-supersafe`).
    pub super_safe: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            compiler_args: String::new(),
            uid: String::new(),
            log_step: DEFAULT_LOG_STEP,
            save_step: 0,
            check_step: 0,
            device: None,
            time_kernels: false,
            self_test: false,
            use_legacy_kernels: false,
            super_safe: false,
        }
    }
}

impl Configuration {
    /// Create a configuration holding the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Device ordinal in the `-1 = caller picks` encoding.
    #[must_use]
    pub fn device_index(&self) -> i64 {
        self.device
            .and_then(|ordinal| i64::try_from(ordinal).ok())
            .unwrap_or(-1)
    }

    /// `save_step` that an unset `-savestep` resolves to.
    #[must_use]
    pub fn default_save_step(&self) -> u64 {
        self.log_step.saturating_mul(SAVE_STEP_FACTOR)
    }

    /// `check_step` that an unset `-checkstep` resolves to.
    #[must_use]
    pub fn default_check_step(&self) -> u64 {
        self.log_step.saturating_mul(CHECK_STEP_FACTOR)
    }

    /// Fill unset cadences and enforce the cross-field invariants.
    ///
    /// Returns `true` when `time_kernels` had to be switched off because
    /// `log_step == 1`; the caller reports that as a warning. Applying this
    /// twice with the same `log_step` changes nothing the second time.
    pub fn normalize(&mut self) -> bool {
        debug_assert!(self.log_step > 0, "log_step must be positive");
        let log_step = self.log_step.max(1);

        if self.save_step == 0 {
            self.save_step = self.default_save_step();
        }
        if self.check_step == 0 {
            self.check_step = self.default_check_step();
        }

        self.save_step = self.save_step.max(log_step);
        self.check_step = self.check_step.max(log_step);

        self.save_step -= self.save_step % log_step;
        self.check_step -= self.check_step % log_step;

        if self.time_kernels && log_step == 1 {
            self.time_kernels = false;
            return true;
        }
        false
    }

    /// Check that `device` is available on `devices`.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError::DeviceOutOfRange` for an ordinal past the end.
    pub fn validate_device(&self, devices: &dyn DeviceEnumerator) -> Result<()> {
        match self.device {
            Some(ordinal) if ordinal >= devices.count() => Err(ArgsError::device_out_of_range(
                i64::try_from(ordinal).unwrap_or(i64::MAX),
                devices.count(),
            )),
            _ => Ok(()),
        }
    }

    /// The one-line echo written after a successful parse.
    ///
    /// Optional parts appear only when they differ from the defaults.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config: -logstep {} -savestep {} -checkstep {}",
            self.log_step, self.save_step, self.check_step
        )?;
        if !self.uid.is_empty() {
            write!(f, " -uid {}", self.uid)?;
        }
        if self.super_safe {
            f.write_str(" -supersafe")?;
        }
        if !self.compiler_args.is_empty() {
            write!(f, " -cl \"{}\"", self.compiler_args)?;
        }
        if self.self_test {
            f.write_str(" -selftest")?;
        }
        if self.time_kernels {
            f.write_str(" -time kernels")?;
        }
        if self.use_legacy_kernels {
            f.write_str(" -legacy")?;
        }
        Ok(())
    }
}

impl ValidatableConfig for Configuration {
    fn validate(&self) -> Result<()> {
        if self.log_step == 0 {
            return Err(ArgsError::invalid_config("log_step must be > 0"));
        }
        for (name, step) in [("save_step", self.save_step), ("check_step", self.check_step)] {
            if step < self.log_step {
                return Err(ArgsError::invalid_config(format!(
                    "{name} {step} is below log_step {}",
                    self.log_step
                )));
            }
            if step % self.log_step != 0 {
                return Err(ArgsError::invalid_config(format!(
                    "{name} {step} is not a multiple of log_step {}",
                    self.log_step
                )));
            }
        }
        if self.time_kernels && self.log_step == 1 {
            return Err(ArgsError::invalid_config(
                "time_kernels requires log_step > 1",
            ));
        }
        Ok(())
    }
}
