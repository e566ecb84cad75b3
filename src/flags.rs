// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! The fixed table of recognized flags.
//!
//! Each flag name maps to a small tagged handler describing how many tokens
//! it consumes and what it does to the working [`Configuration`]:
//!
//! | Shape | Tokens | Flags |
//! |-------|--------|-------|
//! | [`FlagKind::Help`] | 1 | `-h`, `--help` |
//! | [`FlagKind::Switch`] | 1 | `-supersafe`, `-selftest`, `-legacy` |
//! | [`FlagKind::Value`] | 2 | `-logstep`, `-savestep`, `-checkstep`, `-uid`, `-cl`, `-device` |
//! | [`FlagKind::Literal`] | 2 | `-time kernels` |
//!
//! Lookup is by exact string equality; there are no abbreviations, no
//! `--flag=value` forms and no clustering.

use crate::config::Configuration;
use crate::device::DeviceEnumerator;
use crate::error::{ArgsError, Result};
use crate::numeric::parse_int;

/// What a value handler may consult besides the token itself.
pub struct ValueContext<'a> {
    /// Devices to validate `-device` against.
    pub devices: &'a dyn DeviceEnumerator,
    /// Reject numeric tokens that are not integers in full.
    pub strict_numbers: bool,
}

/// Applies a flag's value token to the working configuration.
pub type ValueHandler = fn(&mut Configuration, &str, &ValueContext<'_>) -> Result<()>;

/// How a flag is shaped on the command line.
#[derive(Clone, Copy)]
pub enum FlagKind {
    /// Print usage and stop.
    Help,
    /// Takes no argument.
    Switch(fn(&mut Configuration)),
    /// Takes the next token as its value.
    Value {
        /// Description used when the value is missing.
        expects: &'static str,
        /// Validates and stores the value.
        apply: ValueHandler,
    },
    /// Must be followed by one exact literal token.
    Literal {
        /// The only accepted following token.
        literal: &'static str,
        /// Applied when the literal matches.
        apply: fn(&mut Configuration),
    },
}

/// One entry of the flag table.
#[derive(Clone, Copy)]
pub struct Flag {
    /// The token as typed, including dashes.
    pub name: &'static str,
    /// Shape and handler.
    pub kind: FlagKind,
}

impl std::fmt::Debug for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self.kind {
            FlagKind::Help => "help",
            FlagKind::Switch(_) => "switch",
            FlagKind::Value { .. } => "value",
            FlagKind::Literal { .. } => "literal",
        };
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("shape", &shape)
            .finish()
    }
}

const STEP_EXPECTS: &str = "<N> argument";

/// Every recognized flag.
pub static FLAGS: &[Flag] = &[
    Flag {
        name: "-h",
        kind: FlagKind::Help,
    },
    Flag {
        name: "--help",
        kind: FlagKind::Help,
    },
    Flag {
        name: "-logstep",
        kind: FlagKind::Value {
            expects: STEP_EXPECTS,
            apply: |config, token, ctx| {
                config.log_step = parse_step("-logstep", token, ctx)?;
                Ok(())
            },
        },
    },
    Flag {
        name: "-savestep",
        kind: FlagKind::Value {
            expects: STEP_EXPECTS,
            apply: |config, token, ctx| {
                config.save_step = parse_step("-savestep", token, ctx)?;
                Ok(())
            },
        },
    },
    Flag {
        name: "-checkstep",
        kind: FlagKind::Value {
            expects: STEP_EXPECTS,
            apply: |config, token, ctx| {
                config.check_step = parse_step("-checkstep", token, ctx)?;
                Ok(())
            },
        },
    },
    Flag {
        name: "-uid",
        kind: FlagKind::Value {
            expects: "userName/computerName",
            apply: |config, token, _| {
                config.uid = token.to_string();
                Ok(())
            },
        },
    },
    Flag {
        name: "-supersafe",
        kind: FlagKind::Switch(|config| config.super_safe = true),
    },
    Flag {
        name: "-cl",
        kind: FlagKind::Value {
            expects: "options string to pass to CL compiler",
            apply: |config, token, _| {
                config.compiler_args = token.to_string();
                Ok(())
            },
        },
    },
    Flag {
        name: "-selftest",
        kind: FlagKind::Switch(|config| config.self_test = true),
    },
    Flag {
        name: "-time",
        kind: FlagKind::Literal {
            literal: "kernels",
            apply: |config| config.time_kernels = true,
        },
    },
    Flag {
        name: "-legacy",
        kind: FlagKind::Switch(|config| config.use_legacy_kernels = true),
    },
    Flag {
        name: "-device",
        kind: FlagKind::Value {
            expects: STEP_EXPECTS,
            apply: apply_device,
        },
    },
];

/// Find the table entry for `token`.
#[must_use]
pub fn lookup(token: &str) -> Option<&'static Flag> {
    FLAGS.iter().find(|flag| flag.name == token)
}

/// A positive cadence value.
fn parse_step(flag: &str, token: &str, ctx: &ValueContext<'_>) -> Result<u64> {
    let parsed = parse_int(token);
    if ctx.strict_numbers && !parsed.exact {
        return Err(ArgsError::invalid_numeric(flag, token));
    }
    match u64::try_from(parsed.value) {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(ArgsError::invalid_numeric(flag, token)),
    }
}

fn apply_device(config: &mut Configuration, token: &str, ctx: &ValueContext<'_>) -> Result<()> {
    let parsed = parse_int(token);
    if ctx.strict_numbers && !parsed.exact {
        return Err(ArgsError::invalid_numeric("-device", token));
    }
    let count = ctx.devices.count();
    match usize::try_from(parsed.value) {
        Ok(ordinal) if ordinal < count => {
            config.device = Some(ordinal);
            Ok(())
        }
        _ => Err(ArgsError::device_out_of_range(parsed.value, count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::StaticDevices;

    fn ctx(devices: &StaticDevices, strict: bool) -> ValueContext<'_> {
        ValueContext {
            devices,
            strict_numbers: strict,
        }
    }

    fn apply_value(name: &str, token: &str, ctx: &ValueContext<'_>) -> Result<Configuration> {
        let mut config = Configuration::default();
        match lookup(name).map(|flag| flag.kind) {
            Some(FlagKind::Value { apply, .. }) => apply(&mut config, token, ctx)?,
            _ => panic!("{name} is not a value flag"),
        }
        Ok(config)
    }

    #[test]
    fn test_table_names_are_unique() {
        for (i, flag) in FLAGS.iter().enumerate() {
            assert!(
                FLAGS[i + 1..].iter().all(|other| other.name != flag.name),
                "duplicate flag {}",
                flag.name
            );
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("-logstep").is_some());
        assert!(lookup("--help").is_some());
        assert!(lookup("-LOGSTEP").is_none());
        assert!(lookup("--logstep").is_none());
        assert!(lookup("-log").is_none());
        assert!(lookup("kernels").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_flag_shapes() {
        assert!(matches!(lookup("-h").unwrap().kind, FlagKind::Help));
        assert!(matches!(lookup("-legacy").unwrap().kind, FlagKind::Switch(_)));
        assert!(matches!(
            lookup("-time").unwrap().kind,
            FlagKind::Literal {
                literal: "kernels",
                ..
            }
        ));
        assert!(matches!(
            lookup("-cl").unwrap().kind,
            FlagKind::Value { .. }
        ));
    }

    #[test]
    fn test_step_values() {
        let devices = StaticDevices::none();
        let config = apply_value("-logstep", "100", &ctx(&devices, false)).unwrap();
        assert_eq!(config.log_step, 100);

        let err = apply_value("-savestep", "0", &ctx(&devices, false)).unwrap_err();
        assert_eq!(err, ArgsError::invalid_numeric("-savestep", "0"));

        let err = apply_value("-checkstep", "-4", &ctx(&devices, false)).unwrap_err();
        assert_eq!(err.to_string(), "invalid -checkstep '-4'");
    }

    #[test]
    fn test_lax_and_strict_steps() {
        let devices = StaticDevices::none();
        let config = apply_value("-logstep", "50x", &ctx(&devices, false)).unwrap();
        assert_eq!(config.log_step, 50);

        let err = apply_value("-logstep", "50x", &ctx(&devices, true)).unwrap_err();
        assert_eq!(err, ArgsError::invalid_numeric("-logstep", "50x"));
    }

    #[test]
    fn test_device_values() {
        let devices = StaticDevices::with_count(2);
        let config = apply_value("-device", "1", &ctx(&devices, false)).unwrap();
        assert_eq!(config.device, Some(1));

        let err = apply_value("-device", "2", &ctx(&devices, false)).unwrap_err();
        assert_eq!(err, ArgsError::device_out_of_range(2, 2));

        let err = apply_value("-device", "-1", &ctx(&devices, false)).unwrap_err();
        assert_eq!(err, ArgsError::device_out_of_range(-1, 2));

        // atoi reads "gpu" as 0, which is a real device.
        let config = apply_value("-device", "gpu", &ctx(&devices, false)).unwrap();
        assert_eq!(config.device, Some(0));

        let err = apply_value("-device", "gpu", &ctx(&devices, true)).unwrap_err();
        assert_eq!(err, ArgsError::invalid_numeric("-device", "gpu"));
    }

    #[test]
    fn test_string_values_are_verbatim() {
        let devices = StaticDevices::none();
        let config = apply_value("-uid", "alice/box1", &ctx(&devices, true)).unwrap();
        assert_eq!(config.uid, "alice/box1");

        let config =
            apply_value("-cl", "-save-temps=tmp/ -O2", &ctx(&devices, true)).unwrap();
        assert_eq!(config.compiler_args, "-save-temps=tmp/ -O2");
    }
}
