// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Help text for `-h` / `--help`.

use std::fmt;

use crate::config::{CHECK_STEP_FACTOR, SAVE_STEP_FACTOR};
use crate::device::{DeviceEnumerator, MAX_LISTED_DEVICES};

/// Renders the flag reference, the device list and the file reference.
///
/// The `-savestep` and `-checkstep` defaults are computed from `log_step`,
/// which is the log step in effect when help was requested.
pub struct Usage<'a> {
    log_step: u64,
    devices: &'a dyn DeviceEnumerator,
}

impl<'a> Usage<'a> {
    /// Usage text for the given log step and device set.
    #[must_use]
    pub fn new(log_step: u64, devices: &'a dyn DeviceEnumerator) -> Self {
        Self { log_step, devices }
    }
}

impl fmt::Display for Usage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let log_step = self.log_step;
        writeln!(f, "Command line options:")?;
        writeln!(
            f,
            "-logstep  <N>     : to log every <N> iterations (default {log_step})"
        )?;
        writeln!(
            f,
            "-savestep <N>     : to persist checkpoint every <N> iterations \
             (default {SAVE_STEP_FACTOR}*logstep == {})",
            log_step.saturating_mul(SAVE_STEP_FACTOR)
        )?;
        writeln!(
            f,
            "-checkstep <N>    : do Jacobi-symbol check every <N> iterations \
             (default {CHECK_STEP_FACTOR}*logstep == {})",
            log_step.saturating_mul(CHECK_STEP_FACTOR)
        )?;
        f.write_str(FLAG_REFERENCE)?;

        for device in self.devices.list(MAX_LISTED_DEVICES) {
            writeln!(
                f,
                "    {} : {}",
                device.ordinal(),
                self.devices.describe(device)
            )?;
        }

        f.write_str(FILE_REFERENCE)
    }
}

const FLAG_REFERENCE: &str = "\
-uid user/machine : set UID: string to be prepended to the result line
-supersafe        : use iterative double-check for reliable results on unreliable hardware
-cl \"<OpenCL compiler options>\", e.g. -cl \"-save-temps=tmp/ -O2\"
-selftest         : perform self tests from 'selftest.txt'
                    Self-test mode does not load/save checkpoints, worktodo.txt or results.txt.
-time kernels     : to benchmark kernels (logstep must be > 1)
-legacy           : use legacy kernels

-device <N>       : select specific device among:
";

const FILE_REFERENCE: &str = "
Files used by gpuOwL:
    - worktodo.txt : contains exponents to test \"Test=N\", one per line
    - results.txt : contains LL results
    - cN.ll : the most recent checkpoint for exponent <N>; will resume from here
    - tN.ll : the previous checkpoint, to be used if cN.ll is lost or corrupted
    - bN.ll : a temporary checkpoint that is renamed to cN.ll once successfully written
    - sN.iteration.residue.ll : a persistent checkpoint at the given iteration

The lines in worktodo.txt must be of one of these forms:
Test=70100200
Test=3181F68030F6BF3DCD32B77337D5EF6B,70100200,75,1
DoubleCheck=3181F68030F6BF3DCD32B77337D5EF6B,70100200,75,1
Test=0,70100200,0,0
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::StaticDevices;

    #[test]
    fn test_defaults_follow_log_step() {
        let devices = StaticDevices::none();
        let text = Usage::new(20_000, &devices).to_string();
        assert!(text.starts_with("Command line options:\n"));
        assert!(text.contains("(default 20000)"));
        assert!(text.contains("(default 500*logstep == 10000000)"));
        assert!(text.contains("(default 10*logstep == 200000)"));

        let text = Usage::new(100, &devices).to_string();
        assert!(text.contains("(default 500*logstep == 50000)"));
        assert!(text.contains("(default 10*logstep == 1000)"));
    }

    #[test]
    fn test_lists_devices_between_sections() {
        let devices = StaticDevices::new(["Radeon VII", "RX 580"]);
        let text = Usage::new(20_000, &devices).to_string();

        let header = text.find("select specific device among:").unwrap();
        let first = text.find("    0 : Radeon VII\n").unwrap();
        let second = text.find("    1 : RX 580\n").unwrap();
        let files = text.find("Files used by gpuOwL:").unwrap();
        assert!(header < first && first < second && second < files);
    }

    #[test]
    fn test_device_list_is_capped() {
        let devices = StaticDevices::with_count(MAX_LISTED_DEVICES + 4);
        let text = Usage::new(1, &devices).to_string();
        assert!(text.contains("    15 : device 15\n"));
        assert!(!text.contains("    16 : device 16\n"));
    }

    #[test]
    fn test_mentions_worktodo_forms() {
        let text = Usage::new(1, &StaticDevices::none()).to_string();
        assert!(text.contains("worktodo.txt"));
        assert!(text.contains("DoubleCheck="));
        assert!(text.contains("-time kernels"));
    }
}
