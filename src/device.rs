// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Compute device enumeration.
//!
//! The parser validates `-device <N>` and prints the device list for `-h`
//! through the [`DeviceEnumerator`] trait rather than querying hardware
//! itself. Two implementations ship with the crate:
//!
//! - [`StaticDevices`] - a fixed list of names, for tests and headless runs
//! - [`CandleDevices`] - CUDA devices discovered through `candle_core`
//!
//! ## Example
//!
//! ```rust
//! use owl_args::{DeviceEnumerator, StaticDevices};
//!
//! let devices = StaticDevices::new(["RTX 4070", "Titan V"]);
//! assert_eq!(devices.count(), 2);
//!
//! let handles = devices.list(16);
//! assert_eq!(devices.describe(handles[1]), "Titan V");
//! ```

use candle_core::Device;

/// Upper bound on how many devices are listed or probed.
pub const MAX_LISTED_DEVICES: usize = 16;

/// Opaque reference to one enumerated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceHandle(usize);

impl DeviceHandle {
    /// Handle for the device at `ordinal`.
    #[must_use]
    pub fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    /// Position of this device in enumeration order.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.0
    }
}

/// Lists and describes the compute devices available to this process.
pub trait DeviceEnumerator {
    /// Number of devices available.
    fn count(&self) -> usize;

    /// Handles of at most `max_count` devices, in ordinal order.
    fn list(&self, max_count: usize) -> Vec<DeviceHandle>;

    /// One-line human description of a device.
    fn describe(&self, device: DeviceHandle) -> String;

    /// Whether `ordinal` names an available device.
    fn contains(&self, ordinal: i64) -> bool {
        usize::try_from(ordinal).is_ok_and(|ordinal| ordinal < self.count())
    }
}

impl<D: DeviceEnumerator + ?Sized> DeviceEnumerator for &D {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn list(&self, max_count: usize) -> Vec<DeviceHandle> {
        (**self).list(max_count)
    }

    fn describe(&self, device: DeviceHandle) -> String {
        (**self).describe(device)
    }
}

/// A fixed set of named devices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDevices {
    names: Vec<String>,
}

impl StaticDevices {
    /// Devices with the given names, ordinal = position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// No devices at all.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// `count` devices named `device <i>`.
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self::new((0..count).map(|i| format!("device {i}")))
    }
}

impl DeviceEnumerator for StaticDevices {
    fn count(&self) -> usize {
        self.names.len()
    }

    fn list(&self, max_count: usize) -> Vec<DeviceHandle> {
        (0..self.names.len().min(max_count))
            .map(DeviceHandle::new)
            .collect()
    }

    fn describe(&self, device: DeviceHandle) -> String {
        self.names
            .get(device.ordinal())
            .cloned()
            .unwrap_or_else(|| format!("unknown device {}", device.ordinal()))
    }
}

/// CUDA devices visible to `candle_core`.
///
/// Ordinals are probed once, at construction, starting from 0 and stopping
/// at the first ordinal that fails to open. Without the `cuda` feature no
/// device opens and the list is empty.
#[derive(Debug, Clone, Default)]
pub struct CandleDevices {
    ordinals: Vec<usize>,
}

impl CandleDevices {
    /// Probe up to [`MAX_LISTED_DEVICES`] CUDA ordinals.
    #[must_use]
    pub fn probe() -> Self {
        Self::probe_up_to(MAX_LISTED_DEVICES)
    }

    /// Probe up to `limit` CUDA ordinals.
    #[must_use]
    pub fn probe_up_to(limit: usize) -> Self {
        let ordinals: Vec<usize> = (0..limit)
            .take_while(|&ordinal| match Device::new_cuda(ordinal) {
                Ok(_) => true,
                Err(err) => {
                    tracing::debug!(ordinal, %err, "CUDA probe stopped");
                    false
                }
            })
            .collect();

        tracing::debug!(found = ordinals.len(), "CUDA devices enumerated");
        Self { ordinals }
    }

    /// Open the candle device for a handle returned by [`DeviceEnumerator::list`].
    ///
    /// # Errors
    ///
    /// Returns the candle error if the device can no longer be opened.
    pub fn open(&self, device: DeviceHandle) -> candle_core::Result<Device> {
        Device::new_cuda(device.ordinal())
    }
}

impl DeviceEnumerator for CandleDevices {
    fn count(&self) -> usize {
        self.ordinals.len()
    }

    fn list(&self, max_count: usize) -> Vec<DeviceHandle> {
        self.ordinals
            .iter()
            .take(max_count)
            .copied()
            .map(DeviceHandle::new)
            .collect()
    }

    fn describe(&self, device: DeviceHandle) -> String {
        format!("CUDA:{}", device.ordinal())
    }
}
