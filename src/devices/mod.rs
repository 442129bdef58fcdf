// src/devices/mod.rs

// Concrete virtual devices built on the generic sensor facades.
pub mod barometric;
pub mod environment;

// --- Public Re-exports ---
pub use barometric::{altitude, BarometricSample, Barometer};
pub use environment::{
    AsyncHumiditySensor, AsyncTemperatureSensor, HumiditySensor, RangeChecked, TemperatureSensor,
};

use crate::common::config::DEFAULT_CALLBACK_CAPACITY;
use crate::sensor::{AsyncSensor, SyncSensor};

/// Barometric sensor sampled synchronously, with pressure/altitude callbacks.
pub type BarometricSensor<P, const N: usize = DEFAULT_CALLBACK_CAPACITY> =
    SyncSensor<Barometer<P>, N>;

/// Barometric sensor for asynchronous systems. The producer services requests
/// with a [`Barometer`].
pub type AsyncBarometricSensor<A, const N: usize = DEFAULT_CALLBACK_CAPACITY> =
    AsyncSensor<A, BarometricSample, N>;
