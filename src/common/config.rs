// src/common/config.rs

use super::types::Hectopascals;

// === Barometric reference ===

/// Sea level pressure assumed until a caller supplies a measured value.
pub const STANDARD_SEA_LEVEL_PRESSURE: Hectopascals = Hectopascals::new(1013.25);

/// Scale factor of the hypsometric altitude approximation, in meters.
pub const ALTITUDE_SCALE_M: f32 = 44330.0;
/// Exponent of the hypsometric altitude approximation (1 / 5.255).
pub const ALTITUDE_EXPONENT: f32 = 1.0 / 5.255;

// === Capacities ===
//
// Capacities are const generics on the facades. These are the sizes the type
// aliases in `devices` pick when the caller has no better number.

/// Callbacks per event kind.
pub const DEFAULT_CALLBACK_CAPACITY: usize = 4;
/// Outstanding asynchronous sample requests.
pub const DEFAULT_QUEUE_DEPTH: usize = 2;

// === Overflow behavior ===

/// What a callback registry does when a registration would exceed its capacity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum OverflowPolicy {
    /// Panic. Registration failures on a fixed-size system are configuration
    /// bugs and must not be silently swallowed.
    #[default]
    Abort,
    /// Refuse the registration with `SensorError::RegistryFull`.
    Reject,
}
