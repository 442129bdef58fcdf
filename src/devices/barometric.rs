// src/devices/barometric.rs

//! Barometric pressure sensor that also reports altitude.
//!
//! - Pressure is reported in hectopascal, compensated for ambient temperature
//!   by the underlying transducer if required.
//! - Altitude is reported in meters and corrected for sea level pressure. If no
//!   value for SLP has been supplied, calculations assume 1013.25 hPa.

use crate::common::{
    config::{ALTITUDE_EXPONENT, ALTITUDE_SCALE_M, STANDARD_SEA_LEVEL_PRESSURE},
    hal_traits::Transducer,
    types::{Hectopascals, Meters, Sample},
};
use crate::sensor::SyncSensor;
use core::cell::Cell;
use core::fmt;
use critical_section::Mutex;
use num_traits::Float;

/// Pressure and the altitude derived from it, delivered together to callbacks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BarometricSample {
    pub pressure: Hectopascals,
    pub altitude: Meters,
}

/// Altitude for `pressure` relative to `sea_level`, using the hypsometric
/// approximation h = 44330 * (1 - (p / p0)^(1 / 5.255)).
pub fn altitude(pressure: Hectopascals, sea_level: Hectopascals) -> Meters {
    let ratio = pressure.as_f32() / sea_level.as_f32();
    Meters::new(ALTITUDE_SCALE_M * (1.0 - Float::powf(ratio, ALTITUDE_EXPONENT)))
}

/// Transducer adapter turning raw pressure readings into [`BarometricSample`]s.
///
/// Owns the sea level pressure reference. A reading whose altitude cannot be
/// computed (non-finite result, e.g. a zero reference) is reported invalid.
pub struct Barometer<P> {
    pressure: P,
    sea_level: Mutex<Cell<Hectopascals>>,
}

impl<P: Transducer<Value = Hectopascals>> Barometer<P> {
    pub const fn new(pressure: P) -> Self {
        Self::with_sea_level_pressure(pressure, STANDARD_SEA_LEVEL_PRESSURE)
    }

    pub const fn with_sea_level_pressure(pressure: P, sea_level: Hectopascals) -> Self {
        Barometer {
            pressure,
            sea_level: Mutex::new(Cell::new(sea_level)),
        }
    }

    /// Replaces the sea level pressure reference. Only readings taken after
    /// this call are affected.
    pub fn set_sea_level_pressure(&self, sea_level: Hectopascals) {
        critical_section::with(|cs| self.sea_level.borrow(cs).set(sea_level));
        tracing::debug!(hpa = sea_level.as_f32(), "sea level pressure set");
    }

    pub fn sea_level_pressure(&self) -> Hectopascals {
        critical_section::with(|cs| self.sea_level.borrow(cs).get())
    }

    #[inline]
    pub fn pressure_transducer(&self) -> &P {
        &self.pressure
    }
}

impl<P: Transducer<Value = Hectopascals> + fmt::Debug> fmt::Debug for Barometer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Barometer")
            .field("pressure", &self.pressure)
            .field("sea_level", &self.sea_level_pressure())
            .finish()
    }
}

impl<P: Transducer<Value = Hectopascals>> Transducer for Barometer<P> {
    type Value = BarometricSample;

    fn read(&self) -> Sample<BarometricSample> {
        let Sample::Valid(pressure) = self.pressure.read() else {
            return Sample::Invalid;
        };
        let altitude = altitude(pressure, self.sea_level_pressure());
        if !altitude.as_f32().is_finite() {
            tracing::debug!(hpa = pressure.as_f32(), "altitude not computable");
            return Sample::Invalid;
        }
        Sample::Valid(BarometricSample { pressure, altitude })
    }
}

impl<P: Transducer<Value = Hectopascals>, const N: usize> SyncSensor<Barometer<P>, N> {
    /// Takes one reading; on success writes the pressure to `out` (if provided).
    /// Callbacks receive the full pressure/altitude sample either way.
    pub fn read_pressure(&self, out: Option<&mut Hectopascals>) -> bool {
        self.sample_projected(out, |s| s.pressure)
    }

    /// Takes one reading; on success writes the SLP-corrected altitude to `out`
    /// (if provided). Callbacks receive the full pressure/altitude sample.
    pub fn read_altitude(&self, out: Option<&mut Meters>) -> bool {
        self.sample_projected(out, |s| s.altitude)
    }

    pub fn set_sea_level_pressure(&self, sea_level: Hectopascals) {
        self.transducer().set_sea_level_pressure(sea_level);
    }

    pub fn sea_level_pressure(&self) -> Hectopascals {
        self.transducer().sea_level_pressure()
    }
}
