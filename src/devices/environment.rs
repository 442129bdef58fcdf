// src/devices/environment.rs

//! Temperature and relative humidity sensors.
//!
//! Both are the generic facades with the unit fixed: temperature in degrees
//! Celsius, humidity in percent relative humidity.

use crate::common::{
    config::DEFAULT_CALLBACK_CAPACITY,
    hal_traits::Transducer,
    types::{Celsius, RelativeHumidity, Sample},
};
use crate::sensor::{AsyncSensor, SyncSensor};

pub type TemperatureSensor<T, const N: usize = DEFAULT_CALLBACK_CAPACITY> = SyncSensor<T, N>;
pub type AsyncTemperatureSensor<A, const N: usize = DEFAULT_CALLBACK_CAPACITY> =
    AsyncSensor<A, Celsius, N>;

pub type HumiditySensor<T, const N: usize = DEFAULT_CALLBACK_CAPACITY> = SyncSensor<T, N>;
pub type AsyncHumiditySensor<A, const N: usize = DEFAULT_CALLBACK_CAPACITY> =
    AsyncSensor<A, RelativeHumidity, N>;

/// Transducer adapter that reports readings outside `[min, max]` as invalid.
#[derive(Debug)]
pub struct RangeChecked<T: Transducer> {
    inner: T,
    min: T::Value,
    max: T::Value,
}

impl<T> RangeChecked<T>
where
    T: Transducer,
    T::Value: PartialOrd,
{
    pub const fn new(inner: T, min: T::Value, max: T::Value) -> Self {
        RangeChecked { inner, min, max }
    }

    #[inline]
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Transducer<Value = RelativeHumidity>> RangeChecked<T> {
    /// Accepts 0 %RH to 100 %RH.
    pub const fn humidity(inner: T) -> Self {
        RangeChecked {
            inner,
            min: RelativeHumidity::new(0.0),
            max: RelativeHumidity::new(100.0),
        }
    }
}

impl<T> Transducer for RangeChecked<T>
where
    T: Transducer,
    T::Value: PartialOrd,
{
    type Value = T::Value;

    fn read(&self) -> Sample<T::Value> {
        match self.inner.read() {
            Sample::Valid(v) if v >= self.min && v <= self.max => Sample::Valid(v),
            Sample::Valid(_) => {
                tracing::debug!("reading out of range");
                Sample::Invalid
            }
            Sample::Invalid => Sample::Invalid,
        }
    }
}
