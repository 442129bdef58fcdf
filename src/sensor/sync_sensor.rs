// src/sensor/sync_sensor.rs

use super::notifier::Notifier;
use crate::callback::{ErrorCb, NewSampleCb};
use crate::common::{
    config::{OverflowPolicy, DEFAULT_CALLBACK_CAPACITY},
    error::SensorError,
    hal_traits::Transducer,
    types::Sample,
};

/// Virtual sensor with callback support, sampled synchronously.
///
/// `sample` can be used two ways:
/// - the caller receives the current sample, and registered callbacks fire too;
/// - the caller only triggers a reading (`None` destination) and registered
///   callbacks receive the data.
///
/// ## Undesired events
///
/// When the transducer reports an invalid reading, registered Error callbacks
/// fire. The caller's destination is left untouched.
#[derive(Debug)]
pub struct SyncSensor<T: Transducer, const N: usize = DEFAULT_CALLBACK_CAPACITY> {
    transducer: T,
    notifier: Notifier<T::Value, N>,
}

impl<T: Transducer, const N: usize> SyncSensor<T, N> {
    /// Creates a sensor whose callback lists abort on overflow.
    pub const fn new(transducer: T) -> Self {
        Self::with_policy(transducer, OverflowPolicy::Abort)
    }

    pub const fn with_policy(transducer: T, policy: OverflowPolicy) -> Self {
        SyncSensor {
            transducer,
            notifier: Notifier::new(policy),
        }
    }

    /// Takes one reading from the transducer.
    ///
    /// If the reading is valid, `out` (when provided) is updated, New Sample
    /// callbacks fire with the value and `true` is returned. If it is invalid,
    /// `out` is left unchanged, Error callbacks fire and `false` is returned.
    pub fn sample(&self, out: Option<&mut T::Value>) -> bool {
        self.sample_projected(out, |value| value)
    }

    /// Like [`Self::sample`], but writes only a projection of the value to `out`.
    /// Callbacks always receive the full value.
    pub(crate) fn sample_projected<U>(
        &self,
        out: Option<&mut U>,
        project: impl FnOnce(T::Value) -> U,
    ) -> bool {
        let sample = self.transducer.read();
        if let (Sample::Valid(value), Some(out)) = (sample, out) {
            *out = project(value);
        }
        self.notifier.notify(sample)
    }

    pub fn register_new_sample_cb(&self, callback: NewSampleCb<T::Value>) -> Result<(), SensorError> {
        self.notifier.register_new_sample(callback)
    }

    pub fn unregister_new_sample_cb(&self, callback: NewSampleCb<T::Value>) -> bool {
        self.notifier.unregister_new_sample(callback)
    }

    pub fn register_error_cb(&self, callback: ErrorCb) -> Result<(), SensorError> {
        self.notifier.register_error(callback)
    }

    pub fn unregister_error_cb(&self, callback: ErrorCb) -> bool {
        self.notifier.unregister_error(callback)
    }

    #[inline]
    pub fn transducer(&self) -> &T {
        &self.transducer
    }

    #[inline]
    pub fn notifier(&self) -> &Notifier<T::Value, N> {
        &self.notifier
    }
}
