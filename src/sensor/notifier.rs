// src/sensor/notifier.rs

use crate::callback::{CallbackRegistry, ErrorCb, NewSampleCb};
use crate::common::{config::OverflowPolicy, error::SensorError, types::Sample};

/// The New Sample and Error callback lists of one device, plus the dispatch
/// step shared by the synchronous and asynchronous facades.
#[derive(Debug)]
pub struct Notifier<V, const N: usize> {
    new_sample: CallbackRegistry<NewSampleCb<V>, N>,
    error: CallbackRegistry<ErrorCb, N>,
}

impl<V: Copy, const N: usize> Notifier<V, N> {
    pub const fn new(policy: OverflowPolicy) -> Self {
        Notifier {
            new_sample: CallbackRegistry::new(policy),
            error: CallbackRegistry::new(policy),
        }
    }

    /// Routes one completed sample: valid samples go to every New Sample
    /// callback, invalid ones to every Error callback. Returns the validity.
    pub fn notify(&self, sample: Sample<V>) -> bool {
        match sample {
            Sample::Valid(value) => {
                let notified = self.new_sample.dispatch(value);
                tracing::debug!(notified, "new sample dispatched");
                true
            }
            Sample::Invalid => {
                let notified = self.error.dispatch(());
                tracing::debug!(notified, "sample error dispatched");
                false
            }
        }
    }

    pub fn register_new_sample(&self, callback: NewSampleCb<V>) -> Result<(), SensorError> {
        self.new_sample.register(callback)
    }

    pub fn unregister_new_sample(&self, callback: NewSampleCb<V>) -> bool {
        self.new_sample.unregister(callback)
    }

    pub fn register_error(&self, callback: ErrorCb) -> Result<(), SensorError> {
        self.error.register(callback)
    }

    pub fn unregister_error(&self, callback: ErrorCb) -> bool {
        self.error.unregister(callback)
    }

    #[inline]
    pub fn new_sample_callbacks(&self) -> &CallbackRegistry<NewSampleCb<V>, N> {
        &self.new_sample
    }

    #[inline]
    pub fn error_callbacks(&self) -> &CallbackRegistry<ErrorCb, N> {
        &self.error
    }
}

impl<V: Copy, const N: usize> Default for Notifier<V, N> {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}
