// src/sensor/async_sensor.rs

use super::{notifier::Notifier, queue::RequestQueue};
use crate::callback::{ErrorCb, NewSampleCb};
use crate::common::{
    config::{OverflowPolicy, DEFAULT_CALLBACK_CAPACITY},
    error::SensorError,
    hal_traits::{Acquisition, Transducer},
    types::Sample,
};

/// Virtual sensor with callback support, for asynchronous systems.
///
/// [`AsyncSensor::request_sample`] never queries the transducer: it only asks
/// the acquisition subsystem to produce a sample and reports whether the
/// request was admitted. When a producer later finishes a request it calls
/// [`AsyncSensor::complete`], which delivers the sample to the registered
/// callbacks on the producer's context.
///
/// ## Undesired events
///
/// - Invalid completions fire the Error callbacks.
/// - A request that cannot be enqueued (e.g. queue full) is reported to the
///   caller only; no callback fires for it.
#[derive(Debug)]
pub struct AsyncSensor<A, V, const N: usize = DEFAULT_CALLBACK_CAPACITY> {
    acquisition: A,
    notifier: Notifier<V, N>,
}

impl<A: Acquisition, V: Copy, const N: usize> AsyncSensor<A, V, N> {
    /// Creates a sensor whose callback lists abort on overflow.
    pub const fn new(acquisition: A) -> Self {
        Self::with_policy(acquisition, OverflowPolicy::Abort)
    }

    pub const fn with_policy(acquisition: A, policy: OverflowPolicy) -> Self {
        AsyncSensor {
            acquisition,
            notifier: Notifier::new(policy),
        }
    }

    /// Requests a new sample. Returns `true` if the request was admitted,
    /// `false` if it could not be enqueued.
    ///
    /// The sample itself, once available, is only delivered to callbacks.
    pub fn request_sample(&self) -> bool {
        self.try_request_sample().is_ok()
    }

    /// Like [`Self::request_sample`], but reports why a request was rejected.
    pub fn try_request_sample(&self) -> Result<(), SensorError<A::Error>> {
        match self.acquisition.request() {
            Ok(()) => {
                tracing::trace!("sample request admitted");
                Ok(())
            }
            Err(nb::Error::WouldBlock) => {
                tracing::debug!("sample request rejected: queue full");
                Err(SensorError::QueueFull)
            }
            Err(nb::Error::Other(e)) => {
                tracing::warn!(error = ?e, "sample request rejected by acquisition");
                Err(SensorError::Acquisition(e))
            }
        }
    }

    /// Producer side: delivers the outcome of a previously admitted request.
    /// Returns the validity of the sample.
    pub fn complete(&self, sample: Sample<V>) -> bool {
        self.notifier.notify(sample)
    }

    pub fn register_new_sample_cb(&self, callback: NewSampleCb<V>) -> Result<(), SensorError> {
        self.notifier.register_new_sample(callback)
    }

    pub fn unregister_new_sample_cb(&self, callback: NewSampleCb<V>) -> bool {
        self.notifier.unregister_new_sample(callback)
    }

    pub fn register_error_cb(&self, callback: ErrorCb) -> Result<(), SensorError> {
        self.notifier.register_error(callback)
    }

    pub fn unregister_error_cb(&self, callback: ErrorCb) -> bool {
        self.notifier.unregister_error(callback)
    }

    #[inline]
    pub fn acquisition(&self) -> &A {
        &self.acquisition
    }

    #[inline]
    pub fn notifier(&self) -> &Notifier<V, N> {
        &self.notifier
    }
}

impl<V: Copy, const N: usize, const D: usize> AsyncSensor<RequestQueue<D>, V, N> {
    /// Producer step: takes the oldest pending request, reads `transducer` and
    /// completes the request with the reading.
    ///
    /// Returns `None` if no request was pending, otherwise the validity of the
    /// delivered sample.
    pub fn service<T>(&self, transducer: &T) -> Option<bool>
    where
        T: Transducer<Value = V> + ?Sized,
    {
        let _request = self.acquisition.take()?;
        Some(self.complete(transducer.read()))
    }
}
