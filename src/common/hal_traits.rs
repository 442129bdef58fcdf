// src/common/hal_traits.rs

use super::types::Sample;
use core::fmt::Debug;

/// Abstraction for the component that produces raw measurements.
///
/// `read` may block until a reading is available, or return the most recent
/// reading maintained by another thread of control (see `CachedReading`).
/// Either way it takes `&self`, so a facade can be shared between contexts.
pub trait Transducer {
    /// Measurement type handed to New Sample callbacks.
    type Value: Copy;

    /// Obtains one reading and its validity.
    fn read(&self) -> Sample<Self::Value>;
}

impl<T: Transducer + ?Sized> Transducer for &T {
    type Value = T::Value;

    fn read(&self) -> Sample<Self::Value> {
        (**self).read()
    }
}

/// Abstraction for a non-blocking acquisition subsystem used by asynchronous sensors.
pub trait Acquisition {
    /// Associated error type for enqueue failures other than "queue full".
    type Error: Debug;

    /// Attempts to enqueue a request for a new sample.
    ///
    /// Returns `Ok(())` if the request was admitted, or `Err(nb::Error::WouldBlock)`
    /// if the queue cannot take it right now. Other failures are returned as
    /// `Err(nb::Error::Other(Self::Error))`. Must never wait for the reading itself.
    fn request(&self) -> nb::Result<(), Self::Error>;
}
