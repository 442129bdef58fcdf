// src/callback/mod.rs

//! Callback handles and the fixed-capacity lists that hold them.
//!
//! Callbacks are plain function pointers. A registry never takes ownership of
//! anything behind a callback, and two registrations are "the same" exactly when
//! they point at the same function.

pub mod registry;

pub use registry::CallbackRegistry;

/// Invoked with every new, valid sample.
///
/// Not guaranteed to run on its own thread of control: it runs on whichever
/// context produced the sample (the caller of `sample`, or the producer that
/// completed an asynchronous request). Keep it short and hand heavy work off,
/// e.g. by pushing the value onto a queue.
pub type NewSampleCb<V> = fn(V);

/// Invoked when the device fails to produce a valid sample.
///
/// The device has no recovery logic of its own. Use this in tightly-coupled
/// system code to restart the device, stop polling it, and so on. Same
/// execution-context caveats as [`NewSampleCb`].
pub type ErrorCb = fn();

/// Identity of a stored callback handle.
pub trait CallbackId: Copy {
    /// Address of the target function; equal handles have equal ids.
    fn id(&self) -> usize;
}

/// A callback handle that can be run with a payload of type `P`.
pub trait Callback<P>: CallbackId {
    fn invoke(&self, payload: P);
}

impl<P> CallbackId for fn(P) {
    #[inline]
    fn id(&self) -> usize {
        *self as usize
    }
}

impl<P> Callback<P> for fn(P) {
    #[inline]
    fn invoke(&self, payload: P) {
        self(payload)
    }
}

impl CallbackId for fn() {
    #[inline]
    fn id(&self) -> usize {
        *self as usize
    }
}

impl Callback<()> for fn() {
    #[inline]
    fn invoke(&self, _payload: ()) {
        self()
    }
}
