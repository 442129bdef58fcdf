// src/sensor/queue.rs

use crate::common::hal_traits::Acquisition;
use core::cell::RefCell;
use core::convert::Infallible;
use core::fmt;
use critical_section::Mutex;
use heapless::Deque;

/// An admitted, not yet completed sample request.
///
/// Requests are anonymous: nothing ties a completion back to the caller that
/// asked for it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PendingRequest {
    _anonymous: (),
}

/// Bounded queue of pending sample requests shared by an `AsyncSensor` (which
/// enqueues) and a producer (which takes requests and completes them).
///
/// Admission fails with `WouldBlock` once `D` requests are outstanding.
pub struct RequestQueue<const D: usize> {
    pending: Mutex<RefCell<Deque<PendingRequest, D>>>,
}

impl<const D: usize> RequestQueue<D> {
    pub const fn new() -> Self {
        RequestQueue {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer side: removes the oldest pending request, freeing its slot.
    pub fn take(&self) -> Option<PendingRequest> {
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).pop_front())
    }

    /// Number of requests admitted but not yet taken.
    pub fn pending(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow_ref(cs).len())
    }

    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow_ref(cs).is_full())
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        D
    }
}

impl<const D: usize> Default for RequestQueue<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> fmt::Debug for RequestQueue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestQueue")
            .field("pending", &self.pending())
            .field("depth", &D)
            .finish()
    }
}

impl<const D: usize> Acquisition for RequestQueue<D> {
    type Error = Infallible;

    fn request(&self) -> nb::Result<(), Infallible> {
        critical_section::with(|cs| {
            self.pending
                .borrow_ref_mut(cs)
                .push_back(PendingRequest { _anonymous: () })
                .map_err(|_| nb::Error::WouldBlock)
        })
    }
}

impl<A: Acquisition + ?Sized> Acquisition for &A {
    type Error = A::Error;

    fn request(&self) -> nb::Result<(), A::Error> {
        (**self).request()
    }
}
