// src/callback/registry.rs

use super::{Callback, CallbackId};
use crate::common::{config::OverflowPolicy, error::SensorError};
use core::cell::RefCell;
use core::fmt;
use critical_section::Mutex;
use heapless::Vec;

/// Distinct set of subscribers for one event kind.
///
/// Holds at most `N` handles, no handle twice. Every method takes `&self`;
/// the list is guarded by a critical section so registrations may come from
/// any thread or interrupt.
///
/// Dispatch works on a snapshot: the list is copied inside the critical
/// section and the callbacks run outside of it. A callback added or removed
/// while a dispatch is in progress therefore takes effect on the next event.
pub struct CallbackRegistry<H, const N: usize> {
    callbacks: Mutex<RefCell<Vec<H, N>>>,
    policy: OverflowPolicy,
}

impl<H: CallbackId, const N: usize> CallbackRegistry<H, N> {
    /// Creates an empty registry.
    pub const fn new(policy: OverflowPolicy) -> Self {
        CallbackRegistry {
            callbacks: Mutex::new(RefCell::new(Vec::new())),
            policy,
        }
    }

    /// Adds `callback` to the set. Registering a callback twice is a no-op.
    ///
    /// # Panics
    ///
    /// Under [`OverflowPolicy::Abort`], panics if the set already holds `N`
    /// other callbacks. Under [`OverflowPolicy::Reject`] that case returns
    /// [`SensorError::RegistryFull`] instead.
    pub fn register(&self, callback: H) -> Result<(), SensorError> {
        let id = callback.id();
        let outcome = critical_section::with(|cs| {
            let mut callbacks = self.callbacks.borrow_ref_mut(cs);
            if callbacks.iter().any(|c| c.id() == id) {
                return Ok(false);
            }
            callbacks
                .push(callback)
                .map(|()| true)
                .map_err(|_| SensorError::RegistryFull { capacity: N })
        });

        match outcome {
            Ok(true) => {
                tracing::trace!(id, "callback registered");
                Ok(())
            }
            Ok(false) => {
                tracing::trace!(id, "callback already registered");
                Ok(())
            }
            Err(e) => match self.policy {
                OverflowPolicy::Abort => {
                    tracing::error!(capacity = N, "callback registry exhausted");
                    panic!("callback registry exhausted (capacity {})", N);
                }
                OverflowPolicy::Reject => {
                    tracing::warn!(id, capacity = N, "callback registration refused");
                    Err(e)
                }
            },
        }
    }

    /// Removes `callback` from the set. Returns whether it was present.
    pub fn unregister(&self, callback: H) -> bool {
        let id = callback.id();
        let removed = critical_section::with(|cs| {
            let mut callbacks = self.callbacks.borrow_ref_mut(cs);
            match callbacks.iter().position(|c| c.id() == id) {
                Some(index) => {
                    callbacks.remove(index);
                    true
                }
                None => false,
            }
        });
        tracing::trace!(id, removed, "callback unregistered");
        removed
    }

    /// Invokes every registered callback once with `payload`, on the calling
    /// context. Returns the number of callbacks invoked.
    pub fn dispatch<P: Copy>(&self, payload: P) -> usize
    where
        H: Callback<P>,
    {
        let snapshot = self.snapshot();
        for callback in snapshot.iter() {
            callback.invoke(payload);
        }
        snapshot.len()
    }

    /// Copy of the current members, in registration order.
    pub fn snapshot(&self) -> Vec<H, N> {
        critical_section::with(|cs| self.callbacks.borrow_ref(cs).clone())
    }

    pub fn contains(&self, callback: H) -> bool {
        let id = callback.id();
        critical_section::with(|cs| self.callbacks.borrow_ref(cs).iter().any(|c| c.id() == id))
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.callbacks.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        critical_section::with(|cs| self.callbacks.borrow_ref_mut(cs).clear());
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

impl<H: CallbackId, const N: usize> Default for CallbackRegistry<H, N> {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}

impl<H: CallbackId, const N: usize> fmt::Debug for CallbackRegistry<H, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("len", &self.len())
            .field("capacity", &N)
            .field("policy", &self.policy)
            .finish()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::{ErrorCb, NewSampleCb};
    use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

    // Each callback bumps its own counter so no two share an address.
    static HITS_A: AtomicUsize = AtomicUsize::new(0);
    static HITS_B: AtomicUsize = AtomicUsize::new(0);
    static HITS_C: AtomicUsize = AtomicUsize::new(0);

    fn cb_a(_: u32) {
        HITS_A.fetch_add(1, Ordering::SeqCst);
    }
    fn cb_b(_: u32) {
        HITS_B.fetch_add(2, Ordering::SeqCst);
    }
    fn cb_c(_: u32) {
        HITS_C.fetch_add(3, Ordering::SeqCst);
    }

    type U32Registry<const N: usize> = CallbackRegistry<NewSampleCb<u32>, N>;

    #[test]
    fn test_register_is_idempotent() {
        let registry: U32Registry<4> = CallbackRegistry::new(OverflowPolicy::Reject);
        assert!(registry.register(cb_a).is_ok());
        assert!(registry.register(cb_a).is_ok());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(cb_a));
        assert!(!registry.contains(cb_b));
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let registry: U32Registry<4> = CallbackRegistry::default();
        registry.register(cb_a).unwrap();
        assert!(!registry.unregister(cb_b));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(cb_a));

        assert!(registry.unregister(cb_a));
        assert!(registry.is_empty());
        assert!(!registry.unregister(cb_a));
    }

    #[test]
    fn test_membership_matches_set_model() {
        let registry: U32Registry<3> = CallbackRegistry::new(OverflowPolicy::Reject);
        let handles: [NewSampleCb<u32>; 3] = [cb_a, cb_b, cb_c];
        let mut model = [false; 3];

        // Deterministic pseudo-random op sequence (LCG).
        let mut seed: u32 = 0x1234_5678;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let which = ((seed >> 16) % 3) as usize;
            if (seed >> 8) & 1 == 0 {
                registry.register(handles[which]).unwrap();
                model[which] = true;
            } else {
                registry.unregister(handles[which]);
                model[which] = false;
            }

            for (i, handle) in handles.iter().enumerate() {
                assert_eq!(registry.contains(*handle), model[i]);
            }
            assert_eq!(registry.len(), model.iter().filter(|m| **m).count());
        }
    }

    #[test]
    fn test_dispatch_invokes_each_once() {
        static SEEN: AtomicU32 = AtomicU32::new(0);
        static COUNT_X: AtomicUsize = AtomicUsize::new(0);
        static COUNT_Y: AtomicUsize = AtomicUsize::new(0);
        fn x(v: u32) {
            SEEN.store(v, Ordering::SeqCst);
            COUNT_X.fetch_add(1, Ordering::SeqCst);
        }
        fn y(_: u32) {
            COUNT_Y.fetch_add(1, Ordering::SeqCst);
        }

        let registry: U32Registry<4> = CallbackRegistry::default();
        registry.register(y).unwrap();
        registry.register(x).unwrap();
        registry.register(y).unwrap();

        assert_eq!(registry.dispatch(77), 2);
        assert_eq!(COUNT_X.load(Ordering::SeqCst), 1);
        assert_eq!(COUNT_Y.load(Ordering::SeqCst), 1);
        assert_eq!(SEEN.load(Ordering::SeqCst), 77);

        registry.unregister(y);
        assert_eq!(registry.dispatch(78), 1);
        assert_eq!(COUNT_X.load(Ordering::SeqCst), 2);
        assert_eq!(COUNT_Y.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_error_callbacks() {
        static ERRORS: AtomicUsize = AtomicUsize::new(0);
        fn on_error() {
            ERRORS.fetch_add(1, Ordering::SeqCst);
        }

        let registry: CallbackRegistry<ErrorCb, 2> = CallbackRegistry::default();
        assert_eq!(registry.dispatch(()), 0);
        registry.register(on_error).unwrap();
        assert_eq!(registry.dispatch(()), 1);
        assert_eq!(ERRORS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reject_policy_reports_full() {
        let registry: U32Registry<2> = CallbackRegistry::new(OverflowPolicy::Reject);
        registry.register(cb_a).unwrap();
        registry.register(cb_b).unwrap();
        assert_eq!(
            registry.register(cb_c),
            Err(SensorError::RegistryFull { capacity: 2 })
        );
        // Re-registering a member of a full list is still a no-op.
        assert!(registry.register(cb_a).is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[should_panic(expected = "callback registry exhausted")]
    fn test_abort_policy_panics_when_full() {
        let registry: U32Registry<1> = CallbackRegistry::new(OverflowPolicy::Abort);
        registry.register(cb_a).unwrap();
        let _ = registry.register(cb_b);
    }

    #[test]
    fn test_mutation_during_dispatch_applies_next_event() {
        static LATE: AtomicUsize = AtomicUsize::new(0);
        static REGISTRY: CallbackRegistry<NewSampleCb<u32>, 4> =
            CallbackRegistry::new(OverflowPolicy::Reject);
        fn late(_: u32) {
            LATE.fetch_add(1, Ordering::SeqCst);
        }
        fn adds_late(_: u32) {
            REGISTRY.register(late).unwrap();
        }

        REGISTRY.register(adds_late).unwrap();
        assert_eq!(REGISTRY.dispatch(1), 1);
        assert_eq!(LATE.load(Ordering::SeqCst), 0);

        assert_eq!(REGISTRY.dispatch(2), 2);
        assert_eq!(LATE.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_snapshot_preserves_order_and_capacity() {
        let registry: U32Registry<3> = CallbackRegistry::default();
        registry.register(cb_c).unwrap();
        registry.register(cb_a).unwrap();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id(), (cb_c as NewSampleCb<u32>).id());
        assert_eq!(registry.capacity(), 3);
        registry.clear();
        assert!(registry.is_empty());
    }
}
