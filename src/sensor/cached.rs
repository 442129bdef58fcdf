// src/sensor/cached.rs

use crate::common::{hal_traits::Transducer, types::Sample};
use core::cell::Cell;
use core::fmt;
use critical_section::Mutex;

/// Transducer that returns the last sample published by another context.
///
/// A background thread, timer or interrupt calls [`CachedReading::update`]
/// whenever the hardware produces something; the facade's `sample` never
/// blocks on the hardware and always sees the most recent reading. Starts out
/// invalid until the first update.
pub struct CachedReading<V> {
    latest: Mutex<Cell<Sample<V>>>,
}

impl<V: Copy> CachedReading<V> {
    pub const fn new() -> Self {
        CachedReading {
            latest: Mutex::new(Cell::new(Sample::Invalid)),
        }
    }

    /// Publishes a new reading, replacing the previous one.
    pub fn update(&self, sample: Sample<V>) {
        critical_section::with(|cs| self.latest.borrow(cs).set(sample));
    }

    /// Publishes a valid reading.
    pub fn set(&self, value: V) {
        self.update(Sample::Valid(value));
    }

    /// Marks the cached reading as no longer trustworthy.
    pub fn invalidate(&self) {
        self.update(Sample::Invalid);
    }

    pub fn latest(&self) -> Sample<V> {
        critical_section::with(|cs| self.latest.borrow(cs).get())
    }
}

impl<V: Copy> Default for CachedReading<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy + fmt::Debug> fmt::Debug for CachedReading<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedReading").field("latest", &self.latest()).finish()
    }
}

impl<V: Copy> Transducer for CachedReading<V> {
    type Value = V;

    fn read(&self) -> Sample<V> {
        self.latest()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_invalid() {
        let cache: CachedReading<i32> = CachedReading::new();
        assert_eq!(cache.read(), Sample::Invalid);
    }

    #[test]
    fn test_latest_update_wins() {
        let cache = CachedReading::new();
        cache.set(10);
        cache.set(11);
        assert_eq!(cache.read(), Sample::Valid(11));
        cache.invalidate();
        assert_eq!(cache.read(), Sample::Invalid);
        cache.update(Sample::Valid(12));
        assert_eq!(cache.latest(), Sample::Valid(12));
    }

    #[test]
    fn test_updates_from_background_thread() {
        use std::sync::Arc;

        let cache = Arc::new(CachedReading::new());
        let writer = {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for v in 1..=100u32 {
                    cache.set(v);
                }
            })
        };
        writer.join().unwrap();
        assert_eq!(cache.read(), Sample::Valid(100));
    }
}
