// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod callback;
pub mod common;
pub mod devices;
pub mod sensor;

// Re-export key types for convenience
pub use callback::{CallbackRegistry, ErrorCb, NewSampleCb};
pub use common::{Acquisition, OverflowPolicy, Sample, SensorError, Transducer};
pub use sensor::{AsyncSensor, SyncSensor};
