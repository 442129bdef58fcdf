// src/sensor/mod.rs

// Declare the modules within the sensor directory.

// Shared dispatch step (used by both sync and async facades)
pub mod notifier;

// Provided collaborators
pub mod cached; // Last-known-sample transducer, refreshed by another context
pub mod queue; // Bounded pending-request queue for async sensors

// Facades
pub mod async_sensor;
pub mod sync_sensor;

// --- Public Re-exports ---
pub use async_sensor::AsyncSensor;
pub use cached::CachedReading;
pub use notifier::Notifier;
pub use queue::{PendingRequest, RequestQueue};
pub use sync_sensor::SyncSensor;
