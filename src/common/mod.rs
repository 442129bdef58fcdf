// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From config.rs (constants - users can access via common::config::*)
pub use config::OverflowPolicy;

// From error.rs
pub use error::SensorError;

// From hal_traits.rs
pub use hal_traits::{Acquisition, Transducer};

// From types.rs
pub use types::{Celsius, Hectopascals, Meters, RelativeHumidity, Sample};
