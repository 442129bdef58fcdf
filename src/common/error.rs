// src/common/error.rs

/// Errors surfaced by the callback registries and the asynchronous admission path.
///
/// Invalid samples are not errors: they are reported through the boolean result of
/// a sampling call and the Error callback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SensorError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Failure reported by the acquisition subsystem while enqueueing a request.
    #[error("acquisition error: {0:?}")]
    Acquisition(E),

    /// The request queue did not admit the request.
    #[error("sample request queue is full")]
    QueueFull,

    /// A callback could not be added because the fixed-size list is full.
    #[error("callback registry full: capacity {capacity}")]
    RegistryFull { capacity: usize },
}

