//! Playable-media handles.
//!
//! The player drives a `MediaHandle`; `RodioMedia` is the real backend and
//! tests use an in-memory fake.

mod clock;
mod handle;
mod listeners;
mod rodio_backend;
mod sink;
mod types;

#[cfg(test)]
pub mod fake;

pub use handle::MediaHandle;
pub use rodio_backend::RodioMedia;
pub use types::*;

#[cfg(test)]
mod tests;
