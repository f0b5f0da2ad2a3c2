//! AnkiConnect gateway.
//!
//! This is the only place that talks to Anki. Everything above it goes
//! through the [`AnkiBackend`] trait.

pub mod actions;
mod client;
mod error;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{API_VERSION, AnkiBackend, AnkiClient};
pub(crate) use client::decode;
pub use error::{BackendError, BackendResult};
