//! Production implementations of the collaborator trait seams.
//!
//! This module provides the "real" implementations of the traits defined in
//! [`crate::transfer`] that talk to the Wormholescan attestation API and the
//! system clock.
//!
//! Users building applications will typically use these providers, while
//! test code will use the fakes in [`crate::testing`].

mod watcher;
mod wormholescan;

pub use watcher::{TokioClock, VaaWatcher};
pub use wormholescan::WormholescanClient;
