//! Core state machines for the Aura desktop simulation.
//!
//! Everything here is a synchronous, in-memory transformation: the virtual
//! filesystem store, the application registry, the window manager, the
//! desktop session state, and the boot sequence. No persistence, no I/O.
//! The interpreter in `aura-shell` and the REPL in `aura-cli` sit on top.

pub mod apps;
pub mod boot;
pub mod clock;
pub mod desktop;
pub mod error;
pub mod vfs;
pub mod window;

// Re-export common error type
pub use error::{AuraError, Result};
