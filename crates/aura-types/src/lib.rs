//! Shared data types for the Aura desktop simulation.
//!
//! These are the plain domain types that every layer (filesystem store,
//! shell interpreter, window manager, presentation) operates on. They carry
//! no behavior beyond simple accessors; the state machines that mutate them
//! live in `aura-core`.

pub mod app;
pub mod fs;
pub mod window;

pub use app::{AppId, AppLaunchConfig};
pub use fs::{DirectoryNode, FileNode, FsNode};
pub use window::{Point, Size, WindowId, WindowRecord};
