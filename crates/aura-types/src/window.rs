//! Window state types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique token identifying one open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(Uuid);

impl WindowId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Top-left corner of a window, in desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Window extents, in desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Everything the desktop knows about one open application window.
///
/// `z_index` defines paint and focus order: among non-minimized windows the
/// highest value is topmost and receives input. Values are never reused
/// within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub app: crate::AppId,
    pub props: serde_json::Value,
    pub minimized: bool,
    pub maximized: bool,
    pub position: Point,
    pub size: Size,
    pub z_index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ids_are_unique() {
        let a = WindowId::new();
        let b = WindowId::new();
        assert_ne!(a, b);
    }
}
