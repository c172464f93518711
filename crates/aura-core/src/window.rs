//! Window manager.
//!
//! An ordered list of window records plus the active-window pointer. All
//! operations are simple list transformations; nothing here blocks, fails,
//! or persists.

use tracing::debug;

use aura_types::{AppLaunchConfig, Point, Size, WindowId, WindowRecord};

const DEFAULT_SIZE: Size = Size {
    width: 900,
    height: 600,
};

const LAUNCH_ORIGIN: Point = Point { x: 200, y: 50 };
const LAUNCH_STAGGER: i32 = 40;

/// Session-level window state.
///
/// Stacking order is tracked with a monotonically increasing counter:
/// launch and focus both take a fresh value, so the focused window is
/// always the strict z-maximum and indices are never reused after a close.
#[derive(Debug, Default)]
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    active: Option<WindowId>,
    next_z: u32,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new window for `config` and makes it active.
    ///
    /// The initial position is staggered by the number of windows already
    /// open so freshly launched windows do not stack exactly.
    pub fn launch(&mut self, config: AppLaunchConfig) -> WindowId {
        let n = self.windows.len() as i32;
        self.next_z += 1;
        let record = WindowRecord {
            id: WindowId::new(),
            title: config.title,
            app: config.app,
            props: config.props,
            minimized: false,
            maximized: false,
            position: Point {
                x: LAUNCH_ORIGIN.x + n * LAUNCH_STAGGER,
                y: LAUNCH_ORIGIN.y + n * LAUNCH_STAGGER,
            },
            size: DEFAULT_SIZE,
            z_index: self.next_z,
        };
        let id = record.id;
        debug!(app = %record.app, %id, z = record.z_index, "window launched");
        self.windows.push(record);
        self.active = Some(id);
        id
    }

    /// Removes a window. Returns false if the id is unknown.
    ///
    /// When the active window closes, the most recently added remaining
    /// window becomes active; closing the last window leaves no active
    /// window.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return false;
        }
        debug!(%id, "window closed");
        if self.active == Some(id) {
            self.active = self.windows.last().map(|w| w.id);
        }
        true
    }

    /// Removes every window and clears the active pointer (logout path).
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.active = None;
    }

    /// Toggles the minimized flag. A minimized window stays in the list so
    /// the taskbar can restore it.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(w) => {
                w.minimized = !w.minimized;
                true
            }
            None => false,
        }
    }

    /// Toggles the maximized flag. While maximized, position and size are
    /// ignored by the renderer in favor of the full viewport.
    pub fn maximize(&mut self, id: WindowId) -> bool {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(w) => {
                w.maximized = !w.maximized;
                true
            }
            None => false,
        }
    }

    /// Makes a window active and raises it above every other window.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let next_z = self.next_z + 1;
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(w) => {
                self.next_z = next_z;
                w.z_index = next_z;
                self.active = Some(id);
                true
            }
            None => false,
        }
    }

    /// Moves a window. Dragging is restricted to non-maximized windows and
    /// never changes z-order; only an explicit focus does.
    pub fn move_to(&mut self, id: WindowId, position: Point) -> bool {
        match self.windows.iter_mut().find(|w| w.id == id && !w.maximized) {
            Some(w) => {
                w.position = position;
                true
            }
            None => false,
        }
    }

    /// All windows, in launch order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active(&self) -> Option<&WindowRecord> {
        self.active.and_then(|id| self.get(id))
    }

    /// Windows in paint order, bottom to top.
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
