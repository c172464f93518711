//! Desktop session state.
//!
//! The single store object the presentation layer holds: boot/login/lock
//! flags, the wallpaper, and the window manager. It is passed explicitly
//! to whatever renders the desktop; there is no ambient global state.

use tracing::info;

use aura_types::{AppLaunchConfig, WindowId};

use crate::window::WindowManager;

const DEFAULT_WALLPAPER: &str =
    "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?auto=format&fit=crop&q=80&w=1974";

/// Everything one desktop session owns. Rebuilt from scratch on every run;
/// nothing survives a restart.
#[derive(Debug)]
pub struct DesktopState {
    boot_complete: bool,
    logged_in: bool,
    locked: bool,
    wallpaper: String,
    pub windows: WindowManager,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopState {
    pub fn new() -> Self {
        Self {
            boot_complete: false,
            logged_in: false,
            locked: false,
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            windows: WindowManager::new(),
        }
    }

    pub fn set_boot_complete(&mut self) {
        self.boot_complete = true;
    }

    pub fn is_booting(&self) -> bool {
        !self.boot_complete
    }

    /// Logs the user in. Any password is accepted; the login screen is
    /// cosmetic.
    pub fn login(&mut self, user: &str) {
        info!(user, "login");
        self.logged_in = true;
        self.locked = false;
    }

    /// Logs out and closes every open window.
    pub fn logout(&mut self) {
        info!("logout");
        self.logged_in = false;
        self.windows.close_all();
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn wallpaper(&self) -> &str {
        &self.wallpaper
    }

    pub fn set_wallpaper(&mut self, url: impl Into<String>) {
        self.wallpaper = url.into();
    }

    /// Opens a window for the given launch config.
    pub fn launch(&mut self, config: AppLaunchConfig) -> WindowId {
        info!(app = %config.app, title = %config.title, "launching app");
        self.windows.launch(config)
    }
}
