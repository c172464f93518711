//! Application identity and launch configuration.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Identifies an installable application.
///
/// This is a closed set: every launcher surface (taskbar, `open` command,
/// file `opens_with` tags) resolves to one of these variants, so a typo in
/// an app name is a parse failure at the edge rather than a silent
/// "not found" deep inside the window manager.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AppId {
    Profile,
    Experience,
    Projects,
    Skills,
    Education,
    Awards,
    Contact,
    Terminal,
    FileManager,
    SystemMonitor,
    TextEditor,
    Browser,
    Settings,
    Calculator,
}

/// Default launch parameters for one application.
///
/// Loaded once at startup from the static registry and handed to the window
/// manager verbatim. `props` is an opaque bag the core never inspects; only
/// the app's renderer reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppLaunchConfig {
    pub app: AppId,
    pub title: String,
    #[serde(default)]
    pub props: serde_json::Value,
}

impl AppLaunchConfig {
    /// A config with an empty props bag.
    pub fn new(app: AppId, title: impl Into<String>) -> Self {
        Self {
            app,
            title: title.into(),
            props: serde_json::Value::Null,
        }
    }
}
