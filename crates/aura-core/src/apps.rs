//! Application registry.
//!
//! A static table mapping each [`AppId`] to its launch configuration and
//! launcher metadata. The set of apps is closed; there is no runtime
//! registration.

use std::str::FromStr;

use serde_json::json;

use aura_types::{AppId, AppLaunchConfig};

use crate::error::{AuraError, Result};

/// Launcher grouping, as shown by the application menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCategory {
    Portfolio,
    System,
    Utilities,
    Internet,
}

impl AppCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppCategory::Portfolio => "Portfolio",
            AppCategory::System => "System",
            AppCategory::Utilities => "Utilities",
            AppCategory::Internet => "Internet",
        }
    }
}

/// The default launch parameters for an app.
pub fn launch_config(app: AppId) -> AppLaunchConfig {
    let mut config = AppLaunchConfig::new(app, title(app));
    config.props = default_props(app);
    config
}

/// Resolves a user-supplied name against the registry.
///
/// Lookup is case-insensitive. A miss returns [`AuraError::UnknownApp`];
/// callers with a file fallback (the shell's `open`) try that next.
pub fn resolve(name: &str) -> Result<AppLaunchConfig> {
    AppId::from_str(name)
        .map(launch_config)
        .map_err(|_| AuraError::unknown_app(name))
}

/// The window title for an app.
pub fn title(app: AppId) -> &'static str {
    match app {
        AppId::Profile => "About Me",
        AppId::Experience => "Experience",
        AppId::Projects => "Projects",
        AppId::Skills => "Skills",
        AppId::Education => "Education",
        AppId::Awards => "Awards",
        AppId::Contact => "Contact",
        AppId::Terminal => "Terminal",
        AppId::FileManager => "Files",
        AppId::SystemMonitor => "System Monitor",
        AppId::TextEditor => "Text Editor",
        AppId::Browser => "Browser",
        AppId::Settings => "Settings",
        AppId::Calculator => "Calculator",
    }
}

/// The launcher label for an app. Matches the title except where the
/// launcher abbreviates.
pub fn label(app: AppId) -> &'static str {
    title(app)
}

/// The launcher category for an app.
pub fn category(app: AppId) -> AppCategory {
    match app {
        AppId::Profile
        | AppId::Experience
        | AppId::Projects
        | AppId::Skills
        | AppId::Education
        | AppId::Awards
        | AppId::Contact => AppCategory::Portfolio,
        AppId::Terminal | AppId::FileManager | AppId::SystemMonitor | AppId::Settings => {
            AppCategory::System
        }
        AppId::TextEditor | AppId::Calculator => AppCategory::Utilities,
        AppId::Browser => AppCategory::Internet,
    }
}

fn default_props(app: AppId) -> serde_json::Value {
    match app {
        AppId::Profile => json!({
            "name": "Aman Maurya",
            "title": "Software Developer",
            "location": "Mumbai, Maharashtra, India",
            "email": "amaurya.dev@gmail.com",
            "linkedIn": "https://www.linkedin.com/in/amanmaurya-me/",
            "github": "https://github.com/amanmaurya7",
            "resume": "https://drive.google.com/file/d/1IUvCaLDExGS29Dhd3i1AOXY_smeX5Uwn/view?usp=drive_link"
        }),
        AppId::Contact => json!({
            "email": "amaurya.dev@gmail.com",
            "location": "Mumbai, Maharashtra, India",
            "linkedin": "https://www.linkedin.com/in/amanmaurya-me/",
            "github": "https://github.com/amanmaurya7"
        }),
        _ => serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_app_has_a_title() {
        for app in AppId::iter() {
            assert!(!title(app).is_empty());
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let config = resolve("terminal").unwrap();
        assert_eq!(config.app, AppId::Terminal);
        assert_eq!(config.title, "Terminal");
    }

    #[test]
    fn test_resolve_miss_is_unknown_app() {
        let err = resolve("minesweeper").unwrap_err();
        assert!(matches!(err, AuraError::UnknownApp { .. }));
    }

    #[test]
    fn test_profile_props_carry_contact_details() {
        let config = launch_config(AppId::Profile);
        assert_eq!(config.props["email"], "amaurya.dev@gmail.com");
        assert_eq!(config.title, "About Me");
    }

    #[test]
    fn test_most_apps_have_empty_props() {
        assert!(launch_config(AppId::Terminal).props.is_null());
        assert!(launch_config(AppId::Calculator).props.is_null());
    }
}
