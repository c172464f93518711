//! User configuration file management.
//!
//! Reads `~/.config/aura/config.toml` if present. Every field has a
//! default, so a missing file (the common case) yields a fully working
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use aura_core::Result;

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    /// Login user; also the shell's `whoami`.
    pub user: String,
    /// Host name shown in the prompt.
    pub hostname: String,
    /// Play the boot message scroll on startup.
    pub boot_animation: bool,
    /// Wallpaper URL recorded in the desktop state.
    pub wallpaper: Option<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            user: "aman".to_string(),
            hostname: "linux-aura".to_string(),
            boot_animation: true,
            wallpaper: None,
        }
    }
}

/// Returns the default path of the configuration file:
/// `~/.config/aura/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("aura").join("config.toml"))
}

/// Loads the configuration from `explicit` if given, else from the default
/// location. A missing file yields the defaults; a present-but-broken file
/// is an error the caller reports.
pub fn load(explicit: Option<&Path>) -> Result<UserConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return Ok(UserConfig::default()),
        },
    };
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.user, "aman");
        assert!(config.boot_animation);
    }

    #[test]
    fn test_partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "user = \"guest\"\nboot_animation = false").unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.user, "guest");
        assert!(!config.boot_animation);
        assert_eq!(config.hostname, "linux-aura");
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "user = [not toml").unwrap();
        assert!(load(Some(&path)).is_err());
    }
}
