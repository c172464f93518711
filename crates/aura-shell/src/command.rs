//! The closed command verb set and execution outcome types.

use strum_macros::{Display, EnumIter, EnumString};

use aura_types::AppLaunchConfig;

/// Every verb the interpreter understands.
///
/// Parsing the first token into this enum replaces string dispatch: a new
/// command cannot be added without the compiler pointing at every match
/// that must handle it. Aliases (`cls`, `xdg-open`, `apt-get`, `pip3`)
/// parse to the same variant. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Help,
    #[strum(serialize = "clear", serialize = "cls")]
    Clear,
    Pwd,
    Hostname,
    Uname,
    Uptime,
    Free,
    Df,
    Lscpu,
    Top,
    Neofetch,
    Tree,
    Ls,
    Cd,
    Cat,
    Touch,
    Mkdir,
    Rm,
    Cp,
    Echo,
    Grep,
    History,
    Alias,
    Man,
    Whoami,
    Id,
    Date,
    Cal,
    Sudo,
    #[strum(serialize = "apt", serialize = "apt-get")]
    Apt,
    #[strum(serialize = "pip", serialize = "pip3")]
    Pip,
    Git,
    Sl,
    Cowsay,
    Fortune,
    Cmatrix,
    Ping,
    Which,
    Env,
    #[strum(serialize = "open", serialize = "xdg-open")]
    Open,
    Exit,
}

/// A side effect the command asks the desktop layer to perform.
///
/// The interpreter itself only touches session state; anything beyond that
/// (windows, screen, process lifetime) is relayed upward as data.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Wipe the visible terminal area.
    ClearScreen,
    /// Open a window through the window manager.
    Launch(AppLaunchConfig),
    /// Close this terminal.
    Exit,
}

/// What one executed line produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    /// Output lines, already appended to the session transcript.
    pub lines: Vec<String>,
    pub effect: Effect,
}

impl CommandOutcome {
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            effect: Effect::None,
        }
    }

    pub fn silent() -> Self {
        Self::lines(Vec::new())
    }

    pub fn with_effect(lines: Vec<String>, effect: Effect) -> Self {
        Self { lines, effect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_aliases_parse_to_the_same_variant() {
        assert_eq!(Command::from_str("cls").unwrap(), Command::Clear);
        assert_eq!(Command::from_str("clear").unwrap(), Command::Clear);
        assert_eq!(Command::from_str("xdg-open").unwrap(), Command::Open);
        assert_eq!(Command::from_str("apt-get").unwrap(), Command::Apt);
        assert_eq!(Command::from_str("pip3").unwrap(), Command::Pip);
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!(Command::from_str("LS").unwrap(), Command::Ls);
        assert_eq!(Command::from_str("NeoFetch").unwrap(), Command::Neofetch);
    }

    #[test]
    fn test_unknown_verbs_fail_to_parse() {
        assert!(Command::from_str("foobar").is_err());
    }
}
