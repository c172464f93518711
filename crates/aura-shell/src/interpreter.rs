//! Command interpreter.
//!
//! `Shell` holds the immutable collaborators (filesystem, clock); all
//! per-terminal state lives in the [`ShellSession`] passed to `execute`.
//! Every handler is total: failures become printed lines and the session
//! keeps going.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use tracing::debug;

use aura_core::apps;
use aura_core::clock::{Clock, SystemClock};
use aura_core::vfs::Vfs;
use aura_types::FsNode;

use crate::builtins;
use crate::command::{Command, CommandOutcome, Effect};
use crate::session::ShellSession;

/// The command interpreter for one desktop.
///
/// Cheap to share across terminal windows; sessions carry the state.
pub struct Shell {
    vfs: &'static Vfs,
    clock: Box<dyn Clock>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// A shell over the seeded filesystem and the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// A shell with an injected clock, for deterministic time-dependent
    /// output.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            vfs: Vfs::shared(),
            clock,
        }
    }

    /// Executes one input line against the session.
    ///
    /// The echo line and all output are appended to the session transcript
    /// before returning; the returned outcome carries the same lines plus
    /// any effect the desktop layer must perform.
    pub fn execute(&self, session: &mut ShellSession, raw: &str) -> CommandOutcome {
        session.push_history(raw);
        session.push_line(format!("{}{}", session.prompt(), raw));

        let trimmed = raw.trim();
        let mut parts = trimmed.split_whitespace();
        let Some(verb) = parts.next() else {
            return CommandOutcome::silent();
        };
        let args: Vec<&str> = parts.collect();

        let outcome = match Command::from_str(verb) {
            Ok(command) => {
                debug!(%command, ?args, "executing");
                self.dispatch(session, command, &args)
            }
            Err(_) => CommandOutcome::lines(vec![format!(
                "bash: {}: command not found",
                verb.to_lowercase()
            )]),
        };

        if outcome.effect == Effect::ClearScreen {
            session.clear_transcript();
        } else {
            for line in &outcome.lines {
                session.push_line(line.clone());
            }
        }
        outcome
    }

    fn dispatch(
        &self,
        session: &mut ShellSession,
        command: Command,
        args: &[&str],
    ) -> CommandOutcome {
        match command {
            Command::Help => CommandOutcome::lines(to_lines(builtins::HELP)),
            Command::Clear => CommandOutcome::with_effect(Vec::new(), Effect::ClearScreen),
            Command::Pwd => {
                CommandOutcome::lines(vec![format!("/{}", session.current_path.join("/"))])
            }
            Command::Hostname => CommandOutcome::lines(vec![session.host().to_string()]),
            Command::Uname => self.uname(args),
            Command::Uptime => CommandOutcome::lines(vec![format!(
                " {} up 4:12, 1 user, load average: 1.24, 0.98, 0.76",
                self.clock.now().format("%H:%M:%S")
            )]),
            Command::Free => CommandOutcome::lines(to_lines(builtins::FREE)),
            Command::Df => CommandOutcome::lines(to_lines(builtins::DF)),
            Command::Lscpu => CommandOutcome::lines(to_lines(builtins::LSCPU)),
            Command::Top => self.top(),
            Command::Neofetch => self.neofetch(),
            Command::Tree => self.tree(session),
            Command::Ls => self.ls(session, args),
            Command::Cd => self.cd(session, args),
            Command::Cat => self.cat(session, args),
            Command::Touch => usage_or_silent(args, "Usage: touch <filename>"),
            Command::Mkdir => usage_or_silent(args, "Usage: mkdir <dirname>"),
            Command::Rm => self.rm(args),
            Command::Cp => {
                if args.len() < 2 {
                    CommandOutcome::lines(vec!["Usage: cp <source> <dest>".to_string()])
                } else {
                    CommandOutcome::silent()
                }
            }
            Command::Echo => {
                CommandOutcome::lines(vec![args.join(" ").replace(['\'', '"'], "")])
            }
            Command::Grep => self.grep(session, args),
            Command::History => CommandOutcome::lines(
                session
                    .command_history()
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("  {}  {}", i + 1, c))
                    .collect(),
            ),
            Command::Alias => CommandOutcome::lines(to_lines(builtins::ALIASES)),
            Command::Man => self.man(args),
            Command::Whoami => CommandOutcome::lines(vec![session.user().to_string()]),
            Command::Id => CommandOutcome::lines(vec![builtins::ID_LINE.to_string()]),
            Command::Date => CommandOutcome::lines(vec![
                self.clock.now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
            ]),
            Command::Cal => self.cal(),
            Command::Sudo => self.sudo(args),
            Command::Apt => CommandOutcome::lines(vec![
                "E: Could not open lock file /var/lib/dpkg/lock - Permission denied".to_string(),
                "Try: sudo apt ...".to_string(),
            ]),
            Command::Pip => CommandOutcome::lines(vec![
                "This is a simulated terminal. pip is not available.".to_string(),
            ]),
            Command::Git => self.git(args),
            Command::Sl => CommandOutcome::lines(to_lines(builtins::SL_TRAIN)),
            Command::Cowsay => self.cowsay(args),
            Command::Fortune => {
                let pick = rand::thread_rng().gen_range(0..builtins::FORTUNES.len());
                CommandOutcome::lines(vec![builtins::FORTUNES[pick].to_string()])
            }
            Command::Cmatrix => self.cmatrix(),
            Command::Ping => self.ping(args),
            Command::Which => match args.first() {
                None => CommandOutcome::lines(vec!["Usage: which <command>".to_string()]),
                Some(cmd) => CommandOutcome::lines(vec![format!("/usr/bin/{cmd}")]),
            },
            Command::Env => CommandOutcome::lines(to_lines(builtins::ENV)),
            Command::Open => self.open(session, args),
            Command::Exit => CommandOutcome::with_effect(
                vec!["exit".to_string(), "logout".to_string()],
                Effect::Exit,
            ),
        }
    }

    fn uname(&self, args: &[&str]) -> CommandOutcome {
        let line = if args.contains(&"-a") || args.contains(&"--all") {
            builtins::UNAME_FULL
        } else if args.contains(&"-r") {
            builtins::UNAME_RELEASE
        } else {
            "Linux"
        };
        CommandOutcome::lines(vec![line.to_string()])
    }

    fn top(&self) -> CommandOutcome {
        let mut rows = vec![format!(
            "top - {} up 4:12,  1 user,  load average: 1.24, 0.98, 0.76",
            self.clock.now().format("%H:%M:%S")
        )];
        rows.extend(to_lines(builtins::TOP_BODY));
        CommandOutcome::lines(rows)
    }

    fn neofetch(&self) -> CommandOutcome {
        let rows = builtins::NEOFETCH_ART
            .iter()
            .zip(builtins::NEOFETCH_INFO.iter().chain(std::iter::repeat(&"")))
            .map(|(art, info)| format!("{art}   {info}").trim_end().to_string())
            .chain(std::iter::once(String::new()))
            .collect();
        CommandOutcome::lines(rows)
    }

    fn tree(&self, session: &ShellSession) -> CommandOutcome {
        let Ok(dir) = self.vfs.resolve_dir(&session.current_path) else {
            return CommandOutcome::silent();
        };
        let mut rows = vec![".".to_string()];
        let count = dir.children.len();
        for (i, child) in dir.children.iter().enumerate() {
            let prefix = if i == count - 1 { "└── " } else { "├── " };
            let name = match child {
                FsNode::Directory(d) => format!("{}/", d.name),
                FsNode::File(f) => f.name.clone(),
            };
            rows.push(format!("{prefix}{name}"));
        }
        let dirs = dir.children.iter().filter(|c| c.is_directory()).count();
        rows.push(String::new());
        rows.push(format!("{} directories, {} files", dirs, count - dirs));
        CommandOutcome::lines(rows)
    }

    fn ls(&self, session: &ShellSession, args: &[&str]) -> CommandOutcome {
        let Ok(dir) = self.vfs.resolve_dir(&session.current_path) else {
            return CommandOutcome::lines(vec!["Error: Current path is invalid.".to_string()]);
        };
        let long = args
            .iter()
            .any(|a| matches!(*a, "-la" | "-l" | "-al"));
        if long {
            let mut rows = vec![format!("total {}", dir.children.len() * 4)];
            for child in &dir.children {
                let (perms, size) = match child {
                    FsNode::Directory(_) => ("drwxr-xr-x", 4096),
                    FsNode::File(f) => ("-rw-r--r--", f.content.len()),
                };
                rows.push(format!(
                    "{perms}  1 aman aman {size:>5} Feb 21 14:32 {}",
                    child.name()
                ));
            }
            CommandOutcome::lines(rows)
        } else {
            let names: Vec<&str> = dir.children.iter().map(FsNode::name).collect();
            CommandOutcome::lines(vec![names.join("  ")])
        }
    }

    fn cd(&self, session: &mut ShellSession, args: &[&str]) -> CommandOutcome {
        let target = match args.first() {
            None | Some(&"~") => {
                session.current_path = Vfs::home_path();
                return CommandOutcome::silent();
            }
            Some(&t) => t,
        };
        if target == ".." {
            session.current_path.pop();
            return CommandOutcome::silent();
        }
        let candidate: Vec<String> = if let Some(absolute) = target.strip_prefix('/') {
            absolute
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            let mut path = session.current_path.clone();
            path.push(target.to_string());
            path
        };
        match self.vfs.resolve_dir(&candidate) {
            Ok(_) => {
                session.current_path = candidate;
                CommandOutcome::silent()
            }
            Err(_) => CommandOutcome::lines(vec![format!(
                "bash: cd: {target}: No such file or directory"
            )]),
        }
    }

    fn cat(&self, session: &ShellSession, args: &[&str]) -> CommandOutcome {
        let Some(filename) = args.first() else {
            return CommandOutcome::lines(vec!["Usage: cat <filename>".to_string()]);
        };
        let mut path = session.current_path.clone();
        path.push(filename.to_string());
        match self.vfs.resolve_file(&path) {
            Ok(file) => {
                CommandOutcome::lines(file.content.split('\n').map(String::from).collect())
            }
            Err(_) => CommandOutcome::lines(vec![format!(
                "cat: {filename}: No such file or directory"
            )]),
        }
    }

    fn rm(&self, args: &[&str]) -> CommandOutcome {
        match args {
            [] => CommandOutcome::lines(vec!["Usage: rm <file>".to_string()]),
            ["-rf", "/", ..] => CommandOutcome::lines(vec![
                "Nice try! This is a simulated OS.".to_string(),
            ]),
            _ => CommandOutcome::silent(),
        }
    }

    fn grep(&self, session: &ShellSession, args: &[&str]) -> CommandOutcome {
        let [pattern, filename, ..] = args else {
            return CommandOutcome::lines(vec!["Usage: grep <pattern> <file>".to_string()]);
        };
        let mut path = session.current_path.clone();
        path.push(filename.to_string());
        match self.vfs.resolve_file(&path) {
            Ok(file) => {
                let needle = pattern.to_lowercase();
                let matches: Vec<String> = file
                    .content
                    .split('\n')
                    .filter(|line| line.to_lowercase().contains(&needle))
                    .map(String::from)
                    .collect();
                CommandOutcome::lines(matches)
            }
            Err(_) => CommandOutcome::lines(vec![format!(
                "grep: {filename}: No such file or directory"
            )]),
        }
    }

    fn man(&self, args: &[&str]) -> CommandOutcome {
        let Some(topic) = args.first() else {
            return CommandOutcome::lines(vec![
                "What manual page do you want?".to_string(),
                "For example, try 'man man'.".to_string(),
            ]);
        };
        let upper = topic.to_uppercase();
        CommandOutcome::lines(vec![
            format!("{upper}(1)              User Commands              {upper}(1)"),
            String::new(),
            "NAME".to_string(),
            format!("       {topic} - a simulated command in Linux Aura OS"),
            String::new(),
            "DESCRIPTION".to_string(),
            "       This is a portfolio simulating a Linux desktop environment.".to_string(),
            format!("       The '{topic}' command provides familiar Linux functionality."),
            String::new(),
            "AUTHOR".to_string(),
            "       Written by Aman Maurya.".to_string(),
            String::new(),
            "SEE ALSO".to_string(),
            "       help(1), open(1), neofetch(1)".to_string(),
            String::new(),
        ])
    }

    fn cal(&self) -> CommandOutcome {
        let now = self.clock.now();
        let (year, month) = (now.year(), now.month());
        let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
        let first_dow = first.weekday().num_days_from_sunday() as usize;
        let days_in_month = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
        }
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31);

        let mut rows = vec![
            format!("     {} {}", now.format("%B"), year),
            "Su Mo Tu We Th Fr Sa".to_string(),
        ];
        let mut line = "   ".repeat(first_dow);
        for day in 1..=days_in_month {
            line.push_str(&format!("{day:>2} "));
            if (first_dow + day as usize) % 7 == 0 {
                rows.push(line.trim_end().to_string());
                line.clear();
            }
        }
        if !line.trim().is_empty() {
            rows.push(line.trim_end().to_string());
        }
        CommandOutcome::lines(rows)
    }

    fn sudo(&self, args: &[&str]) -> CommandOutcome {
        if args.is_empty() {
            return CommandOutcome::lines(vec!["usage: sudo [-h] command".to_string()]);
        }
        if args.join(" ") == "rm -rf /" {
            return CommandOutcome::lines(vec![
                "Permission denied. Not today, hacker!".to_string(),
            ]);
        }
        match args[0] {
            "apt" | "apt-get" => CommandOutcome::lines(vec![
                "Reading package lists... Done".to_string(),
                "Building dependency tree... Done".to_string(),
                "Reading state information... Done".to_string(),
                "This is a simulated OS. Packages are imaginary!".to_string(),
            ]),
            "su" => CommandOutcome::lines(vec![
                "[sudo] password for aman: ".to_string(),
                "root@linux-aura:~# Just kidding!".to_string(),
            ]),
            _ => CommandOutcome::lines(vec![
                format!("[sudo] Running '{}' as root...", args.join(" ")),
                "Done.".to_string(),
            ]),
        }
    }

    fn git(&self, args: &[&str]) -> CommandOutcome {
        match args.first() {
            Some(&"status") => CommandOutcome::lines(vec![
                "On branch main".to_string(),
                "Your branch is up to date with 'origin/main'.".to_string(),
                String::new(),
                "nothing to commit, working tree clean".to_string(),
            ]),
            Some(&"log") => CommandOutcome::lines(vec![
                "commit 4a2b3c1d5e6f7890abcdef0123456789abcdef01".to_string(),
                "Author: Aman Maurya <amaurya.dev@gmail.com>".to_string(),
                "Date:   Fri Feb 21 2026 14:30:00 +0530".to_string(),
                String::new(),
                "    feat: Add Linux portfolio with system monitor".to_string(),
                String::new(),
                "commit 1234567890abcdef0123456789abcdef01234567".to_string(),
                "Author: Aman Maurya <amaurya.dev@gmail.com>".to_string(),
                "Date:   Thu Feb 20 2026 10:15:00 +0530".to_string(),
                String::new(),
                "    initial commit: Linux Aura Portfolio".to_string(),
            ]),
            other => CommandOutcome::lines(vec![format!(
                "git: '{}' is not a git command.",
                other.unwrap_or(&"")
            )]),
        }
    }

    fn cowsay(&self, args: &[&str]) -> CommandOutcome {
        let msg = if args.is_empty() {
            "Moo! Visit my portfolio!".to_string()
        } else {
            args.join(" ")
        };
        let border = "-".repeat(msg.chars().count() + 2);
        let mut rows = vec![
            format!(" {border}"),
            format!("< {msg} >"),
            format!(" {border}"),
        ];
        rows.extend(to_lines(builtins::COW));
        CommandOutcome::lines(rows)
    }

    fn cmatrix(&self) -> CommandOutcome {
        let mut rng = rand::thread_rng();
        let mut rows: Vec<String> = (0..5)
            .map(|_| {
                (0..60)
                    .map(|_| {
                        char::from_u32(0x30A0 + rng.gen_range(0..96)).unwrap_or('*')
                    })
                    .collect()
            })
            .collect();
        rows.push(String::new());
        rows.push("Press any key to exit... (not really, this is simulated)".to_string());
        CommandOutcome::lines(rows)
    }

    fn ping(&self, args: &[&str]) -> CommandOutcome {
        let Some(host) = args.first() else {
            return CommandOutcome::lines(vec!["Usage: ping <hostname>".to_string()]);
        };
        CommandOutcome::lines(vec![
            format!("PING {host} (93.184.216.34) 56(84) bytes of data."),
            format!("64 bytes from {host}: icmp_seq=1 ttl=56 time=12.3 ms"),
            format!("64 bytes from {host}: icmp_seq=2 ttl=56 time=11.8 ms"),
            format!("64 bytes from {host}: icmp_seq=3 ttl=56 time=13.1 ms"),
            format!("--- {host} ping statistics ---"),
            "3 packets transmitted, 3 received, 0% packet loss, time 2004ms".to_string(),
            "rtt min/avg/max/mdev = 11.8/12.4/13.1/0.532 ms".to_string(),
        ])
    }

    fn open(&self, session: &ShellSession, args: &[&str]) -> CommandOutcome {
        let Some(target) = args.first() else {
            return CommandOutcome::lines(vec![
                "Usage: open <app_name> or <file>".to_string(),
            ]);
        };
        if let Ok(config) = apps::resolve(target) {
            return CommandOutcome::with_effect(
                vec![format!("Launching {target}...")],
                Effect::Launch(config),
            );
        }
        let mut path = session.current_path.clone();
        path.push(target.to_string());
        if let Ok(file) = self.vfs.resolve_file(&path) {
            if let Some(app) = file.opens_with {
                let config = apps::launch_config(app);
                return CommandOutcome::with_effect(
                    vec![format!("Launching {}...", file.name)],
                    Effect::Launch(config),
                );
            }
        }
        CommandOutcome::lines(vec![format!("Error: App or file not found: {target}")])
    }
}

fn usage_or_silent(args: &[&str], usage: &str) -> CommandOutcome {
    if args.is_empty() {
        CommandOutcome::lines(vec![usage.to_string()])
    } else {
        CommandOutcome::silent()
    }
}

fn to_lines(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::clock::FixedClock;
    use aura_types::AppId;

    fn shell() -> Shell {
        Shell::with_clock(Box::new(FixedClock::at(2026, 2, 21, 14, 32, 0)))
    }

    #[test]
    fn test_unknown_command_prints_single_error_line() {
        let shell = shell();
        let mut session = ShellSession::new();
        let before_path = session.current_path.clone();
        let outcome = shell.execute(&mut session, "foobar");
        assert_eq!(outcome.lines, vec!["bash: foobar: command not found"]);
        assert_eq!(outcome.effect, Effect::None);
        assert_eq!(session.current_path, before_path);
        assert!(!session.is_recalling());
    }

    #[test]
    fn test_pwd_reflects_current_path() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "pwd");
        assert_eq!(outcome.lines, vec!["/home/aman"]);
    }

    #[test]
    fn test_cd_dotdot_at_root_is_idempotent() {
        let shell = shell();
        let mut session = ShellSession::new();
        shell.execute(&mut session, "cd /");
        assert!(session.current_path.is_empty());
        shell.execute(&mut session, "cd ..");
        assert!(session.current_path.is_empty());
        assert_eq!(shell.execute(&mut session, "pwd").lines, vec!["/"]);
    }

    #[test]
    fn test_cd_failure_leaves_path_unchanged() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "cd attic");
        assert_eq!(
            outcome.lines,
            vec!["bash: cd: attic: No such file or directory"]
        );
        assert_eq!(session.current_path, vec!["home", "aman"]);
    }

    #[test]
    fn test_cd_into_file_fails() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "cd about.md");
        assert_eq!(
            outcome.lines,
            vec!["bash: cd: about.md: No such file or directory"]
        );
    }

    #[test]
    fn test_ls_lists_seeded_home_in_order() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "ls");
        assert_eq!(
            outcome.lines,
            vec!["about.md  experience.json  projects.json  skills.txt  contact.md"]
        );
    }

    #[test]
    fn test_ls_long_renders_synthetic_metadata() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "ls -la");
        assert_eq!(outcome.lines[0], "total 20");
        assert!(outcome.lines[1].starts_with("-rw-r--r--  1 aman aman"));
        assert!(outcome.lines[1].ends_with("about.md"));
    }

    #[test]
    fn test_cat_reproduces_file_content_exactly() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "cat about.md");
        let expected = Vfs::shared()
            .resolve_file(&["home", "aman", "about.md"])
            .unwrap()
            .content
            .clone();
        assert_eq!(outcome.lines.join("\n"), expected);
    }

    #[test]
    fn test_cat_on_directory_errors() {
        let shell = shell();
        let mut session = ShellSession::new();
        shell.execute(&mut session, "cd /home");
        let outcome = shell.execute(&mut session, "cat aman");
        assert_eq!(outcome.lines, vec!["cat: aman: No such file or directory"]);
    }

    #[test]
    fn test_clear_wipes_transcript_but_not_history() {
        let shell = shell();
        let mut session = ShellSession::new();
        shell.execute(&mut session, "pwd");
        shell.execute(&mut session, "clear");
        assert!(session.transcript().is_empty());
        assert_eq!(session.command_history(), ["pwd", "clear"]);
        assert_eq!(session.recall_prev(), Some("clear"));
    }

    #[test]
    fn test_open_terminal_launches_registry_config() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "open Terminal");
        assert_eq!(outcome.lines, vec!["Launching Terminal..."]);
        match outcome.effect {
            Effect::Launch(config) => {
                assert_eq!(config.app, AppId::Terminal);
                assert_eq!(config.title, "Terminal");
            }
            other => panic!("expected launch effect, got {other:?}"),
        }
    }

    #[test]
    fn test_open_file_falls_back_to_its_app_tag() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "open about.md");
        assert_eq!(outcome.lines, vec!["Launching about.md..."]);
        assert!(matches!(
            outcome.effect,
            Effect::Launch(config) if config.app == AppId::Profile
        ));
    }

    #[test]
    fn test_open_miss_prints_error() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "open nonsense");
        assert_eq!(
            outcome.lines,
            vec!["Error: App or file not found: nonsense"]
        );
        assert_eq!(outcome.effect, Effect::None);
    }

    #[test]
    fn test_mutation_commands_are_cosmetic() {
        let shell = shell();
        let mut session = ShellSession::new();
        assert!(shell.execute(&mut session, "touch new.txt").lines.is_empty());
        assert!(shell.execute(&mut session, "mkdir lab").lines.is_empty());
        assert!(shell.execute(&mut session, "rm about.md").lines.is_empty());
        // The tree is untouched: about.md still resolves, lab does not.
        let outcome = shell.execute(&mut session, "ls");
        assert_eq!(
            outcome.lines,
            vec!["about.md  experience.json  projects.json  skills.txt  contact.md"]
        );
    }

    #[test]
    fn test_rm_rf_root_easter_egg() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "rm -rf /");
        assert_eq!(outcome.lines, vec!["Nice try! This is a simulated OS."]);
    }

    #[test]
    fn test_echo_strips_quotes() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "echo \"hello 'world'\"");
        assert_eq!(outcome.lines, vec!["hello world"]);
    }

    #[test]
    fn test_grep_matches_case_insensitively() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "grep REACT skills.txt");
        assert_eq!(
            outcome.lines,
            vec!["Frontend: React, TypeScript, TailwindCSS"]
        );
    }

    #[test]
    fn test_history_numbers_entries() {
        let shell = shell();
        let mut session = ShellSession::new();
        shell.execute(&mut session, "pwd");
        let outcome = shell.execute(&mut session, "history");
        assert_eq!(outcome.lines, vec!["  1  pwd", "  2  history"]);
    }

    #[test]
    fn test_whoami_is_fixed() {
        let shell = shell();
        let mut session = ShellSession::new();
        assert_eq!(shell.execute(&mut session, "whoami").lines, vec!["aman"]);
    }

    #[test]
    fn test_date_uses_injected_clock() {
        let shell = shell();
        let mut session = ShellSession::new();
        let line = &shell.execute(&mut session, "date").lines[0];
        assert!(line.starts_with("Sat Feb 21 2026 14:32:00"), "got {line}");
    }

    #[test]
    fn test_cal_renders_february_2026() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "cal");
        assert_eq!(outcome.lines[0], "     February 2026");
        assert_eq!(outcome.lines[1], "Su Mo Tu We Th Fr Sa");
        // February 2026 starts on a Sunday and has 28 days: 4 full weeks.
        assert_eq!(outcome.lines[2], " 1  2  3  4  5  6  7");
        assert_eq!(outcome.lines.last().unwrap(), "22 23 24 25 26 27 28");
    }

    #[test]
    fn test_exit_signals_the_desktop() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "exit");
        assert_eq!(outcome.lines, vec!["exit", "logout"]);
        assert_eq!(outcome.effect, Effect::Exit);
    }

    #[test]
    fn test_tree_summarizes_children() {
        let shell = shell();
        let mut session = ShellSession::new();
        shell.execute(&mut session, "cd /home");
        let outcome = shell.execute(&mut session, "tree");
        assert_eq!(
            outcome.lines,
            vec![".", "└── aman/", "", "1 directories, 0 files"]
        );
    }

    #[test]
    fn test_fortune_returns_a_known_quote() {
        let shell = shell();
        let mut session = ShellSession::new();
        let outcome = shell.execute(&mut session, "fortune");
        assert_eq!(outcome.lines.len(), 1);
        assert!(builtins::FORTUNES.contains(&outcome.lines[0].as_str()));
    }
}
