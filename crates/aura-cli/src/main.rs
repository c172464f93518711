use std::borrow::Cow::{self, Borrowed, Owned};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::thread;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;
use tracing::info;

use aura_core::apps;
use aura_core::boot::{BootPhase, BootSequence};
use aura_core::desktop::DesktopState;
use aura_core::vfs::Vfs;
use aura_shell::{complete, Completion, Effect, Shell, ShellSession};
use aura_types::AppId;

mod config;
mod render;

/// Taskbar operations, exposed as slash commands so they never collide
/// with the simulated shell's verb set.
const DESKTOP_COMMANDS: &[&str] = &[
    "/windows",
    "/focus",
    "/close",
    "/minimize",
    "/maximize",
    "/apps",
    "/logout",
];

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Aura - a simulated desktop operating system in the terminal", long_about = None)]
struct Cli {
    /// Path to the user configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the boot animation
    #[arg(long)]
    no_boot: bool,

    /// Log in as this user instead of the configured one
    #[arg(long)]
    user: Option<String>,

    /// Execute a single shell line and exit
    #[arg(long)]
    command: Option<String>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    session: Rc<RefCell<ShellSession>>,
}

impl CliHelper {
    fn new(session: Rc<RefCell<ShellSession>>) -> Self {
        Self {
            commands: DESKTOP_COMMANDS.iter().map(|c| c.to_string()).collect(),
            session,
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            return Ok((0, candidates));
        }

        let session = self.session.borrow();
        match complete(Vfs::shared(), &session, line) {
            Completion::Replaced(full) => Ok((
                0,
                vec![Pair {
                    display: full.clone(),
                    replacement: full,
                }],
            )),
            Completion::Candidates(names) => {
                let start = line
                    .rfind(char::is_whitespace)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let candidates = names
                    .into_iter()
                    .map(|name| Pair {
                        display: name.clone(),
                        replacement: name,
                    })
                    .collect();
                Ok((start, candidates))
            }
            Completion::NoMatch => Ok((0, vec![])),
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = config::load(cli.config.as_deref())?;
    let user = cli.user.clone().unwrap_or_else(|| config.user.clone());
    info!(user = %user, host = %config.hostname, "starting desktop session");

    let shell = Shell::new();
    let session = Rc::new(RefCell::new(ShellSession::with_identity(
        user.as_str(),
        config.hostname.as_str(),
    )));
    let mut desktop = DesktopState::new();
    if let Some(url) = &config.wallpaper {
        desktop.set_wallpaper(url.as_str());
    }

    // One-shot mode for scripting: no boot, no login prompt, no REPL.
    if let Some(line) = cli.command {
        desktop.set_boot_complete();
        desktop.login(&user);
        run_line(&shell, &session, &mut desktop, &line);
        return Ok(());
    }

    if config.boot_animation && !cli.no_boot {
        play_boot();
    }
    desktop.set_boot_complete();

    // ===== Login =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(session.clone())));

    let typed = rl.readline(&format!("{} login: ", config.hostname))?;
    let user = match typed.trim() {
        "" => user,
        name => name.to_string(),
    };
    // Any password is accepted; the login screen is cosmetic.
    let _ = rl.readline("Password: ")?;
    *session.borrow_mut() = ShellSession::with_identity(user.as_str(), config.hostname.as_str());
    desktop.login(&user);

    println!();
    for line in session.borrow().transcript() {
        println!("{line}");
    }
    println!(
        "{}",
        "Slash commands drive the desktop: /windows /focus /close /minimize /maximize /apps /logout"
            .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let prompt = session.borrow().prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                if trimmed.starts_with('/') {
                    if !handle_desktop_command(trimmed, &mut desktop) {
                        break;
                    }
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if !run_line(&shell, &session, &mut desktop, &line) {
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'exit' to quit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    desktop.logout();
    println!("{}", "logout".bright_green());

    Ok(())
}

/// Executes one shell line and applies its effect. Returns false when the
/// effect asks to end the session.
fn run_line(
    shell: &Shell,
    session: &Rc<RefCell<ShellSession>>,
    desktop: &mut DesktopState,
    line: &str,
) -> bool {
    let outcome = shell.execute(&mut session.borrow_mut(), line);

    if outcome.effect == Effect::ClearScreen {
        print!("\x1b[2J\x1b[1;1H");
    }
    for line in &outcome.lines {
        println!("{line}");
    }

    match outcome.effect {
        Effect::Launch(config) => {
            let id = desktop.launch(config);
            if let Some(window) = desktop.windows.get(id) {
                for line in render::window_frame(window) {
                    println!("{line}");
                }
            }
            true
        }
        Effect::Exit => false,
        Effect::None | Effect::ClearScreen => true,
    }
}

/// Handles a `/`-prefixed desktop command. Returns false on logout.
fn handle_desktop_command(line: &str, desktop: &mut DesktopState) -> bool {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().unwrap_or("");

    match cmd {
        "/windows" => {
            if desktop.windows.is_empty() {
                println!("{}", "No open windows.".bright_black());
            }
            for (i, window) in desktop.windows.windows().iter().enumerate() {
                let marker = if Some(window.id) == desktop.windows.active_id() {
                    "*"
                } else {
                    " "
                };
                let state = if window.minimized {
                    " (minimized)"
                } else if window.maximized {
                    " (maximized)"
                } else {
                    ""
                };
                println!("{marker} {}  {}{state}", i + 1, window.title);
            }
        }
        "/focus" | "/close" | "/minimize" | "/maximize" => {
            let target = parts
                .next()
                .and_then(|arg| arg.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| desktop.windows.windows().get(i))
                .map(|w| w.id);
            match target {
                Some(id) => {
                    let applied = match cmd {
                        "/focus" => desktop.windows.focus(id),
                        "/close" => desktop.windows.close(id),
                        "/minimize" => desktop.windows.minimize(id),
                        _ => desktop.windows.maximize(id),
                    };
                    if !applied {
                        println!("{}", "No such window.".yellow());
                    }
                }
                None => println!("{}", format!("Usage: {cmd} <window number>").yellow()),
            }
        }
        "/apps" => {
            for app in AppId::iter() {
                println!(
                    "  {:<16} {}",
                    apps::label(app),
                    apps::category(app).as_str().bright_black()
                );
            }
        }
        "/logout" => {
            desktop.logout();
            return false;
        }
        _ => println!("{}", "Unknown command".bright_black()),
    }
    true
}

fn play_boot() {
    let mut sequence = BootSequence::new();
    while let Some(entry) = sequence.advance() {
        thread::sleep(entry.delay);
        match entry.phase {
            BootPhase::Grub => println!("{}", entry.message.bright_black()),
            BootPhase::Kernel => println!("{}", entry.message),
            BootPhase::Loading => println!("{}", entry.message.bright_green()),
            BootPhase::Complete => {}
        }
    }
    println!();
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("AURA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
