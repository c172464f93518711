//! End-to-end scenarios: a shell session driving the window manager the
//! way the desktop does.

use aura_core::apps;
use aura_core::clock::FixedClock;
use aura_core::desktop::DesktopState;
use aura_core::vfs::Vfs;
use aura_shell::{Effect, Shell, ShellSession};
use aura_types::AppId;

fn shell() -> Shell {
    Shell::with_clock(Box::new(FixedClock::at(2026, 2, 21, 14, 32, 0)))
}

/// Runs a line and forwards any launch effect to the desktop, as the REPL
/// front-end does.
fn run(shell: &Shell, session: &mut ShellSession, desktop: &mut DesktopState, line: &str) {
    let outcome = shell.execute(session, line);
    if let Effect::Launch(config) = outcome.effect {
        desktop.launch(config);
    }
}

#[test]
fn test_cd_then_ls_then_cat_scenario() {
    let shell = shell();
    let mut session = ShellSession::new();

    shell.execute(&mut session, "cd /");
    let outcome = shell.execute(&mut session, "cd /home/aman");
    assert!(outcome.lines.is_empty());

    let outcome = shell.execute(&mut session, "ls");
    assert_eq!(
        outcome.lines,
        vec!["about.md  experience.json  projects.json  skills.txt  contact.md"]
    );

    let outcome = shell.execute(&mut session, "cat about.md");
    let seeded = Vfs::shared()
        .resolve_file(&["home", "aman", "about.md"])
        .unwrap();
    assert_eq!(outcome.lines.join("\n"), seeded.content);
}

#[test]
fn test_open_terminal_creates_window_with_registry_title() {
    let shell = shell();
    let mut session = ShellSession::new();
    let mut desktop = DesktopState::new();
    desktop.login("aman");

    run(&shell, &mut session, &mut desktop, "open Terminal");

    assert_eq!(desktop.windows.len(), 1);
    let window = desktop.windows.active().unwrap();
    assert_eq!(window.app, AppId::Terminal);
    assert_eq!(window.title, "Terminal");
}

#[test]
fn test_launching_many_apps_keeps_z_order_strict() {
    let shell = shell();
    let mut session = ShellSession::new();
    let mut desktop = DesktopState::new();
    desktop.login("aman");

    for line in ["open Terminal", "open Browser", "open Settings", "open Calculator"] {
        run(&shell, &mut session, &mut desktop, line);
    }

    let ids: Vec<_> = desktop.windows.windows().iter().map(|w| w.id).collect();
    let zs: Vec<_> = desktop.windows.windows().iter().map(|w| w.z_index).collect();
    assert_eq!(ids.len(), 4);
    assert!(zs.windows(2).all(|p| p[0] < p[1]));

    // Focusing the first window makes it the unique maximum.
    desktop.windows.focus(ids[0]);
    let first_z = desktop.windows.get(ids[0]).unwrap().z_index;
    assert!(desktop
        .windows
        .windows()
        .iter()
        .all(|w| w.id == ids[0] || w.z_index < first_z));
}

#[test]
fn test_unknown_command_session_survives() {
    let shell = shell();
    let mut session = ShellSession::new();
    let transcript_before = session.transcript().len();

    let outcome = shell.execute(&mut session, "foobar");
    assert_eq!(outcome.lines, vec!["bash: foobar: command not found"]);
    // Echo plus one error line.
    assert_eq!(session.transcript().len(), transcript_before + 2);

    // The session still works afterwards.
    let outcome = shell.execute(&mut session, "pwd");
    assert_eq!(outcome.lines, vec!["/home/aman"]);
}

#[test]
fn test_clear_then_recall_still_works() {
    let shell = shell();
    let mut session = ShellSession::new();

    shell.execute(&mut session, "whoami");
    shell.execute(&mut session, "clear");
    assert!(session.transcript().is_empty());

    // commandHistory survives the clear, so recall walks back through it.
    assert_eq!(session.recall_prev(), Some("clear"));
    assert_eq!(session.recall_prev(), Some("whoami"));
}

#[test]
fn test_open_relay_uses_file_tag_through_registry() {
    let shell = shell();
    let mut session = ShellSession::new();
    let mut desktop = DesktopState::new();
    desktop.login("aman");

    run(&shell, &mut session, &mut desktop, "open experience.json");

    let window = desktop.windows.active().unwrap();
    assert_eq!(window.app, AppId::Experience);
    assert_eq!(window.title, apps::title(AppId::Experience));
}

#[test]
fn test_exit_effect_reaches_the_caller() {
    let shell = shell();
    let mut session = ShellSession::new();
    let outcome = shell.execute(&mut session, "exit");
    assert_eq!(outcome.effect, Effect::Exit);
}
