//! Textual window rendering.
//!
//! A launched window is printed as a framed block: title bar plus the
//! app's body. The core never sees any of this; it hands over the window
//! record and the renderer reads props and, for the content apps, the
//! seeded files.

use serde::Deserialize;

use aura_core::vfs::Vfs;
use aura_types::{AppId, WindowRecord};

const INNER_WIDTH: usize = 56;

#[derive(Debug, Deserialize)]
struct ExperienceEntry {
    company: String,
    position: String,
    period: String,
    location: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    title: String,
    #[serde(default)]
    link: Option<String>,
    technologies: Vec<String>,
}

/// Renders one window as a framed text block.
pub fn window_frame(record: &WindowRecord) -> Vec<String> {
    let mut out = Vec::new();
    let title = format!("[ {} ]", record.title);
    let pad = INNER_WIDTH.saturating_sub(title.chars().count() + 1);
    out.push(format!("┌─{title}{}┐", "─".repeat(pad)));
    for line in body(record) {
        for chunk in wrap(&line, INNER_WIDTH - 2) {
            out.push(format!("│ {chunk:<width$} │", width = INNER_WIDTH - 2));
        }
    }
    out.push(format!("└{}┘", "─".repeat(INNER_WIDTH)));
    out
}

fn body(record: &WindowRecord) -> Vec<String> {
    match record.app {
        AppId::Profile => props_card(
            record,
            &[
                ("", "name"),
                ("", "title"),
                ("", "location"),
                ("Email:    ", "email"),
                ("GitHub:   ", "github"),
                ("LinkedIn: ", "linkedIn"),
                ("Resume:   ", "resume"),
            ],
        ),
        AppId::Contact => props_card(
            record,
            &[
                ("Email:    ", "email"),
                ("Location: ", "location"),
                ("GitHub:   ", "github"),
                ("LinkedIn: ", "linkedin"),
            ],
        ),
        AppId::Experience => experience_body(),
        AppId::Projects => projects_body(),
        AppId::Skills => file_body("skills.txt"),
        AppId::Education => vec![
            "B.E. in Information Technology".to_string(),
            "  University of Mumbai".to_string(),
            String::new(),
            "Diploma in Information Technology".to_string(),
            "  Thakur Polytechnic".to_string(),
            String::new(),
            "SSC".to_string(),
            "  The G.M.E.S High School".to_string(),
        ],
        AppId::Awards => vec![
            "6x Hackathons".to_string(),
            "Technical Head at TCET - Shastra GFG".to_string(),
            "Researcher at TCET - Shastra Coding Club".to_string(),
            "Technical Head at ISTE".to_string(),
            "Acknowledged as a Problem-Solver on Leetcode".to_string(),
            "5-star rating in Java Proficiency on Hackerrank".to_string(),
            "Speaker at Solana HackerHouse Mumbai 2023".to_string(),
            "Winner of Techno-Fest, Thakur Polytechnic".to_string(),
            "Best Student Award, IT Department".to_string(),
        ],
        AppId::Terminal => vec![
            "This terminal is the session you are typing in.".to_string(),
        ],
        AppId::FileManager => {
            let mut rows = vec!["/home/aman".to_string(), String::new()];
            rows.extend(file_listing());
            rows
        }
        AppId::SystemMonitor => vec![
            "CPU      23%   52 C".to_string(),
            "Memory   42%".to_string(),
            "Swap     12%".to_string(),
            String::new(),
            "  PID NAME         USER   %CPU  %MEM".to_string(),
            "  567 firefox      aman   12.3   8.7".to_string(),
            "  678 code         aman    8.1   6.3".to_string(),
            "  456 gnome-shell  aman    5.4   4.2".to_string(),
            "  789 node         aman    4.5   3.1".to_string(),
        ],
        AppId::TextEditor => vec!["Untitled".to_string(), String::new(), "(empty buffer)".to_string()],
        AppId::Browser => vec![
            "about:blank".to_string(),
            String::new(),
            "Sandboxed web view. External content is out of scope.".to_string(),
        ],
        AppId::Settings => vec![
            "Appearance".to_string(),
            "  Theme:     Adw-dark".to_string(),
            "  WM Theme:  Catppuccin-Mocha".to_string(),
            "  Icons:     Papirus-Dark".to_string(),
        ],
        AppId::Calculator => vec!["0".to_string()],
    }
}

/// Lines built from the window's props bag, in the given order. Missing
/// keys are skipped, so a window launched with empty props renders an
/// empty card instead of failing.
fn props_card(record: &WindowRecord, fields: &[(&str, &str)]) -> Vec<String> {
    fields
        .iter()
        .copied()
        .filter_map(|(label, key)| {
            record.props[key]
                .as_str()
                .map(|value| format!("{label}{value}"))
        })
        .collect()
}

fn experience_body() -> Vec<String> {
    let Some(entries) = read_json::<Vec<ExperienceEntry>>("experience.json") else {
        return file_body("experience.json");
    };
    let mut rows = Vec::new();
    for e in entries {
        rows.push(format!("{} at {}", e.position, e.company));
        rows.push(format!("  {} ({})", e.period, e.location));
        rows.push(format!("  {}", e.description));
        rows.push(String::new());
    }
    rows.pop();
    rows
}

fn projects_body() -> Vec<String> {
    let Some(entries) = read_json::<Vec<ProjectEntry>>("projects.json") else {
        return file_body("projects.json");
    };
    let mut rows = Vec::new();
    for p in entries {
        rows.push(p.title);
        if let Some(link) = p.link {
            rows.push(format!("  {link}"));
        }
        rows.push(format!("  [{}]", p.technologies.join(", ")));
        rows.push(String::new());
    }
    rows.pop();
    rows
}

fn read_json<T: serde::de::DeserializeOwned>(name: &str) -> Option<T> {
    let file = Vfs::shared()
        .resolve_file(&["home", "aman", name])
        .ok()?;
    serde_json::from_str(&file.content).ok()
}

fn file_body(name: &str) -> Vec<String> {
    match Vfs::shared().resolve_file(&["home", "aman", name]) {
        Ok(file) => file.content.split('\n').map(String::from).collect(),
        Err(_) => vec![format!("{name}: unavailable")],
    }
}

fn file_listing() -> Vec<String> {
    match Vfs::shared().resolve_dir(&["home", "aman"]) {
        Ok(dir) => dir
            .children
            .iter()
            .map(|c| format!("  {}", c.name()))
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }
    let mut chunks = Vec::new();
    let mut current = String::new();
    for word in line.split(' ') {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > width {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    // Hard-break anything still wider than the frame (long URLs).
    chunks
        .into_iter()
        .flat_map(|chunk| {
            let chars: Vec<char> = chunk.chars().collect();
            chars
                .chunks(width)
                .map(|c| c.iter().collect::<String>())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::apps;

    fn window(app: AppId) -> WindowRecord {
        let mut wm = aura_core::window::WindowManager::new();
        let id = wm.launch(apps::launch_config(app));
        wm.get(id).unwrap().clone()
    }

    #[test]
    fn test_frame_has_title_and_borders() {
        let lines = window_frame(&window(AppId::Calculator));
        assert!(lines[0].contains("[ Calculator ]"));
        assert!(lines[0].starts_with('┌'));
        assert!(lines.last().unwrap().starts_with('└'));
    }

    #[test]
    fn test_profile_card_renders_props() {
        let lines = window_frame(&window(AppId::Profile));
        let text = lines.join("\n");
        assert!(text.contains("Aman Maurya"));
        assert!(text.contains("amaurya.dev@gmail.com"));
    }

    #[test]
    fn test_experience_parses_seeded_json() {
        let lines = window_frame(&window(AppId::Experience));
        let text = lines.join("\n");
        assert!(text.contains("Frontend Developer Intern at WeSee"));
        assert!(text.contains("Tokyo, Japan (Remote)"));
    }

    #[test]
    fn test_projects_lists_technologies() {
        let lines = window_frame(&window(AppId::Projects));
        let text = lines.join("\n");
        assert!(text.contains("Placement Power Hub"));
        assert!(text.contains("Supabase"));
    }

    #[test]
    fn test_file_manager_lists_home() {
        let lines = window_frame(&window(AppId::FileManager));
        let text = lines.join("\n");
        assert!(text.contains("about.md"));
        assert!(text.contains("contact.md"));
    }

    #[test]
    fn test_long_lines_are_wrapped_inside_the_frame() {
        let lines = window_frame(&window(AppId::Profile));
        // Frame rows are uniform width even for long prop values.
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|p| p[0] == p[1]));
    }
}
