//! Per-terminal session state.

use aura_core::vfs::Vfs;

const WELCOME: [&str; 3] = [
    "Welcome to Linux Aura OS v2.0",
    "Type 'help' for available commands.",
    "",
];

/// State owned by one terminal window: the working directory, the visible
/// transcript, and the raw input history used for up/down recall.
#[derive(Debug, Clone)]
pub struct ShellSession {
    /// Directory names from the filesystem root; always resolves to an
    /// existing directory (validated before every update).
    pub current_path: Vec<String>,
    transcript: Vec<String>,
    command_history: Vec<String>,
    /// Index into `command_history` while the user browses with the arrow
    /// keys; `None` when not recalling.
    recall: Option<usize>,
    user: String,
    host: String,
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellSession {
    /// A fresh session, starting in the home directory with the welcome
    /// banner in the transcript.
    pub fn new() -> Self {
        Self::with_identity("aman", "linux-aura")
    }

    /// A session with a configured user and host name for the prompt.
    pub fn with_identity(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            current_path: Vfs::home_path(),
            transcript: WELCOME.iter().map(|s| s.to_string()).collect(),
            command_history: Vec::new(),
            recall: None,
            user: user.into(),
            host: host.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The input prompt, reflecting the current directory.
    pub fn prompt(&self) -> String {
        let path = if self.current_path.len() > 1 {
            self.current_path[1..].join("/")
        } else {
            String::new()
        };
        format!("{}@{}:~/{}$ ", self.user, self.host, path)
    }

    /// The visible scrollback, echoes and output interleaved.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.transcript.push(line.into());
    }

    /// Wipes the visible transcript. Input history is untouched, so recall
    /// still works afterwards.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Raw submitted lines, oldest first.
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Records one submitted line and resets the recall pointer.
    pub fn push_history(&mut self, raw: impl Into<String>) {
        self.command_history.push(raw.into());
        self.recall = None;
    }

    /// Steps backwards through history (up arrow). Stays on the oldest
    /// entry once reached.
    pub fn recall_prev(&mut self) -> Option<&str> {
        if self.command_history.is_empty() {
            return None;
        }
        let next = match self.recall {
            None => self.command_history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall = Some(next);
        self.command_history.get(next).map(String::as_str)
    }

    /// Steps forwards through history (down arrow). Moving past the most
    /// recent entry clears the recall pointer and returns `None`, meaning
    /// "show an empty input line".
    pub fn recall_next(&mut self) -> Option<&str> {
        let i = self.recall?;
        if i + 1 >= self.command_history.len() {
            self.recall = None;
            return None;
        }
        self.recall = Some(i + 1);
        self.command_history.get(i + 1).map(String::as_str)
    }

    /// Whether the user is currently browsing history.
    pub fn is_recalling(&self) -> bool {
        self.recall.is_some()
    }
}
