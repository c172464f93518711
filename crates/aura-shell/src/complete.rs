//! Prefix completion for the terminal input line.
//!
//! Completion is single-token: the final token of the input is matched
//! against the child names of the current directory. One hit rewrites the
//! token in place; several hits are listed for the user; none leaves the
//! input alone.

use aura_core::vfs::Vfs;

use crate::session::ShellSession;

/// Result of a completion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one match: the whole input line, rewritten.
    Replaced(String),
    /// Several matches to display; the input is unchanged.
    Candidates(Vec<String>),
    /// Nothing matched.
    NoMatch,
}

/// Completes the last token of `input` against the session's current
/// directory.
pub fn complete(vfs: &Vfs, session: &ShellSession, input: &str) -> Completion {
    let Ok(dir) = vfs.resolve_dir(&session.current_path) else {
        return Completion::NoMatch;
    };

    // A trailing space starts a fresh (empty) token, which matches every
    // child.
    let trailing = input.ends_with(char::is_whitespace);
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    let prefix = if trailing {
        ""
    } else {
        tokens.last().copied().unwrap_or("")
    };
    let prefix_lower = prefix.to_lowercase();

    let matches: Vec<String> = dir
        .children
        .iter()
        .map(|c| c.name().to_string())
        .filter(|name| name.to_lowercase().starts_with(&prefix_lower))
        .collect();

    match matches.as_slice() {
        [] => Completion::NoMatch,
        [only] => {
            if trailing {
                tokens.push(only.as_str());
            } else if let Some(last) = tokens.last_mut() {
                *last = only.as_str();
            } else {
                tokens.push(only.as_str());
            }
            Completion::Replaced(tokens.join(" "))
        }
        _ => Completion::Candidates(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_session() -> ShellSession {
        ShellSession::new()
    }

    #[test]
    fn test_single_match_replaces_last_token() {
        let session = home_session();
        let result = complete(Vfs::shared(), &session, "cat ab");
        assert_eq!(result, Completion::Replaced("cat about.md".to_string()));
    }

    #[test]
    fn test_multiple_matches_are_listed() {
        let session = home_session();
        // "p" only hits projects.json; "s" hits skills.txt; use the empty
        // token to collect everything.
        let result = complete(Vfs::shared(), &session, "cat ");
        match result {
            Completion::Candidates(names) => {
                assert_eq!(names.len(), 5);
                assert_eq!(names[0], "about.md");
            }
            other => panic!("expected candidates, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match_leaves_input_alone() {
        let session = home_session();
        assert_eq!(
            complete(Vfs::shared(), &session, "cat zz"),
            Completion::NoMatch
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let session = home_session();
        assert_eq!(
            complete(Vfs::shared(), &session, "cat ABOUT"),
            Completion::Replaced("cat about.md".to_string())
        );
    }

    #[test]
    fn test_bare_prefix_completes_first_token() {
        let session = home_session();
        assert_eq!(
            complete(Vfs::shared(), &session, "sk"),
            Completion::Replaced("skills.txt".to_string())
        );
    }
}
