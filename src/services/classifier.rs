use regex::Regex;
use std::sync::LazyLock;

// Coarse gate: does the text look like a repository command at all?
static COMMAND_GATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:github|git)|^create\s+(?:a\s+)?new\s+repo").expect("valid command gate")
});

// Precise extraction of the repository name.
static REPO_CREATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:create\s+(?:a\s+)?new\s+repo|create\s+repo)\s+(.+)$")
        .expect("valid repo-create pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Empty,
    RepoCreate { name: String },
    UnknownCommand,
    Chat { text: String },
}

impl Classification {
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Empty => "empty",
            Classification::RepoCreate { .. } => "repo_create",
            Classification::UnknownCommand => "unknown_command",
            Classification::Chat { .. } => "chat",
        }
    }
}

/// Decide what a piece of user text asks for. Pure; no I/O.
pub fn classify(raw: &str) -> Classification {
    let text = raw.trim();

    if text.is_empty() {
        return Classification::Empty;
    }

    if !COMMAND_GATE.is_match(text) {
        return Classification::Chat {
            text: text.to_string(),
        };
    }

    REPO_CREATE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(|name| Classification::RepoCreate {
            name: name.to_string(),
        })
        .unwrap_or(Classification::UnknownCommand)
}
