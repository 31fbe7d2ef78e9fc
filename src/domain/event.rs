use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    Push,
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "pull_request" => EventKind::PullRequest,
            "push" => EventKind::Push,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::PullRequest => "pull_request",
            EventKind::Push => "push",
            EventKind::Other(name) => name,
        }
    }
}

/// The triggering event: its name and the raw webhook payload.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub kind: EventKind,
    pub payload: Value,
}

impl EventContext {
    pub fn new(name: &str, payload: Value) -> Self {
        Self {
            kind: EventKind::from_name(name),
            payload,
        }
    }

    /// Reads the payload from `path`. A missing path gives an empty payload.
    pub fn load(name: &str, path: Option<&Path>) -> AppResult<Self> {
        let payload = match path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(path)?;
                serde_json::from_str::<Value>(&contents).map_err(|err| {
                    AppError::Event(format!(
                        "invalid event payload at {}: {err}",
                        path.display()
                    ))
                })?
            }
            Some(path) => {
                log::debug!("event payload {} does not exist", path.display());
                Value::Object(Map::new())
            }
            None => {
                log::debug!("no event payload path provided");
                Value::Object(Map::new())
            }
        };
        Ok(Self::new(name, payload))
    }

    pub fn payload_keys(&self) -> Vec<&str> {
        self.payload
            .as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Base and head commit ids for supported events, `None` for any other event.
    pub fn commit_ids(&self) -> Option<(Option<String>, Option<String>)> {
        let (base, head) = match self.kind {
            EventKind::PullRequest => ("/pull_request/base/sha", "/pull_request/head/sha"),
            EventKind::Push => ("/before", "/after"),
            EventKind::Other(_) => return None,
        };
        Some((self.string_at(base), self.string_at(head)))
    }

    fn string_at(&self, pointer: &str) -> Option<String> {
        self.payload
            .pointer(pointer)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub base: String,
    pub head: String,
}

impl CommitRange {
    /// The `base...head` expression the compare endpoint expects.
    pub fn basehead(&self) -> String {
        format!("{}...{}", self.base, self.head)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn reads_pull_request_shas() {
        let event = EventContext::new(
            "pull_request",
            json!({"pull_request": {"base": {"sha": "b1"}, "head": {"sha": "h1"}}}),
        );
        assert_eq!(
            event.commit_ids(),
            Some((Some("b1".to_string()), Some("h1".to_string())))
        );
    }

    #[test]
    fn reads_push_before_and_after() {
        let event = EventContext::new("push", json!({"before": "abc", "after": "def"}));
        assert_eq!(
            event.commit_ids(),
            Some((Some("abc".to_string()), Some("def".to_string())))
        );
    }

    #[test]
    fn tolerates_unexpected_payload_shape() {
        let event = EventContext::new("pull_request", json!({"pull_request": "oops"}));
        assert_eq!(event.commit_ids(), Some((None, None)));

        let event = EventContext::new("push", json!({"before": "", "after": 7}));
        assert_eq!(event.commit_ids(), Some((None, None)));
    }

    #[test]
    fn other_events_have_no_commits() {
        let event = EventContext::new("release", json!({}));
        assert_eq!(event.kind, EventKind::Other("release".to_string()));
        assert_eq!(event.commit_ids(), None);
    }

    #[test]
    fn loads_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"before": "abc", "after": "def", "ref": "refs/heads/main"}}"#).unwrap();

        let event = EventContext::load("push", Some(file.path())).unwrap();
        let mut keys = event.payload_keys();
        keys.sort();
        assert_eq!(keys, vec!["after", "before", "ref"]);
    }

    #[test]
    fn missing_payload_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let event = EventContext::load("push", Some(&dir.path().join("event.json"))).unwrap();
        assert!(event.payload_keys().is_empty());
        assert_eq!(event.commit_ids(), Some((None, None)));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            EventContext::load("push", Some(file.path())),
            Err(AppError::Event(_))
        ));
    }

    #[test]
    fn builds_basehead() {
        let range = CommitRange {
            base: "abc".to_string(),
            head: "def".to_string(),
        };
        assert_eq!(range.basehead(), "abc...def");
    }
}
