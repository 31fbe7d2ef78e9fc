//! Stand-ins for the compare API and the runner's output channel.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::{AppConfig, RepoSlug};
use crate::context::AppContext;
use crate::domain::change::{CommitComparison, FileChangeRecord};
use crate::domain::event::EventContext;
use crate::error::AppResult;
use crate::services::{CommitComparisonService, StepOutputSink};

pub struct StaticComparison {
    response: CommitComparison,
    pub requests: Mutex<Vec<String>>,
}

impl StaticComparison {
    pub fn ahead(files: Vec<FileChangeRecord>) -> Self {
        Self::new(CommitComparison {
            http_status: 200,
            range_status: Some("ahead".to_string()),
            files: Some(files),
        })
    }

    pub fn new(response: CommitComparison) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommitComparisonService for StaticComparison {
    async fn compare(
        &self,
        owner: &str,
        repo: &str,
        basehead: &str,
    ) -> AppResult<CommitComparison> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{owner}/{repo}@{basehead}"));
        Ok(self.response.clone())
    }
}

#[derive(Default)]
pub struct MemoryOutputs(pub Vec<(String, String)>);

impl MemoryOutputs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl StepOutputSink for MemoryOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> AppResult<()> {
        self.0.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

pub fn context(
    format: &str,
    event_name: &str,
    payload: Value,
    service: Arc<StaticComparison>,
) -> AppContext {
    let config = AppConfig {
        token: "t0ken".to_string(),
        format: format.to_string(),
        repository: RepoSlug {
            owner: "octo".to_string(),
            repo: "hello".to_string(),
        },
        api_url: "https://api.github.com".to_string(),
        output_file: None,
    };
    AppContext::new(config, EventContext::new(event_name, payload), service)
}

pub fn push_payload() -> Value {
    json!({"before": "abc", "after": "def"})
}
