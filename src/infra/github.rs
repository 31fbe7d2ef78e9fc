use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::Deserialize;

use crate::domain::change::{CommitComparison, FileChangeRecord, FileStatus};
use crate::error::{AppError, AppResult};
use crate::services::CommitComparisonService;

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const GITHUB_JSON: &str = "application/vnd.github+json";

pub struct GithubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    fn compare_endpoint(&self, owner: &str, repo: &str, basehead: &str) -> String {
        format!(
            "{}/repos/{owner}/{repo}/compare/{basehead}",
            self.api_url.trim_end_matches('/')
        )
    }

    fn user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl CommitComparisonService for GithubClient {
    async fn compare(
        &self,
        owner: &str,
        repo: &str,
        basehead: &str,
    ) -> AppResult<CommitComparison> {
        let response = self
            .http
            .get(self.compare_endpoint(owner, repo, basehead))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, Self::user_agent())
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await
            .map_err(|err| AppError::Comparison(format!("failed to call GitHub: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Comparison(format!("failed to read GitHub response: {err}")))?;

        let payload = if status == StatusCode::OK {
            serde_json::from_str::<CompareCommitsResponse>(&body).map_err(|err| {
                AppError::Comparison(format!("failed to parse GitHub response: {err}"))
            })?
        } else {
            log::debug!("GitHub responded with {status}: {body}");
            serde_json::from_str::<CompareCommitsResponse>(&body).unwrap_or_default()
        };

        Ok(payload.into_comparison(status.as_u16()))
    }
}

#[derive(Deserialize, Default)]
struct CompareCommitsResponse {
    status: Option<String>,
    files: Option<Vec<CompareFile>>,
}

impl CompareCommitsResponse {
    fn into_comparison(self, http_status: u16) -> CommitComparison {
        CommitComparison {
            http_status,
            range_status: self.status,
            files: self.files.map(|files| {
                files
                    .into_iter()
                    .map(|file| FileChangeRecord {
                        filename: file.filename,
                        status: FileStatus::from_api(&file.status),
                        previous_filename: file.previous_filename,
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Deserialize)]
struct CompareFile {
    filename: String,
    status: String,
    previous_filename: Option<String>,
}
