use std::path::PathBuf;

use clap::Args;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Inputs and runner variables, read from the environment the runner prepares.
#[derive(Args, Debug, Clone, Default)]
pub struct ActionArgs {
    /// Token used to call the GitHub REST API.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Output format: space-delimited, csv or json.
    #[arg(long, env = "INPUT_FORMAT")]
    pub format: Option<String>,
    /// Name of the event that triggered the workflow.
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "")]
    pub event_name: String,
    /// Path to the JSON payload of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,
    /// Repository in `owner/repo` form.
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    pub repository: String,
    /// Base URL of the REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// File that collects step outputs.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    pub runner_debug: Option<String>,
}

impl ActionArgs {
    pub fn debug_enabled(&self) -> bool {
        self.runner_debug.as_deref().map(str::trim) == Some("1")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    pub fn parse(value: &str) -> AppResult<Self> {
        let mut parts = value.trim().splitn(2, '/');
        match (parts.next(), parts.next()) {
            (Some(owner), Some(repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(AppError::Configuration(format!(
                "GITHUB_REPOSITORY must look like 'owner/repo', got '{value}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub token: String,
    /// Raw `format` input; validated when the run starts so a bad value is reported, not fatal.
    pub format: String,
    pub repository: RepoSlug,
    pub api_url: String,
    pub output_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(args: &ActionArgs) -> AppResult<Self> {
        let format = required_input("format", args.format.as_deref())?;
        let token = required_input("token", args.token.as_deref())?;
        let repository = RepoSlug::parse(&args.repository)?;

        Ok(Self {
            token,
            format,
            repository,
            api_url: args.api_url.trim().trim_end_matches('/').to_string(),
            output_file: args.output_file.clone(),
        })
    }
}

fn required_input(name: &str, value: Option<&str>) -> AppResult<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .ok_or_else(|| AppError::Configuration(format!("Input required and not supplied: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ActionArgs {
        ActionArgs {
            token: Some(" secret ".to_string()),
            format: Some("csv".to_string()),
            event_name: "push".to_string(),
            repository: "octo/hello".to_string(),
            api_url: "https://ghe.example.com/api/v3/".to_string(),
            ..ActionArgs::default()
        }
    }

    #[test]
    fn loads_trimmed_inputs() {
        let config = AppConfig::load(&args()).unwrap();
        assert_eq!(config.token, "secret");
        assert_eq!(config.format, "csv");
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(
            config.repository,
            RepoSlug {
                owner: "octo".to_string(),
                repo: "hello".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_required_input() {
        let mut args = args();
        args.token = Some("   ".to_string());
        let err = AppConfig::load(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: Input required and not supplied: token"
        );
    }

    #[test]
    fn format_is_checked_before_token() {
        let mut args = args();
        args.token = None;
        args.format = None;
        let err = AppConfig::load(&args).unwrap_err();
        assert!(err.to_string().ends_with("not supplied: format"));
    }

    #[test]
    fn rejects_malformed_repository() {
        assert!(RepoSlug::parse("no-slash").is_err());
        assert!(RepoSlug::parse("/repo").is_err());
        assert!(RepoSlug::parse("a/b/c").is_err());
    }

    #[test]
    fn debug_follows_runner_flag() {
        let mut args = args();
        assert!(!args.debug_enabled());
        args.runner_debug = Some("1".to_string());
        assert!(args.debug_enabled());
    }
}
