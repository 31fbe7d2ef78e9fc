use crate::context::AppContext;
use crate::domain::failure::FailureLog;
use crate::error::AppResult;
use crate::services::StepOutputSink;
use crate::workflow::changed_files::detect_changed_files;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed,
}

pub async fn run(ctx: &AppContext, sink: &mut dyn StepOutputSink) -> AppResult<StepStatus> {
    let mut failures = FailureLog::new();
    let outcome = detect_changed_files(ctx, sink, &mut failures).await?;
    log::debug!(
        "Compared range {}, all changed files: {}",
        outcome.range.basehead(),
        outcome.outputs.all
    );

    if failures.is_empty() {
        Ok(StepStatus::Succeeded)
    } else {
        log::debug!("{} failure(s) recorded", failures.messages().len());
        Ok(StepStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::domain::change::{CommitComparison, FileChangeRecord, FileStatus};
    use crate::error::AppError;
    use crate::workflow::testing::{MemoryOutputs, StaticComparison, context, push_payload};

    fn modified(filename: &str) -> Vec<FileChangeRecord> {
        vec![FileChangeRecord::new(filename, FileStatus::Modified)]
    }

    #[tokio::test]
    async fn clean_run_succeeds() {
        let service = Arc::new(StaticComparison::ahead(modified("a.txt")));
        let ctx = context("csv", "push", push_payload(), service);
        let mut sink = MemoryOutputs::default();

        let status = run(&ctx, &mut sink).await.unwrap();

        assert_eq!(status, StepStatus::Succeeded);
        assert_eq!(sink.get("modified"), Some("a.txt"));
    }

    #[tokio::test]
    async fn diverged_range_fails_after_publishing() {
        let service = Arc::new(StaticComparison::new(CommitComparison {
            http_status: 200,
            range_status: Some("diverged".to_string()),
            files: Some(modified("a.txt")),
        }));
        let ctx = context("csv", "push", push_payload(), service);
        let mut sink = MemoryOutputs::default();

        let status = run(&ctx, &mut sink).await.unwrap();

        assert_eq!(status, StepStatus::Failed);
        assert_eq!(sink.get("all"), Some("a.txt"));
    }

    #[tokio::test]
    async fn space_in_filename_fails_space_delimited_run() {
        let service = Arc::new(StaticComparison::ahead(modified("my file.txt")));
        let ctx = context("space-delimited", "push", push_payload(), service);
        let mut sink = MemoryOutputs::default();

        let status = run(&ctx, &mut sink).await.unwrap();

        assert_eq!(status, StepStatus::Failed);
        assert_eq!(sink.get("all"), Some("my file.txt"));
    }

    #[tokio::test]
    async fn missing_file_list_is_an_error() {
        let service = Arc::new(StaticComparison::new(CommitComparison {
            http_status: 200,
            range_status: Some("ahead".to_string()),
            files: None,
        }));
        let ctx = context("csv", "push", json!({"before": "a", "after": "b"}), service);
        let mut sink = MemoryOutputs::default();

        let result = run(&ctx, &mut sink).await;

        assert!(matches!(result, Err(AppError::MissingFileList)));
        assert!(sink.0.is_empty());
    }
}
