use async_trait::async_trait;

use crate::domain::change::CommitComparison;
use crate::error::AppResult;

#[async_trait]
pub trait CommitComparisonService: Send + Sync {
    /// Compares the commits named by `basehead` (`base...head`) in `owner/repo`.
    async fn compare(&self, owner: &str, repo: &str, basehead: &str)
    -> AppResult<CommitComparison>;
}
