/// Status the compare endpoint reports for a changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    /// Any status outside the four handled ones (`copied`, `changed`, ...), kept verbatim.
    Unsupported(String),
}

impl FileStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Removed => "removed",
            FileStatus::Renamed => "renamed",
            FileStatus::Unsupported(raw) => raw,
        }
    }

    pub fn from_api(value: &str) -> Self {
        match value {
            "added" => FileStatus::Added,
            "modified" => FileStatus::Modified,
            "removed" => FileStatus::Removed,
            "renamed" => FileStatus::Renamed,
            other => FileStatus::Unsupported(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChangeRecord {
    pub filename: String,
    pub status: FileStatus,
    pub previous_filename: Option<String>,
}

#[cfg(test)]
impl FileChangeRecord {
    pub fn new(filename: impl Into<String>, status: FileStatus) -> Self {
        Self {
            filename: filename.into(),
            status,
            previous_filename: None,
        }
    }

    pub fn renamed(filename: impl Into<String>, previous: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: FileStatus::Renamed,
            previous_filename: Some(previous.into()),
        }
    }
}

pub const RANGE_STATUS_AHEAD: &str = "ahead";

/// What came back from comparing `base...head`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitComparison {
    pub http_status: u16,
    /// `ahead`, `behind`, `diverged` or `identical`.
    pub range_status: Option<String>,
    pub files: Option<Vec<FileChangeRecord>>,
}

impl CommitComparison {
    pub fn is_ahead(&self) -> bool {
        self.range_status.as_deref() == Some(RANGE_STATUS_AHEAD)
    }
}
