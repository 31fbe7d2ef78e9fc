use serde::Serialize;

use crate::domain::change::{FileChangeRecord, FileStatus};
use crate::domain::failure::FailureLog;
use crate::domain::format::OutputFormat;

pub const SPACE_IN_FILENAME: &str = "One of your files includes a space. Consider using a different output format or removing spaces from your filenames.";

/// A rename from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// Filenames grouped by category, always serialized as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombinedOutput {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    pub renamed: Vec<String>,
    #[serde(rename = "renamedFrom")]
    pub renamed_from: Vec<String>,
}

/// One record as returned by the API, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullOutputEntry {
    pub filename: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub all: Vec<String>,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    pub renamed: Vec<String>,
    pub added_modified: Vec<String>,
    /// Renamed files with a known previous name, keyed by their new name.
    pub renames: Vec<Rename>,
    pub combined: CombinedOutput,
    pub full_output: Vec<FullOutputEntry>,
}

/// Sorts records into status buckets in API order.
///
/// Records with an unsupported status are reported and left out of every bucket
/// except `all` and the full output.
pub fn classify(
    records: &[FileChangeRecord],
    format: Option<OutputFormat>,
    failures: &mut FailureLog,
) -> Classification {
    let mut result = Classification::default();

    for record in records {
        result.full_output.push(FullOutputEntry {
            filename: record.filename.clone(),
            status: record.status.as_str().to_string(),
            previous_filename: record.previous_filename.clone(),
        });

        let filename = record.filename.clone();
        if format == Some(OutputFormat::SpaceDelimited) && filename.contains(' ') {
            failures.record(SPACE_IN_FILENAME);
        }
        result.all.push(filename.clone());

        match &record.status {
            FileStatus::Added => {
                result.added.push(filename.clone());
                result.added_modified.push(filename.clone());
                result.combined.added.push(filename);
            }
            FileStatus::Modified => {
                result.modified.push(filename.clone());
                result.added_modified.push(filename.clone());
                result.combined.modified.push(filename);
            }
            FileStatus::Removed => {
                result.removed.push(filename.clone());
                result.combined.removed.push(filename);
            }
            FileStatus::Renamed => {
                result.renamed.push(filename.clone());
                if let Some(previous) = record.previous_filename.as_ref().filter(|p| !p.is_empty())
                {
                    result.renames.push(Rename {
                        from: previous.clone(),
                        to: filename.clone(),
                    });
                    result.combined.renamed_from.push(previous.clone());
                }
                result.combined.renamed.push(filename);
            }
            FileStatus::Unsupported(status) => failures.record(format!(
                "One of your files includes an unsupported file status '{status}', expected 'added', 'modified', 'removed', or 'renamed'."
            )),
        }
    }

    result
}
