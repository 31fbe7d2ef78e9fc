use std::fmt;
use std::str::FromStr;

use crate::domain::classify::{Classification, Rename};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    SpaceDelimited,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::SpaceDelimited => "space-delimited",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Renders an ordered list of filenames.
    pub fn render_list(&self, items: &[String]) -> AppResult<String> {
        match self {
            OutputFormat::SpaceDelimited => Ok(items.join(" ")),
            OutputFormat::Csv => Ok(items.join(",")),
            OutputFormat::Json => Ok(serde_json::to_string(items)?),
        }
    }

    /// Renders renames as `old->new` entries, or `[old, new]` pairs for json.
    pub fn render_renames(&self, renames: &[Rename]) -> AppResult<String> {
        match self {
            OutputFormat::SpaceDelimited | OutputFormat::Csv => {
                let entries = renames
                    .iter()
                    .map(|rename| format!("{}->{}", rename.from, rename.to))
                    .collect::<Vec<_>>();
                self.render_list(&entries)
            }
            OutputFormat::Json => {
                let pairs = renames
                    .iter()
                    .map(|rename| [rename.from.as_str(), rename.to.as_str()])
                    .collect::<Vec<_>>();
                Ok(serde_json::to_string(&pairs)?)
            }
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space-delimited" => Ok(OutputFormat::SpaceDelimited),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Format must be one of 'space-delimited', 'csv', or 'json', got '{other}'."
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every step output value, rendered and ready to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutputs {
    pub all: String,
    pub added: String,
    pub modified: String,
    pub removed: String,
    pub renamed: String,
    pub added_modified: String,
    pub renamed_from: String,
    pub full_output: String,
    pub json_combined: String,
}

impl FormattedOutputs {
    pub fn render(classification: &Classification, format: OutputFormat) -> AppResult<Self> {
        Ok(Self {
            all: format.render_list(&classification.all)?,
            added: format.render_list(&classification.added)?,
            modified: format.render_list(&classification.modified)?,
            removed: format.render_list(&classification.removed)?,
            renamed: format.render_list(&classification.renamed)?,
            added_modified: format.render_list(&classification.added_modified)?,
            renamed_from: format.render_renames(&classification.renames)?,
            full_output: serde_json::to_string(&classification.full_output)?,
            json_combined: serde_json::to_string(&classification.combined)?,
        })
    }
}
