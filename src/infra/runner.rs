use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use blake3::Hasher;

use crate::error::{AppError, AppResult};
use crate::services::StepOutputSink;

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Writes step outputs the way the Actions runner reads them.
///
/// With a `GITHUB_OUTPUT` file, each output is appended as a heredoc block.
/// Without one, the legacy `::set-output` command is printed to stdout.
pub struct RunnerOutputs {
    output_file: Option<PathBuf>,
}

impl RunnerOutputs {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    fn delimiter(name: &str, value: &str) -> String {
        let mut hasher = Hasher::new();
        hasher.update(name.as_bytes());
        hasher.update(&[0u8]);
        hasher.update(value.as_bytes());
        let digest = hasher.finalize().to_hex();
        format!("{DELIMITER_PREFIX}{}", &digest.as_str()[..32])
    }

    fn file_block(name: &str, value: &str) -> AppResult<String> {
        let delimiter = Self::delimiter(name, value);
        if name.contains(&delimiter) {
            return Err(AppError::Output(format!(
                "output name must not contain the delimiter {delimiter}"
            )));
        }
        if value.contains(&delimiter) {
            return Err(AppError::Output(format!(
                "value of output '{name}' must not contain the delimiter {delimiter}"
            )));
        }
        Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
    }

    fn command_line(name: &str, value: &str) -> String {
        format!(
            "::set-output name={}::{}",
            escape_property(name),
            escape_data(value)
        )
    }
}

impl StepOutputSink for RunnerOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> AppResult<()> {
        match &self.output_file {
            Some(path) => {
                let block = Self::file_block(name, value)?;
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(block.as_bytes())?;
            }
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", Self::command_line(name, value))?;
            }
        }
        Ok(())
    }
}

/// Escapes the message part of a workflow command.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a `key=value` property of a workflow command.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
