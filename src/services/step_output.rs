use crate::error::AppResult;

/// Destination for named step outputs.
pub trait StepOutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> AppResult<()>;
}
