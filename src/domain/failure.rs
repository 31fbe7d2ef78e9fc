/// Non-fatal failures recorded during a run.
///
/// Recording a failure marks the step as failed but lets the run continue; the
/// log is inspected once the run ends to pick the exit status.
#[derive(Debug, Default)]
pub struct FailureLog {
    messages: Vec<String>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
