pub mod comparison;
pub mod step_output;

pub use comparison::CommitComparisonService;
pub use step_output::StepOutputSink;
