pub mod replace;

// Re-export core engine components
pub use replace::{
    default_engine, DefaultReplaceEngine, FileReplacer, HttpFileReplacer, ReplaceEvent,
    ReplaceRequest, RunReport, SetupError,
};

// Re-export types consumers need to read a report
pub use refill_core::{FailureKind, FileTask, TaskOutcome, TaskStatus};
