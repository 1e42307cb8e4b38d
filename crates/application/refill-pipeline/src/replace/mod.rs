use refill_core::{FileTask, RemoteBase, SourceRoot, TaskOutcome};
use refill_scanner::ScannerError;
use serde::Serialize;

pub mod engine;
pub mod replacer;
pub mod setup;

pub use engine::DefaultReplaceEngine;
pub use replacer::{FileReplacer, HttpFileReplacer};

#[derive(Debug, Clone)]
pub struct ReplaceRequest {
    /// Local directory as the user gave it.
    pub source_dir: String,
    /// Remote base URL as the user gave it.
    pub remote_base: String,
}

/// Everything that happened during one run, one record per file.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source_root: String,
    pub remote_base: String,
    pub files_found: usize,
    pub outcomes: Vec<TaskOutcome>,
}

impl RunReport {
    pub fn is_empty(&self) -> bool {
        self.files_found == 0
    }
}

/// Progress notifications, emitted synchronously from the run loop.
#[derive(Debug)]
pub enum ReplaceEvent<'a> {
    Started {
        root: &'a SourceRoot,
        base: &'a RemoteBase,
        files: usize,
    },
    TaskStarted {
        task: &'a FileTask,
    },
    /// Fires for every discovered file, including ones that never got a
    /// `TaskStarted` because they could not be mapped to a URL.
    TaskFinished {
        outcome: &'a TaskOutcome,
    },
}

/// Failures that stop a run before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("File enumeration failed: {0}")]
    Scan(#[from] ScannerError),
    #[error("File enumeration task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience constructor for the default engine.
pub fn default_engine(client: reqwest::Client) -> DefaultReplaceEngine {
    DefaultReplaceEngine::new(client)
}
