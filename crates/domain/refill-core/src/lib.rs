use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

pub mod path_utils;
pub mod roots;

pub use path_utils::{PathMapError, RefillPath};
pub use roots::{RemoteBase, SourceRoot};

/// One unit of work: a local file and the remote URL it is replaced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub absolute_path: Utf8PathBuf,
    /// Path below the source root, always `/`-separated and never escaped.
    pub relative_path: String,
    pub remote_url: String,
}

impl FileTask {
    /// Map a discovered file onto its remote counterpart.
    pub fn new(
        root: &SourceRoot,
        base: &RemoteBase,
        absolute_path: Utf8PathBuf,
    ) -> Result<Self, PathMapError> {
        let relative_path = RefillPath::relative_to(root, &absolute_path)?;
        let remote_url = base.join(&RefillPath::encode(&relative_path));
        Ok(Self {
            absolute_path,
            relative_path,
            remote_url,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport error, timeout or non-success HTTP status.
    Fetch,
    /// The body arrived but could not be written over the local file.
    Write,
    /// The file could not be mapped onto a remote URL; nothing was requested.
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    Replaced { bytes: u64 },
    Failed { kind: FailureKind, message: String },
}

/// Per-file record of what happened to a [`FileTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub local_path: String,
    pub relative_path: String,
    pub remote_url: String,
    #[serde(flatten)]
    pub status: TaskStatus,
}

impl TaskOutcome {
    pub fn replaced(task: &FileTask, bytes: u64) -> Self {
        Self::from_task(task, TaskStatus::Replaced { bytes })
    }

    pub fn failed(task: &FileTask, kind: FailureKind, message: impl Into<String>) -> Self {
        Self::from_task(
            task,
            TaskStatus::Failed {
                kind,
                message: message.into(),
            },
        )
    }

    /// A discovered file that never became a [`FileTask`].
    pub fn unmapped(path: &Utf8Path, error: &PathMapError) -> Self {
        Self {
            local_path: path.to_string(),
            relative_path: path.to_string(),
            remote_url: String::new(),
            status: TaskStatus::Failed {
                kind: FailureKind::Map,
                message: error.to_string(),
            },
        }
    }

    fn from_task(task: &FileTask, status: TaskStatus) -> Self {
        Self {
            local_path: task.absolute_path.to_string(),
            relative_path: task.relative_path.clone(),
            remote_url: task.remote_url.clone(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, TaskStatus::Replaced { .. })
    }
}
