//! Console lines printed while a run progresses.

use humansize::{format_size, DECIMAL};
use refill_pipeline::{TaskOutcome, TaskStatus};

pub fn task_prefix(relative_path: &str) -> String {
    format!("Replacing {}... ", relative_path)
}

/// The whole status line for one file, written in one go once it is done.
pub fn task_line(outcome: &TaskOutcome) -> String {
    format!("{}{}", task_prefix(&outcome.relative_path), task_result(outcome))
}

pub fn task_result(outcome: &TaskOutcome) -> String {
    match &outcome.status {
        TaskStatus::Replaced { bytes } => format!("SUCCESS ({})", format_size(*bytes, DECIMAL)),
        TaskStatus::Failed { message, .. } if outcome.remote_url.is_empty() => {
            format!("FAILED\n   {}: {}", outcome.local_path, message)
        }
        TaskStatus::Failed { message, .. } => format!(
            "FAILED\n   {} -> {}: {}",
            outcome.remote_url, outcome.local_path, message
        ),
    }
}
