use refill_core::{FileTask, RemoteBase, TaskOutcome};
use refill_scanner::Scanner;
use tracing::{debug, info};

use crate::replace::replacer::{FileReplacer, HttpFileReplacer};
use crate::replace::setup::validate_source_root;
use crate::replace::{ReplaceEvent, ReplaceRequest, RunReport, SetupError};

pub type EventSink<'s> = &'s (dyn Fn(ReplaceEvent<'_>) + Send + Sync);

pub struct DefaultReplaceEngine {
    replacer: Box<dyn FileReplacer>,
}

impl DefaultReplaceEngine {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            replacer: Box::new(HttpFileReplacer::new(client)),
        }
    }

    pub fn with_replacer(replacer: Box<dyn FileReplacer>) -> Self {
        Self { replacer }
    }

    /// Validate, enumerate, then replace every file in turn.
    ///
    /// Only setup can fail. Per-file failures end up as failed outcomes in
    /// the report and the loop moves on to the next file.
    pub async fn run(
        &self,
        req: &ReplaceRequest,
        on_event: Option<EventSink<'_>>,
    ) -> Result<RunReport, SetupError> {
        let emit = |event: ReplaceEvent<'_>| {
            if let Some(sink) = on_event {
                sink(event);
            }
        };

        let root = validate_source_root(&req.source_dir)?;
        let base = RemoteBase::new(&req.remote_base);

        let walk_root = root.as_path().to_path_buf();
        let files =
            tokio::task::spawn_blocking(move || Scanner::enumerate_files(&walk_root)).await??;

        info!("Replacing {} files under {} from {}", files.len(), root, base);
        emit(ReplaceEvent::Started {
            root: &root,
            base: &base,
            files: files.len(),
        });

        let files_found = files.len();
        let mut outcomes = Vec::with_capacity(files_found);

        for path in files {
            let task = match FileTask::new(&root, &base, path.clone()) {
                Ok(task) => task,
                Err(e) => {
                    debug!("Could not map {}: {}", path, e);
                    let outcome = TaskOutcome::unmapped(&path, &e);
                    emit(ReplaceEvent::TaskFinished { outcome: &outcome });
                    outcomes.push(outcome);
                    continue;
                }
            };
            emit(ReplaceEvent::TaskStarted { task: &task });

            let outcome = match self.replacer.replace(&task).await {
                Ok(bytes) => {
                    debug!("Replaced {} ({} bytes)", task.absolute_path, bytes);
                    TaskOutcome::replaced(&task, bytes)
                }
                Err(e) => {
                    // Surfaced through the outcome; callers print it.
                    let message = e.describe();
                    debug!(
                        "Could not replace {} from {}: {}",
                        task.absolute_path, task.remote_url, message
                    );
                    TaskOutcome::failed(&task, e.kind(), message)
                }
            };

            emit(ReplaceEvent::TaskFinished { outcome: &outcome });
            outcomes.push(outcome);
        }

        Ok(RunReport {
            source_root: root.to_string(),
            remote_base: base.to_string(),
            files_found,
            outcomes,
        })
    }
}
