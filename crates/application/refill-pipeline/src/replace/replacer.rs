use refill_core::FileTask;
use refill_infra::net::{Fetcher, ReplaceError};

/// Replaces one local file with its remote counterpart.
#[async_trait::async_trait]
pub trait FileReplacer: Send + Sync {
    /// Returns the number of bytes written over the local file.
    async fn replace(&self, task: &FileTask) -> Result<u64, ReplaceError>;
}

pub struct HttpFileReplacer {
    fetcher: Fetcher,
}

impl HttpFileReplacer {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            fetcher: Fetcher::new(client),
        }
    }
}

#[async_trait::async_trait]
impl FileReplacer for HttpFileReplacer {
    async fn replace(&self, task: &FileTask) -> Result<u64, ReplaceError> {
        self.fetcher
            .fetch_and_overwrite(&task.remote_url, &task.absolute_path)
            .await
    }
}
