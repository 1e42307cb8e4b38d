use camino::Utf8Path;
use refill_config::{HttpTimeouts, USER_AGENT};
use refill_core::FailureKind;
use reqwest::{Client, StatusCode};
use std::error::Error as _;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Why a single file could not be replaced.
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered HTTP {0}")]
    Status(StatusCode),
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

impl ReplaceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ReplaceError::Transport(_) | ReplaceError::Status(_) => FailureKind::Fetch,
            ReplaceError::Write(_) => FailureKind::Write,
        }
    }

    /// Display text followed by every underlying cause.
    ///
    /// reqwest keeps the useful part ("connection refused", "relative URL
    /// without a base") in the source chain, not in its own message.
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut source = match self {
            ReplaceError::Transport(e) => e.source(),
            _ => None,
        };
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

pub fn default_http_client(timeouts: HttpTimeouts) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect)
        .build()
}

/// GET a URL and write the body over an existing local file.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the number of bytes written.
    ///
    /// The whole body is received before the target is opened, so a fetch
    /// failure leaves the local file untouched.
    pub async fn fetch_and_overwrite(
        &self,
        url: &str,
        target: &Utf8Path,
    ) -> Result<u64, ReplaceError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(ReplaceError::Status(status));
        }

        let body = resp.bytes().await?;
        overwrite_existing(target, &body).await?;
        Ok(body.len() as u64)
    }
}

/// Truncate and rewrite a file that must already exist.
pub async fn overwrite_existing(target: &Utf8Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(target.as_std_path())
        .await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}
