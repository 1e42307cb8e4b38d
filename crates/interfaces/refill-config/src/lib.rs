//! Central configuration constants for runtime limits and defaults.

use std::time::Duration;

/// Default total timeout for one GET, body included (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Allowed range for the request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

/// Default TCP/TLS connect timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Allowed range for the connect timeout (seconds).
pub const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 300;

/// Environment overrides read by the CLI.
pub const ENV_REQUEST_TIMEOUT: &str = "REFILL_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT: &str = "REFILL_CONNECT_TIMEOUT_SECS";

/// Sent with every request.
pub const USER_AGENT: &str = concat!("refill/", env!("CARGO_PKG_VERSION"));

/// Timeouts for the HTTP client, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl HttpTimeouts {
    pub fn from_secs(request_secs: u64, connect_secs: u64) -> Self {
        Self {
            request: Duration::from_secs(clamp_request_timeout(request_secs)),
            connect: Duration::from_secs(clamp_connect_timeout(connect_secs)),
        }
    }
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

pub fn clamp_request_timeout(secs: u64) -> u64 {
    secs.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
}

pub fn clamp_connect_timeout(secs: u64) -> u64 {
    secs.clamp(MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS)
}
