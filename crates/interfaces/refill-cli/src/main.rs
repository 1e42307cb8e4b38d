use camino::Utf8PathBuf;
use clap::Parser;
use refill_cli::commands;
use refill_config::{
    HttpTimeouts, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_CONNECT_TIMEOUT,
    ENV_REQUEST_TIMEOUT,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Replace every file under a local directory with the file at the same
/// relative path under a remote base URL.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,
    /// Local directory whose files get overwritten
    source_dir: String,
    /// Base URL the relative paths are appended to
    remote_base: String,
    /// Total timeout per request, in seconds
    #[arg(long, env = ENV_REQUEST_TIMEOUT, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,
    /// Connect timeout per request, in seconds
    #[arg(long, env = ENV_CONNECT_TIMEOUT, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout: u64,
    /// Write per-file results as JSON to this path
    #[arg(long)]
    report: Option<Utf8PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    let timeouts = HttpTimeouts::from_secs(cli.timeout, cli.connect_timeout);
    commands::cmd_replace(cli.source_dir, cli.remote_base, timeouts, cli.report).await?;

    Ok(())
}
