use crate::output::task_line;
use anyhow::Context;
use camino::Utf8PathBuf;
use refill_config::HttpTimeouts;
use refill_pipeline::{ReplaceEvent, ReplaceRequest, RunReport};
use tracing::{debug, warn};

fn print_event(event: ReplaceEvent<'_>) {
    match event {
        ReplaceEvent::Started { root, base, files } => {
            println!("   Local:  {}", root);
            println!("   Remote: {}", base);
            println!("   Files:  {}", files);
        }
        ReplaceEvent::TaskStarted { task } => debug!("GET {}", task.remote_url),
        ReplaceEvent::TaskFinished { outcome } => println!("{}", task_line(outcome)),
    }
}

pub async fn cmd_replace(
    source_dir: String,
    remote_base: String,
    timeouts: HttpTimeouts,
    report_path: Option<Utf8PathBuf>,
) -> anyhow::Result<RunReport> {
    println!(":: Replacing local files from remote base...");

    let client =
        refill_infra::net::default_http_client(timeouts).context("Failed to build HTTP client")?;
    let engine = refill_pipeline::default_engine(client);

    let req = ReplaceRequest {
        source_dir,
        remote_base,
    };

    let report = engine.run(&req, Some(&print_event)).await?;

    if report.is_empty() {
        println!(":: No files found in {}. Nothing to replace.", report.source_root);
    } else {
        println!(":: Replacement finished.");
    }

    if let Some(out) = report_path {
        if let Err(e) = write_report(&report, &out) {
            warn!("Could not write report to {}: {:#}", out, e);
        } else {
            println!(":: Saved report to {}", out);
        }
    }

    Ok(report)
}

fn write_report(report: &RunReport, out: &Utf8PathBuf) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(out, json).with_context(|| format!("writing {out}"))?;
    Ok(())
}
