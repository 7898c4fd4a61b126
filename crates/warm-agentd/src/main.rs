use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use warm_core::{BatchScheduler, CancellationToken, FanoutSink, Outcome, ProgressSink};
use warm_discover::{DiscoverError, discover, fetch_page, parse_url_list};
use warm_observe::{LogSink, logger_init};
use warm_probe::HttpProber;

mod cli;
mod status;

use cli::{Cli, Source};
use status::StatusLine;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 1) Logger
    logger_init(&cli.logger_config()?)?;
    info!("logger initialized");

    // 2) Progress surface
    let mut status = StatusLine::stdout();
    if cli.reload_target().is_some() {
        status = status.with_completion_note("Reloading the page...");
    }
    let sink = FanoutSink::new()
        .with(Arc::new(LogSink::new()))
        .with(Arc::new(status));

    // 3) Interrupt
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received; stopping at the next batch boundary");
            trigger.cancel();
        }
    });

    // 4) Warm-up
    run(&cli, &sink, cancel).await
}

/// Collect the links, warm them up and reload the page on success.
async fn run(
    cli: &Cli,
    sink: &dyn ProgressSink,
    cancel: CancellationToken,
) -> anyhow::Result<ExitCode> {
    let run_config = cli.run_config()?;
    let probe_config = cli.probe_config();
    let client = probe_config.build_client()?;

    let source = cli
        .source()
        .context("either --page or --urls-file is required")?;
    let urls = match source {
        Source::File(path) => {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_url_list(&text)
        }
        Source::Page(cfg) => match discover(&client, &cfg).await {
            Ok(urls) => urls,
            // an empty list is reported by the scheduler itself
            Err(DiscoverError::NoLinks) => Vec::new(),
            Err(e) => {
                warn!(page = %cfg.page_url, error = %e, "link discovery failed");
                sink.on_failed(&e.to_string());
                return Ok(ExitCode::FAILURE);
            }
        },
    };
    info!(links = urls.len(), "links collected");

    let prober = Arc::new(HttpProber::with_client(client.clone(), probe_config.check_status));
    let mut scheduler = BatchScheduler::new(prober, run_config);
    let outcome = scheduler.run_with_cancel(&urls, sink, cancel).await;

    if let Some(err) = outcome.error() {
        warn!(run = %scheduler.id(), error = %err, "warm-up did not complete");
        return Ok(ExitCode::FAILURE);
    }
    if let Outcome::Completed { processed, batches } = outcome {
        info!(run = %scheduler.id(), processed, batches, "warm-up finished");
    }

    if let Some(page) = cli.reload_target() {
        tokio::time::sleep(Duration::from_millis(cli.reload_delay_ms)).await;
        match fetch_page(&client, page).await {
            Ok(reloaded) => info!(url = %reloaded.url, "page reloaded"),
            Err(e) => warn!(error = %e, "page reload failed"),
        }
    }
    Ok(ExitCode::SUCCESS)
}
