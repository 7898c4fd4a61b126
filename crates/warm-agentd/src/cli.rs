use std::path::PathBuf;

use clap::Parser;
use warm_discover::{DEFAULT_CONTAINER_ID, DiscoverConfig};
use warm_model::{DelayMs, ModelError, RunConfig};
use warm_observe::{LoggerConfig, LoggerError};
use warm_probe::ProbeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "linkwarm",
    about = "Warm up every link of a page with paced, batched HEAD requests"
)]
pub struct Cli {
    /// Page whose container links are warmed up
    #[arg(
        long,
        env = "LINKWARM_PAGE",
        required_unless_present = "urls_file",
        conflicts_with = "urls_file"
    )]
    pub page: Option<String>,

    /// File with one URL per line, used instead of page discovery
    #[arg(long, env = "LINKWARM_URLS_FILE")]
    pub urls_file: Option<PathBuf>,

    /// Id of the element holding the links
    #[arg(long, env = "LINKWARM_CONTAINER", default_value = DEFAULT_CONTAINER_ID)]
    pub container: String,

    /// Requests in flight per batch
    #[arg(long, env = "LINKWARM_BATCH_SIZE", default_value_t = 5)]
    pub batch_size: usize,

    /// Milliseconds to wait between batches
    #[arg(long, env = "LINKWARM_DELAY_MS", default_value_t = 350)]
    pub delay_ms: DelayMs,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "LINKWARM_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Cookie header sent with every request (e.g. a session cookie)
    #[arg(long, env = "LINKWARM_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Count non-2xx responses as failed probes
    #[arg(long, default_value_t = false)]
    pub check_status: bool,

    /// Do not re-fetch the page after a successful run
    #[arg(long, default_value_t = false)]
    pub no_reload: bool,

    /// Milliseconds to wait before re-fetching the page
    #[arg(long, env = "LINKWARM_RELOAD_DELAY_MS", default_value_t = 2_400)]
    pub reload_delay_ms: DelayMs,

    /// Log filter directive
    #[arg(long, env = "LINKWARM_LOG", default_value = "info")]
    pub log_level: String,

    /// Log level for per-request records, e.g. `debug` to see every probe
    #[arg(long, env = "LINKWARM_PROBE_LOG")]
    pub probe_log_level: Option<String>,

    /// Log format: text, json or journald
    #[arg(long, env = "LINKWARM_LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

/// Where the URL list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Page(DiscoverConfig),
    File(PathBuf),
}

impl Cli {
    pub fn source(&self) -> Option<Source> {
        if let Some(path) = &self.urls_file {
            return Some(Source::File(path.clone()));
        }
        let page = self.page.as_ref()?;
        Some(Source::Page(
            DiscoverConfig::new(page.clone()).with_container(self.container.clone()),
        ))
    }

    pub fn run_config(&self) -> Result<RunConfig, ModelError> {
        RunConfig::new(self.batch_size, self.delay_ms)
    }

    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            timeout_ms: self.timeout_ms,
            cookie: self.cookie.clone(),
            check_status: self.check_status,
            ..Default::default()
        }
    }

    pub fn logger_config(&self) -> Result<LoggerConfig, LoggerError> {
        Ok(LoggerConfig {
            format: self.log_format.parse()?,
            level: self.log_level.clone(),
            probe_level: self.probe_log_level.clone(),
            ..Default::default()
        })
    }

    /// Page to re-fetch after a completed run, if any.
    pub fn reload_target(&self) -> Option<&str> {
        if self.no_reload || self.urls_file.is_some() {
            return None;
        }
        self.page.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["linkwarm"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn page_mode_defaults() {
        let cli = parse(&["--page", "https://lms.example/course/view.php?id=7"]);

        let run = cli.run_config().unwrap();
        assert_eq!(run, RunConfig::default());
        assert_eq!(cli.reload_delay_ms, 2_400);
        assert_eq!(cli.reload_target(), Some("https://lms.example/course/view.php?id=7"));

        match cli.source().unwrap() {
            Source::Page(cfg) => assert_eq!(cfg.container_id, DEFAULT_CONTAINER_ID),
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn file_mode_never_reloads() {
        let cli = parse(&["--urls-file", "links.txt"]);
        assert_eq!(cli.source(), Some(Source::File(PathBuf::from("links.txt"))));
        assert_eq!(cli.reload_target(), None);
    }

    #[test]
    fn page_and_file_conflict() {
        let res = Cli::try_parse_from([
            "linkwarm",
            "--page",
            "https://a/",
            "--urls-file",
            "links.txt",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn a_source_is_required() {
        assert!(Cli::try_parse_from(["linkwarm"]).is_err());
    }

    #[test]
    fn zero_batch_size_is_rejected_by_run_config() {
        let cli = parse(&["--page", "https://a/", "--batch-size", "0"]);
        assert!(matches!(cli.run_config(), Err(ModelError::InvalidBatchSize(0))));
    }

    #[test]
    fn probe_and_logger_settings_are_forwarded() {
        let cli = parse(&[
            "--page",
            "https://a/",
            "--timeout-ms",
            "500",
            "--cookie",
            "s=1",
            "--check-status",
            "--no-reload",
            "--log-format",
            "json",
            "--probe-log-level",
            "debug",
        ]);

        let probe = cli.probe_config();
        assert_eq!(probe.timeout_ms, 500);
        assert_eq!(probe.cookie.as_deref(), Some("s=1"));
        assert!(probe.check_status);
        assert_eq!(cli.reload_target(), None);

        let log = cli.logger_config().unwrap();
        assert_eq!(log.format, warm_observe::LoggerFormat::Json);
        assert_eq!(log.directive(), "info,warm.probe=debug");
    }
}
