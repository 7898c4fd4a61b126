mod config;
mod error;
mod format;
mod log;

pub use config::{LoggerConfig, PROBE_TARGET};
pub use error::LoggerError;
pub use format::LoggerFormat;

/// Install the global subscriber for the warm-up run.
///
/// Fails without installing anything when the filter directive is invalid.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = log::mk_filter(&cfg.directive())?;
    match cfg.format {
        LoggerFormat::Text => log::Logger::text(cfg, filter)?,
        LoggerFormat::Json => log::Logger::json(cfg, filter)?,
        LoggerFormat::Journald => log::Logger::journald(filter)?,
    }
    tracing::debug!(
        target: "warm.observe",
        format = %cfg.format,
        filter = %cfg.directive(),
        "logger installed"
    );
    Ok(())
}
