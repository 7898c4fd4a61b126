use crate::logger::format::LoggerFormat;

/// Target prefix of per-request records (`warm.probe.http`, `warm.probe.fn`).
pub const PROBE_TARGET: &str = "warm.probe";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// Base `EnvFilter` directive, e.g. `info` or `warm.core=debug,info`.
    pub level: String,
    /// Level for per-request records; `None` inherits `level`.
    ///
    /// A run over a few hundred links writes one record per probe at `debug`,
    /// so this is usually tuned apart from the rest.
    pub probe_level: Option<String>,
    pub with_targets: bool,
    pub use_color: bool,
}

impl LoggerConfig {
    /// Filter directive actually installed: `level` plus the probe override.
    pub fn directive(&self) -> String {
        match self.probe_level.as_deref().map(str::trim) {
            Some(probe) if !probe.is_empty() => {
                format!("{},{PROBE_TARGET}={probe}", self.level)
            }
            _ => self.level.clone(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || atty::is(atty::Stream::Stderr);
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            probe_level: None,
            with_targets: true,
            use_color,
        }
    }
}
