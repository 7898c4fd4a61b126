use tracing::{error, info};
use warm_core::ProgressSink;
use warm_model::Progress;

/// Kinds of reports a run hands to its progress surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEventKind {
    Progress,
    Completed,
    Failed,
}

#[inline]
pub fn message_for(kind: RunEventKind) -> &'static str {
    match kind {
        RunEventKind::Progress => "batch settled",
        RunEventKind::Completed => "processing finished",
        RunEventKind::Failed => "processing error",
    }
}

/// Progress surface that only writes log records.
///
/// Suited to headless runs; pair it with a rendering sink through
/// `warm_core::FanoutSink` for interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for LogSink {
    fn on_progress(&self, p: &Progress) {
        info!(
            target: "warm.progress",
            completed = p.completed,
            total = p.total,
            batch = p.batch_index,
            batch_count = p.batch_count,
            percent = p.percent(),
            "{}",
            message_for(RunEventKind::Progress)
        );
    }

    fn on_completed(&self) {
        info!(target: "warm.progress", "{}", message_for(RunEventKind::Completed));
    }

    fn on_failed(&self, message: &str) {
        error!(
            target: "warm.progress",
            reason = message,
            "{}",
            message_for(RunEventKind::Failed)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct() {
        let msgs = [
            message_for(RunEventKind::Progress),
            message_for(RunEventKind::Completed),
            message_for(RunEventKind::Failed),
        ];
        assert_eq!(msgs[1], "processing finished");
        assert!(msgs[0] != msgs[1] && msgs[1] != msgs[2] && msgs[0] != msgs[2]);
    }

    #[test]
    fn log_sink_accepts_every_call_without_subscriber() {
        let sink = LogSink::new();
        sink.on_progress(&Progress {
            completed: 5,
            total: 12,
            batch_index: 1,
            batch_count: 3,
        });
        sink.on_completed();
        sink.on_failed("no links found");
    }
}
