use std::io::{self, Write};
use std::sync::Mutex;

use warm_core::ProgressSink;
use warm_model::Progress;

/// Plain-text status surface: one line per report.
///
/// Write errors are dropped; the surface never interrupts a run.
pub struct StatusLine<W: Write + Send> {
    out: Mutex<W>,
    completion_note: Option<String>,
}

impl StatusLine<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            completion_note: None,
        }
    }

    /// Extra line printed after the completion message (e.g. the pending reload).
    pub fn with_completion_note(mut self, note: impl Into<String>) -> Self {
        self.completion_note = Some(note.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, lines: &[&str]) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

pub fn render_progress(p: &Progress) -> String {
    format!(
        "{}% complete • {}/{} items • Batch {} of {}",
        p.percent(),
        p.completed,
        p.total,
        p.batch_index,
        p.batch_count
    )
}

impl<W: Write + Send> ProgressSink for StatusLine<W> {
    fn on_progress(&self, progress: &Progress) {
        self.emit(&[render_progress(progress).as_str()]);
    }

    fn on_completed(&self) {
        match &self.completion_note {
            Some(note) => self.emit(&["Processing finished!", note.as_str()]),
            None => self.emit(&["Processing finished!"]),
        }
    }

    fn on_failed(&self, message: &str) {
        self.emit(&[format!("Processing error: {message}").as_str()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(sink: StatusLine<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn progress_line_shows_percent_counts_and_batch() {
        let line = render_progress(&Progress {
            completed: 10,
            total: 12,
            batch_index: 2,
            batch_count: 3,
        });
        assert_eq!(line, "83% complete • 10/12 items • Batch 2 of 3");
    }

    #[test]
    fn completion_with_note() {
        let sink = StatusLine::new(Vec::new()).with_completion_note("Reloading the page...");
        sink.on_completed();
        assert_eq!(text(sink), "Processing finished!\nReloading the page...\n");
    }

    #[test]
    fn failure_line() {
        let sink = StatusLine::new(Vec::new());
        sink.on_failed("no links found");
        assert_eq!(text(sink), "Processing error: no links found\n");
    }
}
