use std::sync::Arc;

use warm_model::Progress;

/// Reporting surface of a run.
///
/// The scheduler is the only writer: `on_progress` once per settled batch, then
/// exactly one of `on_completed` or `on_failed`. Calls are fire-and-forget, so
/// implementations must not block.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, progress: &Progress);
    fn on_completed(&self);
    fn on_failed(&self, message: &str);
}

impl<T: ProgressSink + ?Sized> ProgressSink for Arc<T> {
    fn on_progress(&self, progress: &Progress) {
        (**self).on_progress(progress)
    }
    fn on_completed(&self) {
        (**self).on_completed()
    }
    fn on_failed(&self, message: &str) {
        (**self).on_failed(message)
    }
}

/// Forwards every call to each registered sink, in registration order.
#[derive(Default, Clone)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn ProgressSink>>,
}

impl FanoutSink {
    #[inline]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    #[inline]
    pub fn with(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    #[inline]
    pub fn register(&mut self, sink: Arc<dyn ProgressSink>) {
        self.sinks.push(sink);
    }
}

impl ProgressSink for FanoutSink {
    fn on_progress(&self, progress: &Progress) {
        for s in &self.sinks {
            s.on_progress(progress);
        }
    }

    fn on_completed(&self) {
        for s in &self.sinks {
            s.on_completed();
        }
    }

    fn on_failed(&self, message: &str) {
        for s in &self.sinks {
            s.on_failed(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Tape {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl ProgressSink for Tape {
        fn on_progress(&self, p: &Progress) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:progress:{}", self.tag, p.completed));
        }
        fn on_completed(&self) {
            self.log.lock().unwrap().push(format!("{}:completed", self.tag));
        }
        fn on_failed(&self, message: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:failed:{message}", self.tag));
        }
    }

    #[test]
    fn fanout_preserves_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut fanout = FanoutSink::new().with(Arc::new(Tape {
            tag: "a",
            log: Arc::clone(&log),
        }));
        fanout.register(Arc::new(Tape {
            tag: "b",
            log: Arc::clone(&log),
        }));

        fanout.on_progress(&Progress {
            completed: 5,
            total: 12,
            batch_index: 1,
            batch_count: 3,
        });
        fanout.on_completed();
        fanout.on_failed("boom");

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "a:progress:5",
                "b:progress:5",
                "a:completed",
                "b:completed",
                "a:failed:boom",
                "b:failed:boom",
            ]
        );
    }

    #[test]
    fn empty_fanout_is_noop() {
        let fanout = FanoutSink::default();
        fanout.on_completed();
        fanout.on_failed("ignored");
    }
}
