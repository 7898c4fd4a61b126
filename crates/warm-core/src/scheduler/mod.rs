use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, trace, warn};
use uuid::Uuid;

use warm_model::{Outcome, Progress, RunConfig, RunError, RunState};
use warm_probe::Prober;

use crate::{plan::plan_batches, sink::ProgressSink};

/// Runs one paced, batched warm-up over a list of URLs.
///
/// Each instance owns the state of a single run: once it leaves
/// [`RunState::Idle`] it never runs again.
pub struct BatchScheduler {
    prober: Arc<dyn Prober>,
    config: RunConfig,
    state: RunState,
    id: Uuid,
}

impl BatchScheduler {
    pub fn new(prober: Arc<dyn Prober>, config: RunConfig) -> Self {
        Self {
            prober,
            config,
            state: RunState::Idle,
            id: Uuid::new_v4(),
        }
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Identifier attached to this run's log records.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Run to completion without a cancellation path.
    pub async fn run(&mut self, urls: &[String], sink: &dyn ProgressSink) -> Outcome {
        self.run_with_cancel(urls, sink, CancellationToken::new())
            .await
    }

    /// Run until every batch settled or `cancel` fires.
    ///
    /// Cancellation is observed before each batch and during the pacing delay.
    /// A batch that is already in flight always settles first.
    #[instrument(
        level = "info",
        skip_all,
        fields(run = %self.id, prober = self.prober.name(), total = urls.len())
    )]
    pub async fn run_with_cancel(
        &mut self,
        urls: &[String],
        sink: &dyn ProgressSink,
        cancel: CancellationToken,
    ) -> Outcome {
        if self.state != RunState::Idle {
            let err = RunError::Internal("run already started".into());
            warn!(target: "warm.core.scheduler", state = ?self.state, "{err}");
            sink.on_failed(&err.to_string());
            return Outcome::Failed(err);
        }
        if let Err(e) = self.config.validate() {
            return self.abort(sink, RunError::Precondition(e.to_string()));
        }
        if urls.is_empty() {
            return self.abort(sink, RunError::no_links());
        }
        if let Err(err) = self.transition(RunState::Running) {
            return self.abort(sink, err);
        }

        let total = urls.len();
        let batches = plan_batches(total, self.config.batch_size);
        let batch_count = self.config.batch_count(total);
        let delay = self.config.inter_batch_delay();
        info!(
            target: "warm.core.scheduler",
            batch_size = self.config.batch_size,
            batch_count,
            delay_ms = self.config.inter_batch_delay_ms,
            "run started"
        );

        let mut completed = 0usize;
        let mut failed = 0usize;

        for (idx, range) in batches.into_iter().enumerate() {
            if cancel.is_cancelled() {
                return self.abort(sink, RunError::Cancelled);
            }

            let batch = &urls[range];
            debug!(target: "warm.core.scheduler", batch = idx + 1, size = batch.len(), "dispatching batch");

            // panics are caught per probe; the rest of the batch still settles
            let settled = join_all(
                batch
                    .iter()
                    .map(|url| AssertUnwindSafe(self.prober.probe(url)).catch_unwind()),
            )
            .await;

            let mut fault = None;
            for (url, result) in batch.iter().zip(settled) {
                match result {
                    Ok(outcome) => {
                        if let Some(reason) = outcome.reason() {
                            failed += 1;
                            warn!(target: "warm.core.scheduler", url = %url, reason, "probe failed");
                        }
                    }
                    Err(payload) => {
                        let msg = panic_message(payload.as_ref());
                        error!(target: "warm.core.scheduler", url = %url, panic = msg, "probe panicked");
                        fault.get_or_insert_with(|| format!("probe panicked on {url}: {msg}"));
                    }
                }
            }
            if let Some(msg) = fault {
                return self.abort(sink, RunError::Internal(msg));
            }

            completed += batch.len();
            let progress = Progress {
                completed,
                total,
                batch_index: idx + 1,
                batch_count,
            };
            trace!(target: "warm.core.scheduler", ?progress, "batch settled");
            sink.on_progress(&progress);

            if !progress.is_last_batch() {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = cancel.cancelled() => {
                        return self.abort(sink, RunError::Cancelled);
                    }
                }
            }
        }

        if let Err(err) = self.transition(RunState::Completed) {
            return self.abort(sink, err);
        }
        info!(
            target: "warm.core.scheduler",
            processed = completed,
            failed,
            batch_count,
            "run completed"
        );
        sink.on_completed();
        Outcome::Completed {
            processed: completed,
            batches: batch_count,
        }
    }

    fn transition(&mut self, next: RunState) -> Result<(), RunError> {
        if !self.state.can_transition_to(next) {
            return Err(RunError::Internal(format!(
                "illegal transition {:?} -> {:?}",
                self.state, next
            )));
        }
        self.state = next;
        Ok(())
    }

    fn abort(&mut self, sink: &dyn ProgressSink, err: RunError) -> Outcome {
        warn!(target: "warm.core.scheduler", reason = %err, "run aborted");
        if let Err(e) = self.transition(RunState::Failed) {
            warn!(target: "warm.core.scheduler", state = ?self.state, error = %e, "state left unchanged");
        }
        sink.on_failed(&err.to_string());
        Outcome::Failed(err)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
