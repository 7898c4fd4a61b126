use std::future::Future;

use async_trait::async_trait;
use tracing::trace;
use warm_model::ProbeOutcome;

use crate::prober::Prober;

/// Prober backed by an async closure.
///
/// Used for headless runs and for tests that need to observe or script
/// individual probe results.
pub struct FnProber<F> {
    name: &'static str,
    f: F,
}

impl<F, Fut> FnProber<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = ProbeOutcome> + Send,
{
    pub fn new(f: F) -> Self {
        Self { name: "fn", f }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

#[async_trait]
impl<F, Fut> Prober for FnProber<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = ProbeOutcome> + Send,
{
    fn name(&self) -> &'static str {
        self.name
    }

    async fn probe(&self, url: &str) -> ProbeOutcome {
        trace!(target: "warm.probe.fn", url, "probe");
        (self.f)(url.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn forwards_url_and_result() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in = Arc::clone(&seen);
        let p = FnProber::new(move |url: String| {
            let seen = Arc::clone(&seen_in);
            async move {
                seen.lock().unwrap().push(url.clone());
                if url.ends_with("bad") {
                    ProbeOutcome::failure("scripted")
                } else {
                    ProbeOutcome::Success
                }
            }
        });

        assert!(p.probe("https://a/ok").await.is_success());
        assert!(!p.probe("https://a/bad").await.is_success());
        assert_eq!(*seen.lock().unwrap(), vec!["https://a/ok", "https://a/bad"]);
    }

    #[test]
    fn with_name_sets_custom_name() {
        let p = FnProber::new(|_url: String| async { ProbeOutcome::Success }).with_name("noop");
        assert_eq!(p.name(), "noop");
    }
}
