use async_trait::async_trait;
use warm_model::ProbeOutcome;

/// One lightweight existence check per URL.
///
/// Implementations must always resolve: transport errors, timeouts and rejected
/// statuses are reported as [`ProbeOutcome::Failure`], never as a panic or error.
/// Exactly one outbound request is issued per call.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn probe(&self, url: &str) -> ProbeOutcome;
}
