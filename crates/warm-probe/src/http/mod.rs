use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};
use warm_model::ProbeOutcome;

use crate::{config::ProbeConfig, error::ProbeError, prober::Prober};

/// `HEAD` based prober.
///
/// Issues exactly one `HEAD` request per URL. Redirects follow the client's
/// default policy and are not treated specially.
pub struct HttpProber {
    client: Client,
    check_status: bool,
}

impl HttpProber {
    pub fn new(cfg: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = cfg.build_client()?;
        Ok(Self::with_client(client, cfg.check_status))
    }

    /// Reuse an existing client (and its cookie jar).
    pub fn with_client(client: Client, check_status: bool) -> Self {
        Self {
            client,
            check_status,
        }
    }
}

#[async_trait]
impl Prober for HttpProber {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn probe(&self, url: &str) -> ProbeOutcome {
        trace!(target: "warm.probe.http", url, "head");

        match self.client.head(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if self.check_status && !status.is_success() {
                    debug!(target: "warm.probe.http", url, status = status.as_u16(), "rejected status");
                    return ProbeOutcome::failure(format!("status: {status}"));
                }
                trace!(target: "warm.probe.http", url, status = status.as_u16(), "ok");
                ProbeOutcome::Success
            }
            Err(e) => {
                let reason = describe(&e);
                debug!(target: "warm.probe.http", url, %reason, "probe failed");
                ProbeOutcome::failure(reason)
            }
        }
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "timeout".to_string()
    } else if e.is_connect() {
        format!("connect: {e}")
    } else if e.is_builder() {
        format!("invalid request: {e}")
    } else {
        e.to_string()
    }
}
