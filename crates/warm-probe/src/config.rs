use std::time::Duration;

use reqwest::{
    Client,
    header::{CACHE_CONTROL, COOKIE, HeaderMap, HeaderValue, PRAGMA},
};

use crate::error::ProbeError;

/// Transport policy for HTTP probes.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Per-request timeout. A timed-out probe is reported as a failure.
    pub timeout_ms: u64,
    /// Static `Cookie` header sent with every request (session-bound pages).
    pub cookie: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Treat non-2xx responses as failures.
    ///
    /// When disabled any received response counts as a success and only
    /// transport errors fail.
    pub check_status: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            cookie: None,
            user_agent: concat!("linkwarm/", env!("CARGO_PKG_VERSION")).to_string(),
            check_status: false,
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.timeout_ms == 0 {
            return Err(ProbeError::InvalidConfig("timeout_ms must be positive".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ProbeError::InvalidConfig("user_agent is empty".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build a client carrying the credential and cache policy.
    ///
    /// Cookies received from any response are kept in the client's jar, so a
    /// client shared between page discovery and probing behaves like a browser
    /// session.
    pub fn build_client(&self) -> Result<Client, ProbeError> {
        self.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        if let Some(cookie) = &self.cookie {
            let value =
                HeaderValue::from_str(cookie).map_err(|_| ProbeError::InvalidHeader("cookie"))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout())
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = ProbeConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(!cfg.check_status);
        assert!(cfg.user_agent.starts_with("linkwarm/"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let cfg = ProbeConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ProbeError::InvalidConfig(_))));
        assert!(cfg.build_client().is_err());
    }

    #[test]
    fn invalid_cookie_is_rejected() {
        let cfg = ProbeConfig {
            cookie: Some("bad\nvalue".into()),
            ..Default::default()
        };
        assert!(matches!(
            cfg.build_client(),
            Err(ProbeError::InvalidHeader("cookie"))
        ));
    }
}
