use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DelayMs, ModelError};

/// Batching parameters for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Maximum number of probes in flight at once (one batch).
    ///
    /// Must be at least 1.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause inserted between two consecutive batches.
    ///
    /// Not applied after the last batch.
    #[serde(default = "default_inter_batch_delay_ms")]
    pub inter_batch_delay_ms: DelayMs,
}

const DEFAULT_BATCH_SIZE: usize = 5;
const DEFAULT_INTER_BATCH_DELAY_MS: DelayMs = 350;

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_inter_batch_delay_ms() -> DelayMs {
    DEFAULT_INTER_BATCH_DELAY_MS
}

impl RunConfig {
    /// Build a validated config.
    pub fn new(batch_size: usize, inter_batch_delay_ms: DelayMs) -> Result<Self, ModelError> {
        let cfg = Self {
            batch_size,
            inter_batch_delay_ms,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.batch_size == 0 {
            return Err(ModelError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }

    /// Number of batches needed to cover `total` items.
    #[inline]
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size.max(1))
    }

    #[inline]
    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            inter_batch_delay_ms: DEFAULT_INTER_BATCH_DELAY_MS,
        }
    }
}
