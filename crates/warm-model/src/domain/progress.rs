use serde::{Deserialize, Serialize};

/// Snapshot emitted once per settled batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// URLs processed so far, failed probes included.
    pub completed: usize,
    /// Size of the URL list.
    pub total: usize,
    /// 1-based index of the batch that just settled.
    pub batch_index: usize,
    /// Number of batches in the run.
    pub batch_count: usize,
}

impl Progress {
    /// Completion ratio as a rounded percentage in `0..=100`.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.completed as f64 / self.total as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    #[inline]
    pub fn is_last_batch(&self) -> bool {
        self.batch_index == self.batch_count
    }
}
