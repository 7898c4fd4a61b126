mod run_config;
pub use run_config::RunConfig;

mod run_state;
pub use run_state::RunState;

mod progress;
pub use progress::Progress;

mod probe_outcome;
pub use probe_outcome::ProbeOutcome;

mod run_error;
pub use run_error::RunError;

mod outcome;
pub use outcome::Outcome;

/// Delay value in milliseconds.
///
/// Used for the pacing delay between batches and for host-side waits.
pub type DelayMs = u64;

/// Message used when a run is started without any URL to probe.
pub const NO_LINKS_MESSAGE: &str = "no links found";
