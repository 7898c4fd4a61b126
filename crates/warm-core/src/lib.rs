pub mod plan;
pub use plan::plan_batches;

pub mod sink;
pub use sink::{FanoutSink, ProgressSink};

pub mod scheduler;
pub use scheduler::BatchScheduler;

pub use tokio_util::sync::CancellationToken;
pub use warm_model::{Outcome, Progress, RunConfig, RunError, RunState};
