mod logger;
pub use logger::*;

mod sink;
pub use sink::{LogSink, RunEventKind, message_for};
