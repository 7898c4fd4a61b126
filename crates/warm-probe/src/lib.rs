mod error;
pub use error::ProbeError;

mod config;
pub use config::ProbeConfig;

mod prober;
pub use prober::Prober;

pub mod http;
pub use http::HttpProber;

pub mod r#fn;
pub use r#fn::FnProber;

