pub mod algorithms;
pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod output;
pub mod pool;
pub mod state;
pub mod workload;

pub use engine::simulate;
pub use error::{Error, ErrorKind, Result};
pub use models::{AlgoConfig, Process};
pub use state::{ExecutedSegment, ProcessMetric, ScheduleResult};
