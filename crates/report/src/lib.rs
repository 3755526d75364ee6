#![deny(clippy::all, clippy::pedantic)]

//! Formats and forwards the metrics a PPO training loop emits once per
//! iteration. The training loop itself lives elsewhere; this crate only
//! turns its report into console groups, debug strings, and logger calls.

pub mod format;
pub mod groups;
pub mod logger;
pub mod record;

use thiserror::Error;

pub use format::{format_debug_string, NumberFormat};
pub use groups::printable_groups;
pub use logger::{BufferedLogger, MetricsLogger, TracingLogger};
pub use record::{MetricValue, Number, Report};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("missing metric key: {0}")]
    MissingKey(String),
}

/// Forwards the loggable metrics to the logger, if one is attached.
///
/// The logger receives `loggable_metrics` unchanged, exactly once. With no
/// logger this is a no-op. `debug_metrics` is reserved for callers that
/// format it separately and is currently unused.
pub fn report_metrics(
    loggable_metrics: &Report,
    _debug_metrics: &Report,
    logger: Option<&mut dyn MetricsLogger>,
) {
    if let Some(logger) = logger {
        logger.log(loggable_metrics);
    }
}
