//! Sinks that receive the loggable metrics of an iteration.

use crate::format::{format_debug_string, NumberFormat};
use crate::record::Report;

/// External sink for iteration reports.
///
/// Implementations receive the loggable mapping verbatim; what they do with
/// it (console, experiment tracker, visualization backend) is up to them.
pub trait MetricsLogger {
    fn log(&mut self, report: &Report);
}

/// Logger that renders each report and emits it as a `tracing` info event.
pub struct TracingLogger {
    fmt: NumberFormat,
}

impl TracingLogger {
    #[must_use]
    pub fn new(fmt: NumberFormat) -> Self {
        Self { fmt }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(NumberFormat::default())
    }
}

impl MetricsLogger for TracingLogger {
    fn log(&mut self, report: &Report) {
        let rendered = format_debug_string(report, &self.fmt);
        tracing::info!("iteration metrics\n{}", rendered.trim_end());
    }
}

/// Logger that keeps every report it receives in memory.
///
/// Useful as a test double and for callers that want to inspect the reports
/// of a run after the fact.
#[derive(Debug, Default)]
pub struct BufferedLogger {
    reports: Vec<Report>,
}

impl BufferedLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every report received so far, oldest first.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }
}

impl MetricsLogger for BufferedLogger {
    fn log(&mut self, report: &Report) {
        self.reports.push(report.clone());
    }
}
