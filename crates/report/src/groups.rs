//! Console grouping of the per-iteration PPO metrics.

use crate::record::Report;
use crate::ReportError;

// One slice per console block, printed top to bottom.
const GROUP_LAYOUT: [&[&str]; 6] = [
    &["Policy Reward", "Policy Entropy", "Value Function Loss"],
    &[
        "Mean KL Divergence",
        "SB3 Clip Fraction",
        "Policy Update Magnitude",
        "Value Function Update Magnitude",
    ],
    &["Collected Steps per Second", "Overall Steps per Second"],
    &[
        "Timestep Collection Time",
        "Timestep Consumption Time",
        "PPO Batch Consumption Time",
        "Total Iteration Time",
    ],
    &["Cumulative Model Updates", "Cumulative Timesteps"],
    &["Timesteps Collected"],
];

/// Splits an iteration report into the six fixed console groups: losses,
/// divergence and clipping, throughput, timings, cumulative counters, and
/// the per-iteration step count.
///
/// Values are cloned out of the source report; the source is not consumed.
///
/// # Errors
///
/// Returns [`ReportError::MissingKey`] if the report lacks any of the keys a
/// group refers to. Nothing is substituted for an absent metric.
pub fn printable_groups(report: &Report) -> Result<Vec<Report>, ReportError> {
    GROUP_LAYOUT
        .iter()
        .map(|keys| {
            keys.iter()
                .map(|&key| {
                    report
                        .get(key)
                        .cloned()
                        .map(|value| (key.to_string(), value))
                        .ok_or_else(|| ReportError::MissingKey(key.to_string()))
                })
                .collect::<Result<Report, ReportError>>()
        })
        .collect()
}
