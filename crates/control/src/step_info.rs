//! Summary figures of a sampled step response.

use serde::{Deserialize, Serialize};

use crate::TimeResponse;

/// Band around the final value used for the settling time.
pub const SETTLING_BAND: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Value the response settles to.
    pub final_value: f64,
    /// Largest sample, in the direction of the final value.
    pub peak: f64,
    pub peak_time: f64,
    /// Overshoot past the final value, in percent (0 when there is none).
    pub overshoot_percent: f64,
    /// Time from 10 % to 90 % of the final value.
    pub rise_time: Option<f64>,
    /// First time after which the response stays within 2 % of the final value.
    pub settling_time: Option<f64>,
}

impl StepInfo {
    /// Summarizes `response` against `final_value`, typically the DC gain.
    ///
    /// Returns `None` for an empty response.
    pub fn from_response(response: &TimeResponse, final_value: f64) -> Option<Self> {
        if response.is_empty() {
            return None;
        }
        let sign = if final_value < 0.0 { -1.0 } else { 1.0 };

        let (peak_index, _) = response
            .output
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best_i, best), (i, &y)| {
                if sign * y > best { (i, sign * y) } else { (best_i, best) }
            });
        let peak = response.output[peak_index];
        let peak_time = response.time[peak_index];

        let overshoot_percent = if final_value != 0.0 {
            ((peak - final_value) / final_value * 100.0).max(0.0)
        } else {
            0.0
        };

        let rise_time = if final_value != 0.0 {
            let crossing = |fraction: f64| {
                response
                    .points()
                    .find(|&(_, y)| sign * y >= sign * fraction * final_value)
                    .map(|(t, _)| t)
            };
            match (crossing(0.1), crossing(0.9)) {
                (Some(low), Some(high)) => Some(high - low),
                _ => None,
            }
        } else {
            None
        };

        let band = SETTLING_BAND * final_value.abs();
        let last_outside = response
            .output
            .iter()
            .rposition(|&y| (y - final_value).abs() > band);
        let settling_time = match last_outside {
            None => Some(response.time[0]),
            Some(i) if i + 1 < response.len() => Some(response.time[i + 1]),
            Some(_) => None,
        };

        Some(StepInfo {
            final_value,
            peak,
            peak_time,
            overshoot_percent,
            rise_time,
            settling_time,
        })
    }
}
