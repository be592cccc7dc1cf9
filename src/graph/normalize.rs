//! Min-max normalization of raw relation metrics

use itertools::{Itertools, MinMaxResult};

/// Rescale a sequence of raw counts into [0, 1] via linear min-max scaling.
///
/// When every value is identical (including the all-zero case) there is no
/// discriminating signal in the metric and every output is 0, which also
/// avoids a division by zero.
pub fn min_max_normalize(values: &[u64]) -> Vec<f64> {
    match values.iter().minmax() {
        MinMaxResult::NoElements => Vec::new(),
        MinMaxResult::OneElement(_) => vec![0.0],
        MinMaxResult::MinMax(&min, &max) => {
            if min == max {
                return vec![0.0; values.len()];
            }
            let range = (max - min) as f64;
            values
                .iter()
                .map(|&w| (w - min) as f64 / range)
                .collect()
        }
    }
}
