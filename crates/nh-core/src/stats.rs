//! Summary statistics over the frozen sample sequence.

use serde::Serialize;

/// Mean, population standard deviation, and median of a sample set.
///
/// All statistics are NaN for an empty sample set; the empty case is
/// not special-cased anywhere downstream.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divide by n).
    pub std_dev: f64,
    /// Median (mean of the two middle values for even n).
    pub median: f64,
}

impl Summary {
    /// Compute statistics in one pass over `samples` (plus a sort for
    /// the median).
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len();
        let n = count as f64;

        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let median = if count == 0 {
            f64::NAN
        } else {
            let mut sorted = samples.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            if count % 2 == 0 {
                0.5 * (sorted[count / 2 - 1] + sorted[count / 2])
            } else {
                sorted[count / 2]
            }
        };

        Self { count, mean, std_dev, median }
    }
}
