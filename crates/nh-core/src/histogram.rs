//! Equal-width histogram binning and the plot-friendly artifact.
//!
//! The artifact carries everything the renderer needs, fully resolved
//! from the sample sequence and the run configuration: bin edges,
//! per-bin counts, summary statistics, labels, and title lines.

use serde::Serialize;

use crate::config::Config;
use crate::stats::Summary;

/// Plot-friendly histogram record.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramArtifact {
    /// `bins + 1` edges, ascending.
    pub bin_edges: Vec<f64>,
    /// Per-bin sample counts.
    pub counts: Vec<u64>,
    /// Summary statistics over the full sample sequence.
    pub summary: Summary,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Title lines: one, or two when the statistics line is enabled.
    pub title: Vec<String>,
}

impl HistogramArtifact {
    /// Build the artifact from the frozen sample sequence.
    pub fn from_samples(samples: &[f64], config: &Config) -> Self {
        let summary = Summary::from_samples(samples);
        let (bin_edges, counts) = bin_samples(samples, config.bins as usize);

        let mut title = vec![config.title.clone()];
        if config.add_n {
            title.push(format!(
                "n={}, mean={:.2}, median={:.2}, std={:.2}",
                summary.count, summary.mean, summary.median, summary.std_dev
            ));
        }

        Self {
            bin_edges,
            counts,
            summary,
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            title,
        }
    }
}

/// Equal-width bins over the observed [min, max]; the final bin is
/// closed on the right, so a sample equal to max lands in it.
///
/// Degenerate ranges widen to [v - 0.5, v + 0.5] and an empty sample
/// set bins over [0, 1] with zero counts, mirroring numpy's
/// `np.histogram` fallbacks that the original tool relied on.
fn bin_samples(samples: &[f64], bins: usize) -> (Vec<f64>, Vec<u64>) {
    let bins = bins.max(1);

    let (mut lo, mut hi) = if samples.is_empty() {
        (0.0, 1.0)
    } else {
        // f64::min/max skip NaN operands.
        let lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    };
    if !lo.is_finite() || !hi.is_finite() {
        lo = 0.0;
        hi = 1.0;
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let bin_edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0u64; bins];
    for &v in samples {
        if !v.is_finite() || v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    (bin_edges, counts)
}
