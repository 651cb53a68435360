use nh_core::HistogramArtifact;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

/// Render a histogram artifact: bin bars, reference lines at the mean
/// (solid) and median (dotted), axis labels, and the title block.
pub fn render(artifact: &HistogramArtifact, config: &RenderConfig) -> crate::Result<String> {
    let n_bins = artifact.counts.len();
    let mut canvas = Canvas::new(config.figure.width, config.figure.height);

    let x_min = artifact.bin_edges.first().copied().unwrap_or(0.0);
    let x_max = artifact.bin_edges.last().copied().unwrap_or(1.0);
    let max_count = artifact.counts.iter().copied().max().unwrap_or(0) as f64;
    // 10% headroom above the tallest bar; empty histograms still get a frame.
    let y_max = if max_count > 0.0 { max_count * 1.1 } else { 1.0 };

    let x_axis = Axis::auto_linear(x_min, x_max, 6).with_label(&artifact.x_label);
    let y_axis = Axis::auto_linear(0.0, y_max, 5).with_label(&artifact.y_label);

    let area = PlotArea::auto(Some(&y_axis), Some(&x_axis), artifact.title.len(), config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    canvas.push_clip(area.left, area.top, area.width, area.height);

    // Bin bars
    let bar_style = Style {
        fill: Some(config.colors.bars),
        stroke: Some(config.colors.bars),
        stroke_width: 0.5,
        opacity: 1.0,
    };
    for bi in 0..n_bins {
        if artifact.counts[bi] == 0 {
            continue;
        }
        let px_lo = x_axis.data_to_pixel(artifact.bin_edges[bi], area.left, area.right());
        let px_hi = x_axis.data_to_pixel(artifact.bin_edges[bi + 1], area.left, area.right());
        let py_base = y_axis.data_to_pixel(0.0, area.bottom(), area.top);
        let py_top =
            y_axis.data_to_pixel(artifact.counts[bi] as f64, area.bottom(), area.top);
        canvas.rect(px_lo, py_top, px_hi - px_lo, py_base - py_top, &bar_style);
    }

    // Reference lines at the mean and median, visually distinguished.
    // Non-finite positions (empty input) are not drawn.
    let mean = artifact.summary.mean;
    if mean.is_finite() {
        let px = x_axis.data_to_pixel(mean, area.left, area.right());
        canvas.line(
            px,
            area.top,
            px,
            area.bottom(),
            &LineStyle::solid(config.colors.mean_line, 1.0),
        );
    }
    let median = artifact.summary.median;
    if median.is_finite() {
        let px = x_axis.data_to_pixel(median, area.left, area.right());
        canvas.line(
            px,
            area.top,
            px,
            area.bottom(),
            &LineStyle::dotted(config.colors.median_line, 1.0),
        );
    }

    canvas.pop_clip();

    // Title block, centered above the plot area.
    let title_style = TextStyle {
        size: config.font.title_size,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };
    let line_height = config.font.title_size * 1.4;
    for (i, line) in artifact.title.iter().enumerate() {
        canvas.text(
            area.left + area.width / 2.0,
            6.0 + i as f64 * line_height,
            line,
            &title_style,
        );
    }

    Ok(canvas.finish_svg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_core::Config;

    fn render_samples(samples: &[f64], config: &Config) -> String {
        let artifact = HistogramArtifact::from_samples(samples, config);
        render(&artifact, &RenderConfig::default()).unwrap()
    }

    #[test]
    fn bars_and_reference_lines_present() {
        let svg = render_samples(&[1.0, 2.0, 2.0, 3.0, 4.0], &Config::default());
        // Bars use the default matplotlib-blue fill.
        assert!(svg.contains("#1f77b4"));
        // Mean line (solid light gray) and median line (dotted darker gray).
        assert!(svg.contains("#aaaaaa"));
        assert!(svg.contains("#999999"));
        assert!(svg.contains("stroke-dasharray=\"2 2\""));
    }

    #[test]
    fn labels_and_title_rendered() {
        let config = Config {
            x_label: "Latency".into(),
            y_label: "Hits".into(),
            title: "Service latency".into(),
            ..Default::default()
        };
        let svg = render_samples(&[1.0, 2.0, 3.0], &config);
        assert!(svg.contains(">Latency</text>"));
        assert!(svg.contains(">Hits</text>"));
        assert!(svg.contains(">Service latency</text>"));
    }

    #[test]
    fn add_n_title_line_appears() {
        let config = Config { add_n: true, ..Default::default() };
        let svg = render_samples(&[1.0, 2.0, 3.0, 4.0, 5.0], &config);
        assert!(svg.contains("n=5, mean=3.00, median=3.00, std=1.41"));
    }

    #[test]
    fn empty_input_renders_frame_without_reference_lines() {
        let svg = render_samples(&[], &Config::default());
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("#aaaaaa"));
        assert!(!svg.contains("#1f77b4"));
    }

    #[test]
    fn single_sample_renders() {
        let svg = render_samples(&[42.0], &Config::default());
        assert!(svg.contains("#1f77b4"));
        assert!(svg.contains("#aaaaaa"));
    }
}
