pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;

use std::path::Path;

use thiserror::Error;

use config::RenderConfig;
use nh_core::HistogramArtifact;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("style error: {0}")]
    Style(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render a histogram artifact to an SVG string.
pub fn render_svg(artifact: &HistogramArtifact, config: &RenderConfig) -> Result<String> {
    plots::histogram::render(artifact, config)
}

/// Render a histogram artifact to bytes in the specified format.
pub fn render_to_bytes(
    artifact: &HistogramArtifact,
    config: &RenderConfig,
    format: &str,
) -> Result<Vec<u8>> {
    let svg = render_svg(artifact, config)?;
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        other => Err(RenderError::UnsupportedFormat(other.to_string())),
    }
}

/// Render a histogram artifact to a file (format inferred from the
/// extension; paths without one fall back to SVG).
pub fn render_to_file(
    artifact: &HistogramArtifact,
    config: &RenderConfig,
    path: &Path,
) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "svg".into());
    match ext.as_str() {
        "svg" => output::svg::save_svg(&render_svg(artifact, config)?, path),
        other => {
            let bytes = render_to_bytes(artifact, config, other)?;
            std::fs::write(path, bytes)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_core::Config;

    fn artifact() -> HistogramArtifact {
        HistogramArtifact::from_samples(&[1.0, 2.0, 2.0, 3.0], &Config::default())
    }

    #[test]
    fn svg_bytes_round_trip() {
        let bytes = render_to_bytes(&artifact(), &RenderConfig::default(), "svg").unwrap();
        let svg = String::from_utf8(bytes).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = render_to_bytes(&artifact(), &RenderConfig::default(), "bmp").unwrap_err();
        assert!(err.to_string().contains("bmp"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = RenderConfig::default();
        let a = render_svg(&artifact(), &config).unwrap();
        let b = render_svg(&artifact(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_bytes_have_signature() {
        let bytes = render_to_bytes(&artifact(), &RenderConfig::default(), "png").unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
