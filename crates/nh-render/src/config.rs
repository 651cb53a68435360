use serde::Deserialize;

use crate::color::Color;

/// Top-level render configuration (YAML or programmatic).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 460.8,  // 6.4" * 72
            height: 345.6, // 4.8" * 72
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub label_size: f64,
    pub tick_size: f64,
    pub title_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { label_size: 9.0, tick_size: 8.0, title_size: 11.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_length: f64,
    pub minor_tick_length: f64,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_length: 5.0,
            minor_tick_length: 3.0,
            show_top_ticks: false,
            show_right_ticks: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: false, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Bin bar fill.
    pub bars: Color,
    /// Solid reference line at the mean.
    pub mean_line: Color,
    /// Dotted reference line at the median.
    pub median_line: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            bars: Color::hex("#1f77b4"),
            mean_line: Color::hex("#aaa"),
            median_line: Color::hex("#999"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Raster DPI for PNG output (SVG coordinates are 72 dpi points).
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dpi: 144 }
    }
}

/// Resolve a RenderConfig from an optional YAML string; user keys
/// override the defaults.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<RenderConfig> {
    match user_yaml {
        None => Ok(RenderConfig::default()),
        Some(yaml) => {
            let config: RenderConfig = serde_yaml_ng::from_str(yaml)
                .map_err(|e| crate::RenderError::Style(e.to_string()))?;
            Ok(config)
        }
    }
}
