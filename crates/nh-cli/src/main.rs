//! numhist CLI

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;

use nh_core::{Config, HistogramArtifact};
use nh_render::config::{resolve_config, RenderConfig};

/// Examine stdin for numbers and plot them in a histogram.
#[derive(Parser)]
#[command(name = "numhist")]
#[command(about = "Examine stdin for numbers and plot them in a histogram")]
#[command(version)]
struct Cli {
    /// The number of bins in the histogram.
    #[arg(long, default_value = "10")]
    bins: u32,

    /// A file name to save an image to (.svg, or .png with the default
    /// build).
    #[arg(long)]
    save: Option<PathBuf>,

    /// If given, do not automatically show the histogram image.
    #[arg(long = "noShow")]
    no_show: bool,

    /// Add n, mean, median, and std to the title.
    #[arg(long = "addN")]
    add_n: bool,

    /// X axis label.
    #[arg(long, default_value = "Count")]
    x: String,

    /// Y axis label.
    #[arg(long, default_value = "Frequency")]
    y: String,

    /// Histogram title.
    #[arg(long, default_value = "Histogram")]
    title: String,

    /// Report input fields that are not numeric.
    #[arg(long = "reportNonNumeric")]
    report_non_numeric: bool,

    /// Print numbers found on standard input, one per line.
    #[arg(long = "printNumbers")]
    print_numbers: bool,

    /// Optional YAML style file overriding render defaults (figure
    /// size, colors, DPI).
    #[arg(long)]
    style: Option<PathBuf>,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            bins: self.bins,
            save: self.save,
            show: !self.no_show,
            add_n: self.add_n,
            x_label: self.x,
            y_label: self.y,
            title: self.title,
            report_non_numeric: self.report_non_numeric,
            print_numbers: self.print_numbers,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let render_config = load_render_config(cli.style.as_deref())?;
    let config = cli.into_config();
    config.validate()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let samples =
        nh_core::extract::extract_samples(stdin.lock(), &config, &mut stdout, &mut stderr)?;
    drop(stdout);
    drop(stderr);
    tracing::info!(samples = samples.len(), "input exhausted");

    let artifact = HistogramArtifact::from_samples(&samples, &config);

    if let Some(path) = &config.save {
        nh_render::render_to_file(&artifact, &render_config, path)
            .with_context(|| format!("failed to save image to {}", path.display()))?;
        tracing::info!(path = %path.display(), "image saved");
    }

    if config.show {
        let path = match &config.save {
            Some(p) => p.clone(),
            None => {
                let p = temp_image_path();
                nh_render::render_to_file(&artifact, &render_config, &p)?;
                p
            }
        };
        show_image(&path)?;
    }

    Ok(())
}

fn load_render_config(style: Option<&Path>) -> Result<RenderConfig> {
    let yaml = match style {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read style file {}", path.display()))?,
        ),
        None => None,
    };
    Ok(resolve_config(yaml.as_deref())?)
}

fn temp_image_path() -> PathBuf {
    std::env::temp_dir().join(format!("numhist-{}.svg", std::process::id()))
}

/// Launch the platform image viewer on `path` and wait for it to exit.
/// Failures (no viewer, no display) propagate.
fn show_image(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = Command::new("open");
        c.arg("-W").arg(path);
        c
    };
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.arg("/C").arg("start").arg("/WAIT").arg("").arg(path);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    tracing::debug!(path = %path.display(), "launching image viewer");
    let status = cmd
        .status()
        .with_context(|| format!("failed to launch image viewer for {}", path.display()))?;
    anyhow::ensure!(status.success(), "image viewer exited with {status}");
    Ok(())
}
