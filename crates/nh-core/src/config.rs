//! Run configuration resolved once at startup and passed explicitly
//! into the extractor and renderer. Never mutated after creation.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Immutable run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of histogram bins.
    pub bins: u32,
    /// Output image path; format inferred from the file extension.
    pub save: Option<PathBuf>,
    /// Open the rendered image in the system viewer.
    pub show: bool,
    /// Append a sample-count/statistics line to the title.
    pub add_n: bool,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Plot title.
    pub title: String,
    /// Report unparsable tokens on stderr.
    pub report_non_numeric: bool,
    /// Echo each recognized numeric token to stdout.
    pub print_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bins: 10,
            save: None,
            show: true,
            add_n: false,
            x_label: "Count".into(),
            y_label: "Frequency".into(),
            title: "Histogram".into(),
            report_non_numeric: false,
            print_numbers: false,
        }
    }
}

impl Config {
    /// Pre-flight validation. With neither a save path nor showing
    /// requested there is nothing to do; the run is rejected before any
    /// input is read.
    pub fn validate(&self) -> Result<()> {
        if self.save.is_none() && !self.show {
            return Err(Error::Config(
                "you are neither showing nor saving the histogram... nothing to do".into(),
            ));
        }
        if self.bins == 0 {
            return Err(Error::Config("bins must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_and_validates() {
        let config = Config::default();
        assert!(config.show);
        assert_eq!(config.bins, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn neither_save_nor_show_is_rejected() {
        let config = Config { show: false, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("nothing to do"));
    }

    #[test]
    fn save_without_show_is_accepted() {
        let config =
            Config { show: false, save: Some("out.svg".into()), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_bins_rejected() {
        let config = Config { bins: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
