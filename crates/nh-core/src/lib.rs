//! # nh-core
//!
//! Core types for numhist: the run configuration, numeric token
//! extraction from an input stream, summary statistics, and the
//! plot-friendly histogram artifact handed to the renderer.
//!
//! This crate is intentionally dependency-light; rendering lives in
//! `nh-render`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Run configuration resolved once at startup.
pub mod config;

/// Error types for numhist.
pub mod error;

/// Numeric token extraction from an input stream.
pub mod extract;

/// Equal-width histogram binning and the plot-friendly artifact.
pub mod histogram;

/// Summary statistics over the frozen sample sequence.
pub mod stats;

pub use config::Config;
pub use error::{Error, Result};
pub use histogram::HistogramArtifact;
pub use stats::Summary;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
