//! Slices an image into vertical strips, averages per-channel intensity per
//! strip, annotates the image, and emits a text report plus a PDF strip chart.

pub mod annotate;
pub mod chart;
pub mod error;
pub mod intensity;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod slicer;

pub use error::AnalyzeError;
pub use pipeline::{AnalysisOutcome, run_analysis};
pub use session::AnalysisSettings;
