//! Per-run settings and derived output paths.
//!
//! One `AnalysisSettings` value is built per analysis run and threaded through
//! the pipeline; nothing is shared across runs.

use std::path::{Path, PathBuf};

use crate::chart::ChartLayout;
use crate::error::AnalyzeError;
use crate::intensity::ChannelMode;

pub const DEFAULT_SLICES: u32 = 32;
pub const DEFAULT_CHART_PATH: &str = "output_analysis.pdf";

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub input: Option<PathBuf>,
    pub num_slices: u32,
    pub channel_mode: ChannelMode,
    pub chart_layout: ChartLayout,
    pub chart_path: PathBuf,
    /// External TTF for the on-image labels; the embedded font is used when unset.
    pub font_path: Option<PathBuf>,
    /// Also write a JSON sidecar next to the text report.
    pub json_report: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            input: None,
            num_slices: DEFAULT_SLICES,
            channel_mode: ChannelMode::default(),
            chart_layout: ChartLayout::default(),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            font_path: None,
            json_report: false,
        }
    }
}

impl AnalysisSettings {
    pub fn for_input(input: PathBuf) -> Self {
        Self {
            input: Some(input),
            ..Self::default()
        }
    }

    pub fn input(&self) -> Result<&Path, AnalyzeError> {
        self.input.as_deref().ok_or(AnalyzeError::NoInputSelected)
    }

    /// `photo.png` -> `photo_output.png`
    pub fn annotated_image_path(&self) -> Result<PathBuf, AnalyzeError> {
        Ok(insert_suffix(self.input()?, "_output"))
    }

    /// `photo.png` -> `photo_output_analysis.png.txt`
    pub fn report_path(&self) -> Result<PathBuf, AnalyzeError> {
        let mut path = insert_suffix(self.input()?, "_output_analysis").into_os_string();
        path.push(".txt");
        Ok(PathBuf::from(path))
    }

    /// `photo.png` -> `photo_output_analysis.png.json`
    pub fn json_report_path(&self) -> Result<PathBuf, AnalyzeError> {
        let mut path = insert_suffix(self.input()?, "_output_analysis").into_os_string();
        path.push(".json");
        Ok(PathBuf::from(path))
    }
}

/// Inserts `suffix` before the final extension dot; appends it when the path
/// has no extension. Only the last dot is touched, so multi-dot names survive.
fn insert_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let ext = path.extension().and_then(|e| e.to_str());
    match (stem, ext) {
        (Some(stem), Some(ext)) => path.with_file_name(format!("{stem}{suffix}.{ext}")),
        _ => {
            let mut out = path.as_os_str().to_os_string();
            out.push(suffix);
            PathBuf::from(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_output_paths_from_input() {
        let s = AnalysisSettings::for_input(PathBuf::from("/data/photo.png"));
        assert_eq!(
            s.annotated_image_path().unwrap(),
            PathBuf::from("/data/photo_output.png")
        );
        assert_eq!(
            s.report_path().unwrap(),
            PathBuf::from("/data/photo_output_analysis.png.txt")
        );
        assert_eq!(
            s.json_report_path().unwrap(),
            PathBuf::from("/data/photo_output_analysis.png.json")
        );
    }

    #[test]
    fn multi_dot_names_keep_earlier_dots() {
        let s = AnalysisSettings::for_input(PathBuf::from("scan.v2.tiff"));
        assert_eq!(
            s.annotated_image_path().unwrap(),
            PathBuf::from("scan.v2_output.tiff")
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let s = AnalysisSettings::default();
        assert!(matches!(s.input(), Err(AnalyzeError::NoInputSelected)));
        assert!(matches!(
            s.report_path(),
            Err(AnalyzeError::NoInputSelected)
        ));
    }
}
