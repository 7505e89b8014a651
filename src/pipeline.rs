//! The single analyze pass: decode, slice, average, annotate, persist.

use std::path::PathBuf;

use crate::annotate::{AnnotationFont, annotate_region};
use crate::chart::generate_chart;
use crate::error::AnalyzeError;
use crate::intensity::{IntensityVector, region_intensity};
use crate::report::{write_json_report, write_report};
use crate::session::AnalysisSettings;
use crate::slicer::slice_regions;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub values: Vec<IntensityVector>,
    pub annotated_image: PathBuf,
    pub report: PathBuf,
    pub json_report: Option<PathBuf>,
    pub chart: PathBuf,
}

/// Runs the full pipeline for one settings value.
///
/// Everything is created and dropped within this call; the only lasting effects
/// are the output files named in the returned [`AnalysisOutcome`].
pub fn run_analysis(settings: &AnalysisSettings) -> Result<AnalysisOutcome, AnalyzeError> {
    let input = settings.input()?;

    let font = match &settings.font_path {
        Some(path) => AnnotationFont::from_path(path)?,
        None => AnnotationFont::embedded()?,
    };

    let mut image = image::open(input)?.to_rgba8();
    let regions = slice_regions(image.width(), image.height(), settings.num_slices)?;

    let values: Vec<IntensityVector> = regions
        .iter()
        .map(|r| region_intensity(&image, r, settings.channel_mode))
        .collect();

    for (region, v) in regions.iter().zip(&values) {
        let label = format!("P {}", region.index + 1);
        annotate_region(&mut image, region, v, &label, &font);
    }

    let annotated_image = settings.annotated_image_path()?;
    image
        .save(&annotated_image)
        .map_err(|source| AnalyzeError::ImageSave {
            path: annotated_image.clone(),
            source,
        })?;

    let report = settings.report_path()?;
    write_report(&report, &values)?;

    let json_report = if settings.json_report {
        let path = settings.json_report_path()?;
        write_json_report(&path, &values)?;
        Some(path)
    } else {
        None
    };

    generate_chart(&settings.chart_path, &values, &settings.chart_layout)?;

    Ok(AnalysisOutcome {
        values,
        annotated_image,
        report,
        json_report,
        chart: settings.chart_path.clone(),
    })
}
