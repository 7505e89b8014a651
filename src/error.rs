use std::path::PathBuf;

/// Errors that can occur during a strip analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("no input image selected")]
    NoInputSelected,

    #[error("invalid slice count {requested} for an image {width}px wide")]
    InvalidSliceCount { requested: u32, width: u32 },

    #[error("failed to decode input image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("failed to save annotated image {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("annotation font unavailable: {0}")]
    FontUnavailable(String),

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize analysis values: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chart generation failed: {0}")]
    Chart(#[from] oxidize_pdf::PdfError),
}
