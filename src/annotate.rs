//! Draws the per-region bounding box and intensity text onto the source image.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::error::AnalyzeError;
use crate::intensity::IntensityVector;
use crate::slicer::Region;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const STROKE_WIDTH: u32 = 1;

static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// Font used for on-image labels. Defaults to the embedded DejaVu Sans Mono;
/// an external TTF can be supplied instead.
pub struct AnnotationFont {
    font: FontVec,
}

impl AnnotationFont {
    pub fn embedded() -> Result<Self, AnalyzeError> {
        let font = FontVec::try_from_vec(EMBEDDED_FONT.to_vec())
            .map_err(|e| AnalyzeError::FontUnavailable(format!("embedded font: {e}")))?;
        Ok(Self { font })
    }

    pub fn from_path(path: &Path) -> Result<Self, AnalyzeError> {
        let bytes = std::fs::read(path)
            .map_err(|e| AnalyzeError::FontUnavailable(format!("{}: {e}", path.display())))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| AnalyzeError::FontUnavailable(format!("{}: {e}", path.display())))?;
        Ok(Self { font })
    }
}

/// Draws a white full-height outline around `region` and overlays the intensity
/// text block plus `label` in white.
///
/// Font size follows the original layout rule: one percent of the image width,
/// clamped to at least 1px.
pub fn annotate_region(
    image: &mut RgbaImage,
    region: &Region,
    values: &IntensityVector,
    label: &str,
    font: &AnnotationFont,
) {
    let (img_w, img_h) = (image.width(), image.height());
    if region.width == 0 || img_h == 0 {
        return;
    }

    let rect_w = region.width.min(img_w.saturating_sub(region.x));
    if rect_w == 0 {
        return;
    }
    let rect = Rect::at(region.x as i32, 0).of_size(rect_w, img_h);
    draw_hollow_rect_mut(image, rect, WHITE);

    let font_size = (img_w / 100).max(1) as f32;
    let scale = PxScale::from(font_size);
    let line_step = font_size.ceil() as i32 + 4;

    let [c, m, y, k] = values.0;
    let lines = [
        format!("C: {c}"),
        format!("M: {m}"),
        format!("Y: {y}"),
        format!("K: {k}"),
        String::new(),
        label.to_string(),
    ];

    let text_x = (region.x + STROKE_WIDTH) as i32;
    let mut text_y = STROKE_WIDTH as i32;
    for line in &lines {
        if !line.is_empty() {
            draw_text_mut(image, WHITE, text_x, text_y, scale, &font.font, line);
        }
        text_y += line_step;
    }
}
