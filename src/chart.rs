//! Renders the single-page PDF strip chart.

use std::path::Path;

use oxidize_pdf::{Color, Document, Font, Page};

use crate::error::AnalyzeError;
use crate::intensity::{IntensityVector, cmyk_to_rgb};

/// 1 inch = 25.4 mm = 72 points.
pub const MM_TO_POINTS: f64 = 2.83465;

const DEFAULT_WIDTH_MM: f64 = 1410.0;
const DEFAULT_HEIGHT_MM: f64 = 100.0;
const DEFAULT_FONT_SIZE: f64 = 20.0;
const LINE_STEP: f64 = 15.0;
const TEXT_INSET: f64 = 5.0;

/// Page geometry for the strip chart, in millimeters.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    pub font_size: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_WIDTH_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Text fill palette for the five lines of each column: full cyan, magenta,
/// yellow, then black for the K value and the slice label.
const TEXT_PALETTE: [(f64, f64, f64, f64); 5] = [
    (100.0, 0.0, 0.0, 0.0),
    (0.0, 100.0, 0.0, 0.0),
    (0.0, 0.0, 100.0, 0.0),
    (0.0, 0.0, 0.0, 100.0),
    (0.0, 0.0, 0.0, 100.0),
];

fn palette_color(index: usize) -> Color {
    let (c, m, y, k) = TEXT_PALETTE[index];
    let (r, g, b) = cmyk_to_rgb(c, m, y, k);
    Color::rgb(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    )
}

/// Draws one outlined column per slice with its five text lines and writes the
/// document to `path`. The page is written once and never re-opened.
///
/// Columns use the same width policy as the image slicer: base width from floor
/// division, last column extended to the page edge.
pub fn generate_chart(
    path: &Path,
    values: &[IntensityVector],
    layout: &ChartLayout,
) -> Result<(), AnalyzeError> {
    let page_width = layout.width_mm * MM_TO_POINTS;
    let page_height = layout.height_mm * MM_TO_POINTS;

    let mut doc = Document::new();
    doc.set_title("Slice Intensity Chart");

    let mut page = Page::new(page_width, page_height);

    let count = values.len();
    let column_width = if count > 0 {
        (page_width / count as f64).floor()
    } else {
        page_width
    };

    for (i, v) in values.iter().enumerate() {
        let x = i as f64 * column_width;
        let w = if i + 1 == count {
            page_width - x
        } else {
            column_width
        };

        // Unfilled column outline.
        page.graphics()
            .set_stroke_color(Color::black())
            .set_line_width(1.0)
            .move_to(x, 0.0)
            .line_to(x + w, 0.0)
            .line_to(x + w, page_height)
            .line_to(x, page_height)
            .line_to(x, 0.0)
            .stroke();

        let [c, m, y, k] = v.0;
        let lines = [
            format!("C: {c}"),
            format!("M: {m}"),
            format!("Y: {y}"),
            format!("K: {k}"),
            format!("Slice {}", i + 1),
        ];

        // Lines stack upward from the vertical center, colored from the palette.
        let base_y = page_height / 2.0;
        for (j, line) in lines.iter().enumerate() {
            page.text()
                .set_font(Font::Helvetica, layout.font_size)
                .set_fill_color(palette_color(j))
                .at(x + TEXT_INSET, base_y + j as f64 * LINE_STEP)
                .write(line)?;
        }
    }

    doc.add_page(page);
    let path_str = path.to_string_lossy();
    doc.save(path_str.as_ref())?;

    Ok(())
}
