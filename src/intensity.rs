//! Per-region channel averaging and color-space conversion.

use image::RgbaImage;
use serde::Serialize;

use crate::slicer::Region;

/// Per-channel mean intensity of a region, rescaled from 0..=255 to 0..=100.
///
/// In [`ChannelMode::Raw`] the channel order is R, G, B, A as decoded; in
/// [`ChannelMode::Cmyk`] the values are true cyan/magenta/yellow/black
/// percentages of the region's mean color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntensityVector(pub [u8; 4]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Average the decoded RGBA channels directly.
    #[default]
    Raw,
    /// Convert the region's mean RGB color to CMYK percentages.
    Cmyk,
}

/// Computes the intensity vector for one region. Pure; does not touch pixels
/// outside the region.
pub fn region_intensity(image: &RgbaImage, region: &Region, mode: ChannelMode) -> IntensityVector {
    let mut sums = [0u64; 4];
    let mut count = 0u64;

    let x_end = (region.x + region.width).min(image.width());
    let y_end = region.height.min(image.height());
    for y in 0..y_end {
        for x in region.x..x_end {
            let px = image.get_pixel(x, y);
            for c in 0..4 {
                sums[c] += u64::from(px[c]);
            }
            count += 1;
        }
    }

    if count == 0 {
        return IntensityVector([0; 4]);
    }

    let means = sums.map(|s| s as f64 / count as f64);
    match mode {
        ChannelMode::Raw => {
            IntensityVector(means.map(|m| (m * 100.0 / 255.0).round() as u8))
        }
        ChannelMode::Cmyk => {
            let (c, m, y, k) = rgb_to_cmyk(means[0], means[1], means[2]);
            IntensityVector([
                c.round() as u8,
                m.round() as u8,
                y.round() as u8,
                k.round() as u8,
            ])
        }
    }
}

/// RGB (0..=255) to CMYK percentages (0..=100).
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let rf = r / 255.0;
    let gf = g / 255.0;
    let bf = b / 255.0;
    let k = 1.0 - rf.max(gf).max(bf);
    if k >= 1.0 {
        return (0.0, 0.0, 0.0, 100.0);
    }
    let c = (1.0 - rf - k) / (1.0 - k);
    let m = (1.0 - gf - k) / (1.0 - k);
    let y = (1.0 - bf - k) / (1.0 - k);
    (c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// CMYK percentages (0..=100) back to RGB (0..=255).
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (u8, u8, u8) {
    let r = 255.0 * (1.0 - c / 100.0) * (1.0 - k / 100.0);
    let g = 255.0 * (1.0 - m / 100.0) * (1.0 - k / 100.0);
    let b = 255.0 * (1.0 - y / 100.0) * (1.0 - k / 100.0);
    (r as u8, g as u8, b as u8)
}
