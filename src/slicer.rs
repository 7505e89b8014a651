//! Partitions an image into equal-width vertical regions.

use crate::error::AnalyzeError;

/// A contiguous vertical slice of an image, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub index: u32,
    pub x: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn center_x(&self) -> u32 {
        self.x + self.width / 2
    }
}

/// Splits a `width` x `height` image into `count` vertical regions.
///
/// The base slice width is `width / count`; the last region is extended to the
/// right edge so the regions cover every pixel column and their widths sum to
/// exactly `width`.
pub fn slice_regions(width: u32, height: u32, count: u32) -> Result<Vec<Region>, AnalyzeError> {
    if count == 0 || count > width {
        return Err(AnalyzeError::InvalidSliceCount {
            requested: count,
            width,
        });
    }

    let slice_width = width / count;
    let mut regions = Vec::with_capacity(count as usize);
    for i in 0..count {
        let x = i * slice_width;
        let w = if i + 1 == count {
            // Remainder columns from the floor division go to the last region.
            width - x
        } else {
            slice_width
        };
        regions.push(Region {
            index: i,
            x,
            width: w,
            height,
        });
    }

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_cover_image_exactly() {
        let regions = slice_regions(317, 40, 6).expect("slicing failed");
        assert_eq!(regions.len(), 6);
        assert_eq!(regions.iter().map(|r| r.width).sum::<u32>(), 317);
        for pair in regions.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }
        assert_eq!(regions.last().unwrap().x + regions.last().unwrap().width, 317);
    }

    #[test]
    fn rejects_zero_and_oversized_counts() {
        assert!(matches!(
            slice_regions(100, 10, 0),
            Err(AnalyzeError::InvalidSliceCount { requested: 0, .. })
        ));
        assert!(matches!(
            slice_regions(100, 10, 101),
            Err(AnalyzeError::InvalidSliceCount { requested: 101, .. })
        ));
        assert!(slice_regions(100, 10, 100).is_ok());
    }
}
