//! Bright-region strategy: exploit the light colouring of typical card
//! stock against darker backgrounds.

use super::RegionStrategy;
use crate::color::lab_lightness;
use crate::detector::DetectorParams;
use crate::edges::canny;
use crate::filters::threshold_binary;
use crate::image::{GrayU8, RgbU8};
use crate::morph::{close, dilate, open};

/// Lightness cutoff above which a pixel counts as "card-coloured".
const LIGHTNESS_THRESH: u8 = 180;

/// Mask-boundary edges need no tuning: the cleaned mask is binary, so the
/// step is always strong.
const MASK_CANNY_LOW: f32 = 50.0;
const MASK_CANNY_HIGH: f32 = 150.0;

pub struct BrightRegion;

impl RegionStrategy for BrightRegion {
    fn name(&self) -> &'static str {
        "bright_region"
    }

    fn mask(&self, img: &RgbU8, _params: &DetectorParams) -> GrayU8 {
        let lightness = lab_lightness(img);
        let bright = threshold_binary(&lightness, LIGHTNESS_THRESH);

        // Close pinholes from printed text, then open away speckle.
        let cleaned = open(&close(&bright, 7, 3), 7, 2);

        let edges = canny(&cleaned, MASK_CANNY_LOW, MASK_CANNY_HIGH);
        dilate(&edges, 7, 2)
    }
}
