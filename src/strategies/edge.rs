//! Plain edge-detection strategy: blur and Canny with the configured
//! thresholds.

use super::RegionStrategy;
use crate::color::to_grayscale;
use crate::detector::DetectorParams;
use crate::edges::canny;
use crate::filters::gaussian_blur;
use crate::image::{GrayU8, RgbU8};
use crate::morph::dilate;

pub struct PlainEdges;

impl RegionStrategy for PlainEdges {
    fn name(&self) -> &'static str {
        "plain_edges"
    }

    fn mask(&self, img: &RgbU8, params: &DetectorParams) -> GrayU8 {
        let gray = to_grayscale(img);
        let blurred = gaussian_blur(&gray, 5);
        let edges = canny(&blurred, params.canny_low as f32, params.canny_high as f32);
        dilate(&edges, 3, 2)
    }
}
