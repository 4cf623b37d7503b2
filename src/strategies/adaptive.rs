//! Adaptive-threshold strategy: local binarization copes with uneven
//! illumination that defeats a single global cutoff.

use super::RegionStrategy;
use crate::color::to_grayscale;
use crate::detector::DetectorParams;
use crate::edges::canny;
use crate::filters::{adaptive_gaussian_threshold, gaussian_blur};
use crate::image::{GrayU8, RgbU8};
use crate::morph::{dilate, erode};

const BLOCK_SIZE: usize = 11;
const MEAN_OFFSET: i16 = 2;

pub struct AdaptiveThreshold;

impl RegionStrategy for AdaptiveThreshold {
    fn name(&self) -> &'static str {
        "adaptive_threshold"
    }

    fn mask(&self, img: &RgbU8, _params: &DetectorParams) -> GrayU8 {
        let gray = to_grayscale(img);
        let blurred = gaussian_blur(&gray, 5);
        let thresh = adaptive_gaussian_threshold(&blurred, BLOCK_SIZE, MEAN_OFFSET);

        let edges = canny(&thresh, 50.0, 150.0);
        // Dilate twice to consolidate the doubled borders the threshold
        // produces, erode once to thin them back.
        erode(&dilate(&edges, 5, 2), 5, 1)
    }
}
