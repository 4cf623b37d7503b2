//! Morphological-gradient strategy: dilation minus erosion rings object
//! boundaries even when Canny misses a low-contrast edge.

use super::RegionStrategy;
use crate::color::to_grayscale;
use crate::detector::DetectorParams;
use crate::filters::{gaussian_blur, threshold_binary};
use crate::image::{GrayU8, RgbU8};
use crate::morph::{close, dilate, gradient};

const GRADIENT_THRESH: u8 = 30;

pub struct MorphGradient;

impl RegionStrategy for MorphGradient {
    fn name(&self) -> &'static str {
        "morph_gradient"
    }

    fn mask(&self, img: &RgbU8, _params: &DetectorParams) -> GrayU8 {
        let gray = to_grayscale(img);
        let blurred = gaussian_blur(&gray, 7);
        let grad = gradient(&blurred, 5);
        let thresh = threshold_binary(&grad, GRADIENT_THRESH);
        let closed = close(&thresh, 5, 2);
        dilate(&closed, 5, 1)
    }
}
