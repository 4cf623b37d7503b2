//! Parameter types configuring the detection funnel.
//!
//! Defaults match well-lit handheld photos of standard business cards. For
//! tuning, start with the area-ratio bounds (how much of the frame the card
//! is expected to fill) before touching the Canny thresholds.

/// Detector-wide configuration, immutable after construction.
#[derive(Clone, Debug)]
pub struct DetectorParams {
    /// Minimum card area as a fraction of the image area.
    pub min_area_ratio: f64,
    /// Maximum card area as a fraction of the image area.
    pub max_area_ratio: f64,
    /// Lower hysteresis threshold for the plain Canny strategy.
    pub canny_low: u16,
    /// Upper hysteresis threshold for the plain Canny strategy.
    pub canny_high: u16,
    /// Polygon-approximation tolerance as a fraction of contour perimeter.
    pub epsilon_factor: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_area_ratio: 0.05,
            max_area_ratio: 0.85,
            canny_low: 50,
            canny_high: 150,
            epsilon_factor: 0.02,
        }
    }
}

/// Longest side above which the analysis input is downscaled.
pub const MAX_PROCESS_DIM: usize = 1500;

/// Longest side allowed for the rectified output handed to recognition.
pub const MAX_OCR_DIM: usize = 2000;
