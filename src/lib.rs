#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod image;
pub mod rectify;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod color;
pub mod contours;
pub mod edges;
pub mod filters;
pub mod morph;
pub mod strategies;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{CardDetector, DetectorParams, MAX_OCR_DIM, MAX_PROCESS_DIM};
pub use crate::types::{DetectionOutcome, Quad};

// Convenience geometry helpers that are generally useful.
pub use crate::rectify::{order_corners, rectify_quad};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use card_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let img = RgbU8::new(w, h);
///
/// let detector = CardDetector::new(DetectorParams::default());
/// let (card, outcome) = detector.detect_from_array_with_report(&img, false);
/// println!(
///     "found={} latency_ms={:.3}",
///     card.is_some(),
///     outcome.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayU8, RgbU8};
    pub use crate::{CardDetector, DetectionOutcome, DetectorParams};
}
