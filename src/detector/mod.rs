//! Card detector orchestrating the detect-and-rectify pipeline.
//!
//! Overview
//! - Downscales oversized inputs to a bounded analysis resolution, tracking
//!   the scale factor so geometry maps back to source resolution.
//! - Runs the region-candidate strategies in fixed priority order; each
//!   produces a binary mask from which external contours are traced and the
//!   best convex quadrilateral is selected.
//! - The first accepted quadrilateral is rescaled to source coordinates and
//!   rectified with a projective warp; the result is clamped to the OCR size
//!   bound.
//! - When every strategy fails, an optional fallback returns a resized copy
//!   of the original instead of nothing.
//!
//! Modules
//! - [`params`] – configuration types and the processing size bounds.
//! - `pipeline` – the main [`CardDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{DetectorParams, MAX_OCR_DIM, MAX_PROCESS_DIM};
pub use pipeline::CardDetector;
