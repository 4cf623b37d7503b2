//! Smoothing and thresholding primitives shared by the region strategies.

pub mod blur;
pub mod threshold;

pub use self::blur::gaussian_blur;
pub use self::threshold::{adaptive_gaussian_threshold, threshold_binary};
