//! Owned pixel buffers used throughout the detection pipeline.
//!
//! Two row-major layouts cover every stage: [`RgbU8`] for decoded photos and
//! warped output, [`GrayU8`] for grayscale planes and binary masks (0/255).

pub mod gray;
pub mod io;
pub mod resize;
pub mod rgb;

pub use self::gray::GrayU8;
pub use self::resize::{resize_area_gray, resize_area_rgb};
pub use self::rgb::RgbU8;
