//! Gradient computation and Canny edge detection.

pub mod canny;
pub mod grad;

pub use self::canny::canny;
pub use self::grad::{sobel_gradients, Gradients};
