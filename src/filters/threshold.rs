//! Global and locally adaptive binarization.

use super::blur::gaussian_blur;
use crate::image::GrayU8;

/// Binary threshold: pixels strictly brighter than `thresh` become 255.
pub fn threshold_binary(src: &GrayU8, thresh: u8) -> GrayU8 {
    let mut out = GrayU8::new(src.w, src.h);
    for (dst, &px) in out.data.iter_mut().zip(src.data.iter()) {
        *dst = if px > thresh { 255 } else { 0 };
    }
    out
}

/// Adaptive threshold against a Gaussian-weighted local mean.
///
/// A pixel is set to 255 when it is brighter than the weighted mean of its
/// `block × block` neighbourhood minus `c`. Weighting the window toward the
/// centre handles uneven illumination while staying less jumpy near strong
/// edges than a flat box average.
pub fn adaptive_gaussian_threshold(src: &GrayU8, block: usize, c: i16) -> GrayU8 {
    let mean = gaussian_blur(src, block);
    let mut out = GrayU8::new(src.w, src.h);
    for ((dst, &px), &m) in out.data.iter_mut().zip(src.data.iter()).zip(mean.data.iter()) {
        *dst = if px as i16 > m as i16 - c { 255 } else { 0 };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_threshold_splits_at_cutoff() {
        let img = GrayU8::from_raw(3, 1, vec![10, 180, 200]).unwrap();
        let out = threshold_binary(&img, 180);
        assert_eq!(out.data, vec![0, 0, 255]);
    }

    #[test]
    fn adaptive_threshold_is_all_white_on_uniform_input() {
        // Uniform image: every pixel equals its local mean, so px > mean - c
        // holds everywhere for positive c. Matters for the no-edge property.
        let mut img = GrayU8::new(16, 16);
        img.data.fill(128);
        let out = adaptive_gaussian_threshold(&img, 11, 2);
        assert!(out.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn adaptive_threshold_tracks_illumination_gradient() {
        // Dark-to-light ramp with a locally bright spot: the spot survives,
        // the ramp itself does not saturate a global cutoff's way.
        let mut img = GrayU8::new(32, 1);
        for x in 0..32 {
            img.set(x, 0, (x * 4) as u8);
        }
        img.set(16, 0, 255);
        let out = adaptive_gaussian_threshold(&img, 11, 2);
        assert_eq!(out.get(16, 0), 255);
    }

    #[test]
    fn centre_weighting_keeps_a_pixel_near_a_bright_block() {
        // A mid-grey pixel whose 11-wide window barely overlaps a bright
        // block: the tail taps carry almost no weight, so the local mean
        // stays near the pixel and it remains white. A flat box average over
        // the same window would push the mean past it.
        let mut img = GrayU8::new(32, 1);
        img.data.fill(128);
        for x in 20..32 {
            img.set(x, 0, 255);
        }
        let out = adaptive_gaussian_threshold(&img, 11, 2);
        assert_eq!(out.get(16, 0), 255);
    }
}
