//! Colorspace reductions feeding the region strategies.
//!
//! Two single-channel projections of an RGB photo are used: plain Rec. 709
//! luma for the edge-based strategies, and the CIELAB L\* lightness channel
//! for the bright-region strategy (L\* tracks perceived brightness better
//! than luma when hunting for light card stock).

use crate::image::{GrayU8, RgbU8};

/// Convert to 8-bit grayscale using Rec. 709 luma weights.
pub fn to_grayscale(img: &RgbU8) -> GrayU8 {
    let mut out = GrayU8::new(img.w, img.h);
    for y in 0..img.h {
        let src = img.row(y);
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let i = x * 3;
            let (r, g, b) = (src[i] as f32, src[i + 1] as f32, src[i + 2] as f32);
            *dst_px = (0.2126 * r + 0.7152 * g + 0.0722 * b).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Extract the CIELAB L\* channel, rescaled from [0, 100] to [0, 255].
pub fn lab_lightness(img: &RgbU8) -> GrayU8 {
    // sRGB -> linear -> relative luminance Y -> L*.
    let linear: [f32; 256] = std::array::from_fn(|v| {
        let s = v as f32 / 255.0;
        if s <= 0.04045 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    });

    let mut out = GrayU8::new(img.w, img.h);
    for y in 0..img.h {
        let src = img.row(y);
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let i = x * 3;
            let yy = 0.2126 * linear[src[i] as usize]
                + 0.7152 * linear[src[i + 1] as usize]
                + 0.0722 * linear[src[i + 2] as usize];
            let fy = if yy > 0.008856 {
                yy.cbrt()
            } else {
                7.787 * yy + 16.0 / 116.0
            };
            let lstar = (116.0 * fy - 16.0).clamp(0.0, 100.0);
            *dst_px = (lstar * 2.55).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: usize, h: usize, px: [u8; 3]) -> RgbU8 {
        let mut img = RgbU8::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, px);
            }
        }
        img
    }

    #[test]
    fn grayscale_extremes() {
        let white = to_grayscale(&solid(2, 2, [255, 255, 255]));
        assert!(white.data.iter().all(|&v| v == 255));
        let black = to_grayscale(&solid(2, 2, [0, 0, 0]));
        assert!(black.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn lightness_separates_card_from_background() {
        let card = lab_lightness(&solid(1, 1, [245, 245, 240]));
        let wood = lab_lightness(&solid(1, 1, [90, 60, 40]));
        assert!(card.get(0, 0) > 180, "card L*={}", card.get(0, 0));
        assert!(wood.get(0, 0) < 180, "background L*={}", wood.get(0, 0));
    }
}
