//! Area-averaging resize for the size governor and the fallback path.
//!
//! Each destination pixel averages the block of source pixels it covers,
//! which is the right interpolation for downscaling (no aliasing, stable
//! luminance). Upscaling degenerates to nearest-neighbour; the pipeline only
//! ever shrinks images.

use super::{GrayU8, RgbU8};

#[inline]
fn block_bounds(d: usize, dst_len: usize, src_len: usize) -> (usize, usize) {
    let lo = d * src_len / dst_len;
    let hi = ((d + 1) * src_len / dst_len).max(lo + 1).min(src_len);
    (lo, hi)
}

/// Downscale an RGB image to `nw × nh` by box averaging.
pub fn resize_area_rgb(src: &RgbU8, nw: usize, nh: usize) -> RgbU8 {
    if nw == 0 || nh == 0 || src.is_empty() {
        return RgbU8::new(nw, nh);
    }
    let mut out = RgbU8::new(nw, nh);
    for y in 0..nh {
        let (sy0, sy1) = block_bounds(y, nh, src.h);
        for x in 0..nw {
            let (sx0, sx1) = block_bounds(x, nw, src.w);
            let mut acc = [0u32; 3];
            for sy in sy0..sy1 {
                let row = src.row(sy);
                for sx in sx0..sx1 {
                    let i = sx * 3;
                    acc[0] += row[i] as u32;
                    acc[1] += row[i + 1] as u32;
                    acc[2] += row[i + 2] as u32;
                }
            }
            let n = ((sy1 - sy0) * (sx1 - sx0)) as u32;
            out.set(
                x,
                y,
                [
                    ((acc[0] + n / 2) / n) as u8,
                    ((acc[1] + n / 2) / n) as u8,
                    ((acc[2] + n / 2) / n) as u8,
                ],
            );
        }
    }
    out
}

/// Downscale a single-channel image to `nw × nh` by box averaging.
pub fn resize_area_gray(src: &GrayU8, nw: usize, nh: usize) -> GrayU8 {
    if nw == 0 || nh == 0 || src.is_empty() {
        return GrayU8::new(nw, nh);
    }
    let mut out = GrayU8::new(nw, nh);
    for y in 0..nh {
        let (sy0, sy1) = block_bounds(y, nh, src.h);
        for x in 0..nw {
            let (sx0, sx1) = block_bounds(x, nw, src.w);
            let mut acc = 0u32;
            for sy in sy0..sy1 {
                let row = src.row(sy);
                for &px in &row[sx0..sx1] {
                    acc += px as u32;
                }
            }
            let n = ((sy1 - sy0) * (sx1 - sx0)) as u32;
            out.set(x, y, ((acc + n / 2) / n) as u8);
        }
    }
    out
}

/// Dimensions after shrinking `(w, h)` so that `max(w, h) <= bound`,
/// preserving aspect ratio. Returns the input unchanged when already within
/// the bound.
pub fn fit_dimensions(w: usize, h: usize, bound: usize) -> (usize, usize) {
    let longest = w.max(h);
    if longest <= bound || longest == 0 {
        return (w, h);
    }
    let scale = bound as f32 / longest as f32;
    let nw = ((w as f32 * scale) as usize).max(1);
    let nh = ((h as f32 * scale) as usize).max(1);
    (nw, nh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downscale_averages_blocks() {
        let mut src = GrayU8::new(4, 2);
        for (i, px) in src.data.iter_mut().enumerate() {
            *px = if i % 2 == 0 { 0 } else { 100 };
        }
        let out = resize_area_gray(&src, 2, 1);
        assert_eq!(out.w, 2);
        assert_eq!(out.h, 1);
        assert_eq!(out.data, vec![50, 50]);
    }

    #[test]
    fn fit_dimensions_preserves_aspect() {
        assert_eq!(fit_dimensions(3000, 4000, 1500), (1125, 1500));
        assert_eq!(fit_dimensions(800, 600, 1500), (800, 600));
        assert_eq!(fit_dimensions(5000, 4000, 2000), (2000, 1600));
    }
}
