//! Separable Gaussian blur with normalized binomial taps.
//!
//! Binomial rows of Pascal's triangle approximate a Gaussian closely for
//! small kernels and keep the arithmetic exact in f32. Border samples clamp
//! to the image extents.

use crate::image::GrayU8;

const TAPS_3: [f32; 3] = [0.25, 0.5, 0.25];
const TAPS_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const TAPS_7: [f32; 7] = [
    0.015625, 0.09375, 0.234375, 0.3125, 0.234375, 0.09375, 0.015625,
];
const TAPS_11: [f32; 11] = [
    0.0009765625,
    0.009765625,
    0.0439453125,
    0.1171875,
    0.205078125,
    0.24609375,
    0.205078125,
    0.1171875,
    0.0439453125,
    0.009765625,
    0.0009765625,
];

fn taps_for(ksize: usize) -> &'static [f32] {
    match ksize {
        3 => &TAPS_3,
        7 => &TAPS_7,
        11 => &TAPS_11,
        _ => &TAPS_5,
    }
}

/// Blur with a `ksize × ksize` Gaussian kernel (3, 5, 7 or 11; other sizes
/// fall back to 5). The 11-tap kernel doubles as the weighted window of the
/// adaptive threshold.
pub fn gaussian_blur(src: &GrayU8, ksize: usize) -> GrayU8 {
    if src.is_empty() {
        return src.clone();
    }
    let taps = taps_for(ksize);
    let r = taps.len() / 2;
    let (w, h) = (src.w, src.h);

    // Horizontal pass into a float buffer, then vertical back to u8.
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = src.row(y);
        let out_row = &mut tmp[y * w..(y + 1) * w];
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &t) in taps.iter().enumerate() {
                let sx = (x + k).saturating_sub(r).min(w - 1);
                acc += row[sx] as f32 * t;
            }
            *out_px = acc;
        }
    }

    let mut out = GrayU8::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &t) in taps.iter().enumerate() {
                let sy = (y + k).saturating_sub(r).min(h - 1);
                acc += tmp[sy * w + x] * t;
            }
            *dst_px = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
