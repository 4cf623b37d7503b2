//! Grayscale morphology with square structuring elements.
//!
//! A square kernel makes dilation and erosion separable: a horizontal
//! min/max pass followed by a vertical one. Binary masks (0/255) are a
//! special case of the grayscale operators, so a single implementation
//! serves both the mask cleanup steps and the morphological gradient.
//!
//! `iterations` follows the usual convention: close = dilate×n then erode×n,
//! open = erode×n then dilate×n.

use crate::image::GrayU8;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

fn filter_1d_rows(src: &GrayU8, r: usize, which: Extremum) -> GrayU8 {
    let (w, h) = (src.w, src.h);
    let mut out = GrayU8::new(w, h);
    for y in 0..h {
        let row = src.row(y);
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let x0 = x.saturating_sub(r);
            let x1 = (x + r + 1).min(w);
            let window = &row[x0..x1];
            *dst_px = match which {
                Extremum::Max => *window.iter().max().unwrap_or(&0),
                Extremum::Min => *window.iter().min().unwrap_or(&0),
            };
        }
    }
    out
}

fn filter_1d_cols(src: &GrayU8, r: usize, which: Extremum) -> GrayU8 {
    let (w, h) = (src.w, src.h);
    let mut out = GrayU8::new(w, h);
    for y in 0..h {
        let y0 = y.saturating_sub(r);
        let y1 = (y + r + 1).min(h);
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut best = src.get(x, y0);
            for sy in y0 + 1..y1 {
                let v = src.get(x, sy);
                best = match which {
                    Extremum::Max => best.max(v),
                    Extremum::Min => best.min(v),
                };
            }
            *dst_px = best;
        }
    }
    out
}

fn apply(src: &GrayU8, ksize: usize, iterations: usize, which: Extremum) -> GrayU8 {
    if src.is_empty() || ksize < 2 || iterations == 0 {
        return src.clone();
    }
    let r = ksize / 2;
    let mut cur = filter_1d_cols(&filter_1d_rows(src, r, which), r, which);
    for _ in 1..iterations {
        cur = filter_1d_cols(&filter_1d_rows(&cur, r, which), r, which);
    }
    cur
}

/// Dilate with a `ksize × ksize` square kernel, `iterations` times.
pub fn dilate(src: &GrayU8, ksize: usize, iterations: usize) -> GrayU8 {
    apply(src, ksize, iterations, Extremum::Max)
}

/// Erode with a `ksize × ksize` square kernel, `iterations` times.
pub fn erode(src: &GrayU8, ksize: usize, iterations: usize) -> GrayU8 {
    apply(src, ksize, iterations, Extremum::Min)
}

/// Morphological closing: fills gaps up to the kernel size.
pub fn close(src: &GrayU8, ksize: usize, iterations: usize) -> GrayU8 {
    erode(&dilate(src, ksize, iterations), ksize, iterations)
}

/// Morphological opening: removes speckle up to the kernel size.
pub fn open(src: &GrayU8, ksize: usize, iterations: usize) -> GrayU8 {
    dilate(&erode(src, ksize, iterations), ksize, iterations)
}

/// Morphological gradient: dilation minus erosion, highlighting object
/// boundaries.
pub fn gradient(src: &GrayU8, ksize: usize) -> GrayU8 {
    let dil = dilate(src, ksize, 1);
    let ero = erode(src, ksize, 1);
    let mut out = GrayU8::new(src.w, src.h);
    for ((dst, &d), &e) in out.data.iter_mut().zip(dil.data.iter()).zip(ero.data.iter()) {
        *dst = d.saturating_sub(e);
    }
    out
}
