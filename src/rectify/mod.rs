//! Perspective rectification: canonical corner ordering, output sizing and
//! the inverse-mapped bilinear warp.

pub mod homography;

use crate::image::RgbU8;
use crate::types::Quad;
use homography::{map_point, perspective_from_quads};
use log::debug;

/// Minimum rectified width; guards against degenerate detections producing a
/// singular transform.
pub const MIN_OUT_W: usize = 100;
/// Minimum rectified height.
pub const MIN_OUT_H: usize = 60;

/// Order four corners canonically: top-left, top-right, bottom-right,
/// bottom-left.
///
/// The point with the smallest coordinate sum is top-left and the largest is
/// bottom-right; the smallest `y - x` is top-right and the largest is
/// bottom-left. Deterministic for any permutation of the same four points
/// and a no-op on an already ordered set.
pub fn order_corners(quad: &Quad) -> Quad {
    let mut tl = 0usize;
    let mut br = 0usize;
    let mut tr = 0usize;
    let mut bl = 0usize;
    for (i, p) in quad.iter().enumerate() {
        let sum = p[0] + p[1];
        let diff = p[1] - p[0];
        if sum < quad[tl][0] + quad[tl][1] {
            tl = i;
        }
        if sum > quad[br][0] + quad[br][1] {
            br = i;
        }
        if diff < quad[tr][1] - quad[tr][0] {
            tr = i;
        }
        if diff > quad[bl][1] - quad[bl][0] {
            bl = i;
        }
    }
    [quad[tl], quad[tr], quad[br], quad[bl]]
}

/// Rectified output dimensions from ordered corners: the longer of the two
/// horizontal edges by the longer of the two vertical edges, clamped to
/// `MIN_OUT_W × MIN_OUT_H`.
pub fn output_size(ordered: &Quad) -> (usize, usize) {
    let width = edge_length(ordered[0], ordered[1]).max(edge_length(ordered[3], ordered[2]));
    let height = edge_length(ordered[0], ordered[3]).max(edge_length(ordered[1], ordered[2]));
    (
        (width as usize).max(MIN_OUT_W),
        (height as usize).max(MIN_OUT_H),
    )
}

#[inline]
fn edge_length(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = (b[0] - a[0]) as f64;
    let dy = (b[1] - a[1]) as f64;
    ((dx * dx + dy * dy).sqrt()) as f32
}

/// Warp the quadrilateral region of `img` onto a flat, axis-aligned image.
///
/// Corners are ordered internally, so `quad` may arrive in any vertex order.
/// Returns `None` only when the corner geometry is degenerate beyond what
/// the minimum-size clamp can absorb.
pub fn rectify_quad(img: &RgbU8, quad: &Quad) -> Option<RgbU8> {
    let ordered = order_corners(quad);
    let (out_w, out_h) = output_size(&ordered);

    let dst: Quad = [
        [0.0, 0.0],
        [(out_w - 1) as f32, 0.0],
        [(out_w - 1) as f32, (out_h - 1) as f32],
        [0.0, (out_h - 1) as f32],
    ];
    // Solve in the destination-to-source direction so the warp needs no
    // matrix inversion.
    let h = perspective_from_quads(&dst, &ordered)?;

    debug!(
        "rectify_quad: {}x{} output from quad {:?}",
        out_w, out_h, ordered
    );

    let mut out = RgbU8::new(out_w, out_h);
    for y in 0..out_h {
        for x in 0..out_w {
            let Some(src) = map_point(&h, [x as f64, y as f64]) else {
                continue;
            };
            out.set(x, y, sample_bilinear(img, src[0], src[1]));
        }
    }
    Some(out)
}

/// Bilinear sample with a constant black border outside the source extent.
fn sample_bilinear(img: &RgbU8, x: f64, y: f64) -> [u8; 3] {
    if x < -0.5 || y < -0.5 || x > img.w as f64 - 0.5 || y > img.h as f64 - 0.5 {
        return [0, 0, 0];
    }
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = (x - x0) as f32;
    let fy = (y - y0) as f32;

    let clamp_x = |v: f64| (v.max(0.0) as usize).min(img.w - 1);
    let clamp_y = |v: f64| (v.max(0.0) as usize).min(img.h - 1);
    let p00 = img.get(clamp_x(x0), clamp_y(y0));
    let p10 = img.get(clamp_x(x0 + 1.0), clamp_y(y0));
    let p01 = img.get(clamp_x(x0), clamp_y(y0 + 1.0));
    let p11 = img.get(clamp_x(x0 + 1.0), clamp_y(y0 + 1.0));

    let mut px = [0u8; 3];
    for c in 0..3 {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        px[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    px
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Quad = [
        [100.0, 100.0],
        [300.0, 100.0],
        [300.0, 200.0],
        [100.0, 200.0],
    ];

    fn permutations() -> Vec<[usize; 4]> {
        let mut out = Vec::new();
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let mut seen = [false; 4];
                        for &i in &[a, b, c, d] {
                            seen[i] = true;
                        }
                        if seen == [true; 4] {
                            out.push([a, b, c, d]);
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn corner_ordering_is_permutation_invariant() {
        for perm in permutations() {
            let shuffled = [RECT[perm[0]], RECT[perm[1]], RECT[perm[2]], RECT[perm[3]]];
            assert_eq!(order_corners(&shuffled), RECT, "perm {perm:?}");
        }
    }

    #[test]
    fn corner_ordering_is_idempotent() {
        let once = order_corners(&RECT);
        assert_eq!(order_corners(&once), once);
    }

    #[test]
    fn output_size_uses_longest_edges() {
        let skewed: Quad = [
            [10.0, 20.0],
            [310.0, 30.0],
            [300.0, 220.0],
            [0.0, 210.0],
        ];
        let (w, h) = output_size(&skewed);
        assert!(w >= 300);
        assert!(h >= 190);
    }

    #[test]
    fn output_size_clamps_degenerate_quads() {
        let tiny: Quad = [[10.0, 10.0], [12.0, 10.0], [12.0, 11.0], [10.0, 11.0]];
        let (w, h) = output_size(&tiny);
        assert_eq!((w, h), (MIN_OUT_W, MIN_OUT_H));
    }

    #[test]
    fn rectified_output_respects_minimum_dimensions() {
        let mut img = RgbU8::new(50, 50);
        for y in 10..20 {
            for x in 10..25 {
                img.set(x, y, [240, 240, 240]);
            }
        }
        let tiny: Quad = [[10.0, 10.0], [24.0, 10.0], [24.0, 19.0], [10.0, 19.0]];
        let out = rectify_quad(&img, &tiny).unwrap();
        assert!(out.w >= MIN_OUT_W);
        assert!(out.h >= MIN_OUT_H);
    }

    #[test]
    fn axis_aligned_crop_reproduces_pixels() {
        let mut img = RgbU8::new(400, 300);
        for y in 100..200 {
            for x in 100..300 {
                img.set(x, y, [200, 150, 100]);
            }
        }
        let out = rectify_quad(&img, &RECT).unwrap();
        assert_eq!(out.w, 200);
        assert_eq!(out.h, 100);
        // Center of the crop is solidly the rectangle colour.
        assert_eq!(out.get(100, 50), [200, 150, 100]);
    }
}
