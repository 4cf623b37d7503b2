//! Projective transform between two quadrilaterals.
//!
//! The 8 unknowns of the 3×3 homography (h22 fixed at 1) are solved from the
//! four point correspondences with an LU decomposition.

use crate::types::Quad;
use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

const EPS: f64 = 1e-9;

/// Homography mapping each `src` corner onto the matching `dst` corner.
///
/// Returns `None` for degenerate (collinear) configurations where the linear
/// system is singular.
pub fn perspective_from_quads(src: &Quad, dst: &Quad) -> Option<Matrix3<f64>> {
    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();

    for i in 0..4 {
        let [x, y] = [src[i][0] as f64, src[i][1] as f64];
        let [u, v] = [dst[i][0] as f64, dst[i][1] as f64];
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -u * x;
        a[(r, 7)] = -u * y;
        b[r] = u;
        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -v * x;
        a[(r + 1, 7)] = -v * y;
        b[r + 1] = v;
    }

    let h = a.lu().solve(&b)?;
    Some(Matrix3::new(
        h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0,
    ))
}

/// Apply a homography to a single point; `None` when the point maps to the
/// line at infinity.
#[inline]
pub fn map_point(h: &Matrix3<f64>, p: [f64; 2]) -> Option<[f64; 2]> {
    let v = h * Vector3::new(p[0], p[1], 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some([v[0] / w, v[1] / w])
}
