//! Closed-polygon geometry: area, perimeter, Ramer–Douglas–Peucker
//! simplification and convexity.

/// Shoelace area of a closed polygon given as integer boundary points.
pub fn contour_area(points: &[[i32; 2]]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        sum += p[0] as i64 * q[1] as i64 - q[0] as i64 * p[1] as i64;
    }
    (sum.abs() as f64) * 0.5
}

/// Perimeter of a closed polygon.
pub fn perimeter(points: &[[i32; 2]]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        let dx = (q[0] - p[0]) as f64;
        let dy = (q[1] - p[1]) as f64;
        total += (dx * dx + dy * dy).sqrt();
    }
    total
}

/// Shoelace area of a float polygon (used on simplified candidates).
pub fn polygon_area(points: &[[f32; 2]]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        sum += p[0] as f64 * q[1] as f64 - q[0] as f64 * p[1] as f64;
    }
    sum.abs() * 0.5
}

/// Simplify a closed contour with the Ramer–Douglas–Peucker algorithm.
///
/// The closed loop is split at the point farthest from the first point, the
/// two open chains are simplified independently, and the halves are joined.
/// `epsilon` is the maximum allowed deviation in pixels.
pub fn approx_polygon(points: &[[i32; 2]], epsilon: f64) -> Vec<[f32; 2]> {
    if points.len() < 3 {
        return points.iter().map(|p| [p[0] as f32, p[1] as f32]).collect();
    }

    let pts: Vec<[f64; 2]> = points
        .iter()
        .map(|p| [p[0] as f64, p[1] as f64])
        .collect();

    // Split point: farthest from the start, guaranteeing both chains are
    // proper open curves.
    let mut far = 0usize;
    let mut far_d = -1.0f64;
    for (i, p) in pts.iter().enumerate() {
        let dx = p[0] - pts[0][0];
        let dy = p[1] - pts[0][1];
        let d = dx * dx + dy * dy;
        if d > far_d {
            far_d = d;
            far = i;
        }
    }
    if far == 0 {
        return vec![[pts[0][0] as f32, pts[0][1] as f32]];
    }

    let mut first_half = Vec::new();
    rdp_chain(&pts[0..=far], epsilon, &mut first_half);

    let mut wrapped: Vec<[f64; 2]> = pts[far..].to_vec();
    wrapped.push(pts[0]);
    let mut second_half = Vec::new();
    rdp_chain(&wrapped, epsilon, &mut second_half);

    // Each chain keeps its own endpoints; drop the duplicates at the seams.
    let mut out: Vec<[f32; 2]> = Vec::with_capacity(first_half.len() + second_half.len());
    for p in first_half.iter().take(first_half.len() - 1) {
        out.push([p[0] as f32, p[1] as f32]);
    }
    for p in second_half.iter().take(second_half.len() - 1) {
        out.push([p[0] as f32, p[1] as f32]);
    }
    prune_near_collinear(&mut out, epsilon);
    out
}

/// The split anchors above are arbitrary contour points, not necessarily
/// corners. A vertex sitting within `epsilon` of the chord joining its
/// neighbours carries no shape information and is removed.
fn prune_near_collinear(poly: &mut Vec<[f32; 2]>, epsilon: f64) {
    let mut changed = true;
    while changed && poly.len() > 3 {
        changed = false;
        for i in 0..poly.len() {
            let n = poly.len();
            let prev = poly[(i + n - 1) % n];
            let next = poly[(i + 1) % n];
            let d = point_segment_distance(
                [poly[i][0] as f64, poly[i][1] as f64],
                [prev[0] as f64, prev[1] as f64],
                [next[0] as f64, next[1] as f64],
            );
            if d <= epsilon {
                poly.remove(i);
                changed = true;
                break;
            }
        }
    }
}

/// Recursive RDP on an open chain; emits every kept point including both
/// endpoints.
fn rdp_chain(pts: &[[f64; 2]], epsilon: f64, out: &mut Vec<[f64; 2]>) {
    if pts.len() < 3 {
        out.extend_from_slice(pts);
        return;
    }
    let (a, b) = (pts[0], pts[pts.len() - 1]);
    let mut worst = 0.0f64;
    let mut worst_idx = 0usize;
    for (i, p) in pts.iter().enumerate().skip(1).take(pts.len() - 2) {
        let d = point_segment_distance(*p, a, b);
        if d > worst {
            worst = d;
            worst_idx = i;
        }
    }
    if worst > epsilon {
        rdp_chain(&pts[..=worst_idx], epsilon, out);
        out.pop(); // split point would be emitted twice
        rdp_chain(&pts[worst_idx..], epsilon, out);
    } else {
        out.push(a);
        out.push(b);
    }
}

fn point_segment_distance(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    let ab = [b[0] - a[0], b[1] - a[1]];
    let len_sq = ab[0] * ab[0] + ab[1] * ab[1];
    if len_sq <= f64::EPSILON {
        let dx = p[0] - a[0];
        let dy = p[1] - a[1];
        return (dx * dx + dy * dy).sqrt();
    }
    // Perpendicular distance to the infinite line through a and b; the RDP
    // chords always bracket interior points, so no endpoint clamping needed.
    let cross = ab[0] * (p[1] - a[1]) - ab[1] * (p[0] - a[0]);
    cross.abs() / len_sq.sqrt()
}

/// True when the polygon turns consistently in one direction at every vertex
/// (zero cross products from collinear runs are tolerated).
pub fn is_convex(poly: &[[f32; 2]]) -> bool {
    let n = poly.len();
    if n < 4 {
        return n == 3;
    }
    let mut sign = 0i32;
    for i in 0..n {
        let p0 = poly[i];
        let p1 = poly[(i + 1) % n];
        let p2 = poly[(i + 2) % n];
        let cross = (p1[0] - p0[0]) as f64 * (p2[1] - p1[1]) as f64
            - (p1[1] - p0[1]) as f64 * (p2[0] - p1[0]) as f64;
        if cross.abs() < 1e-9 {
            continue;
        }
        let s = if cross > 0.0 { 1 } else { -1 };
        if sign == 0 {
            sign = s;
        } else if s != sign {
            return false;
        }
    }
    true
}
