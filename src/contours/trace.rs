//! External boundary tracing on binary masks.
//!
//! Connected components (8-connectivity) are discovered by a row-major scan
//! with flood fill; the first pixel met in each component is its topmost,
//! leftmost boundary pixel, from which Moore neighbour tracing walks the
//! outer boundary clockwise. Hole boundaries are never traced: one external
//! contour per component, matching the selector's needs.

use crate::image::GrayU8;

/// Ordered closed boundary of one connected component.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Boundary pixels in tracing order, `[x, y]`.
    pub points: Vec<[i32; 2]>,
}

/// Clockwise 8-neighbourhood starting west.
const NEIGHBORS: [[i32; 2]; 8] = [
    [-1, 0],
    [-1, -1],
    [0, -1],
    [1, -1],
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
];

/// Trace the external contour of every foreground component in `mask`.
///
/// Components of fewer than 4 boundary pixels are discarded as noise.
pub fn trace_external(mask: &GrayU8) -> Vec<Contour> {
    let (w, h) = (mask.w, mask.h);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut seen = vec![false; w * h];
    let mut contours = Vec::new();
    let mut fill_stack: Vec<usize> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if seen[idx] || mask.data[idx] == 0 {
                continue;
            }

            let contour = moore_trace(mask, x, y);
            if contour.points.len() >= 4 {
                contours.push(contour);
            }

            // Mark the whole component so later rows do not re-trace it.
            seen[idx] = true;
            fill_stack.push(idx);
            while let Some(cur) = fill_stack.pop() {
                let cx = (cur % w) as i32;
                let cy = (cur / w) as i32;
                for d in NEIGHBORS {
                    let nx = cx + d[0];
                    let ny = cy + d[1];
                    if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                        continue;
                    }
                    let nidx = ny as usize * w + nx as usize;
                    if !seen[nidx] && mask.data[nidx] != 0 {
                        seen[nidx] = true;
                        fill_stack.push(nidx);
                    }
                }
            }
        }
    }

    contours
}

#[inline]
fn foreground(mask: &GrayU8, x: i32, y: i32) -> bool {
    x >= 0
        && y >= 0
        && (x as usize) < mask.w
        && (y as usize) < mask.h
        && mask.data[y as usize * mask.w + x as usize] != 0
}

/// Direction index of `to` relative to `from`; both must be 8-neighbours.
#[inline]
fn dir_of(from: [i32; 2], to: [i32; 2]) -> usize {
    let d = [to[0] - from[0], to[1] - from[1]];
    NEIGHBORS
        .iter()
        .position(|&n| n == d)
        .unwrap_or(0)
}

/// Moore neighbour tracing with Jacob's stopping criterion, starting from the
/// component's topmost-leftmost pixel (its west neighbour is background by
/// construction of the scan order).
fn moore_trace(mask: &GrayU8, sx: usize, sy: usize) -> Contour {
    let start = [sx as i32, sy as i32];
    let start_backtrack = [start[0] - 1, start[1]];
    let mut points = vec![start];

    let mut cur = start;
    let mut backtrack = start_backtrack;
    // Hard bound: each boundary pixel is visited at most a handful of times.
    let limit = 4 * mask.w * mask.h + 8;

    for _ in 0..limit {
        let from = dir_of(cur, backtrack);
        let mut found = None;
        for k in 1..=8 {
            let dir = (from + k) % 8;
            let n = [cur[0] + NEIGHBORS[dir][0], cur[1] + NEIGHBORS[dir][1]];
            if foreground(mask, n[0], n[1]) {
                // The neighbour examined just before `n` is background and
                // becomes the next backtrack point.
                let prev_dir = (from + k - 1) % 8;
                let b = [cur[0] + NEIGHBORS[prev_dir][0], cur[1] + NEIGHBORS[prev_dir][1]];
                found = Some((n, b));
                break;
            }
        }

        let Some((next, b)) = found else {
            break; // isolated pixel
        };

        if next == start && b == start_backtrack {
            break; // re-entered the start the same way: boundary closed
        }
        points.push(next);
        cur = next;
        backtrack = b;
    }

    Contour { points }
}
