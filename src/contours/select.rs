//! Card-quadrilateral selection from traced contours.
//!
//! Implements the candidate funnel: area-ratio gate on the raw contour,
//! perimeter-proportional polygon approximation, 4-vertex + convexity gate,
//! then largest-area wins (stable descending sort).

use super::polygon::{approx_polygon, contour_area, is_convex, perimeter};
use super::trace::Contour;
use crate::detector::DetectorParams;
use crate::types::Quad;
use log::debug;

/// Pick the contour most likely to be the card.
///
/// Returns `None` when no contour survives the funnel, which the caller
/// treats as "try the next strategy".
pub fn select_card_quad(
    contours: &[Contour],
    image_area: f64,
    params: &DetectorParams,
) -> Option<Quad> {
    let min_area = image_area * params.min_area_ratio;
    let max_area = image_area * params.max_area_ratio;

    let mut candidates: Vec<(f64, Quad)> = Vec::new();
    for contour in contours {
        let area = contour_area(&contour.points);
        if area < min_area || area > max_area {
            continue;
        }

        let epsilon = params.epsilon_factor * perimeter(&contour.points);
        let approx = approx_polygon(&contour.points, epsilon);
        if approx.len() != 4 {
            continue;
        }
        if !is_convex(&approx) {
            continue;
        }
        candidates.push((area, [approx[0], approx[1], approx[2], approx[3]]));
    }

    if candidates.is_empty() {
        return None;
    }

    // Stable sort keeps the first-encountered candidate on area ties.
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    debug!(
        "select_card_quad: {} candidate(s), best area {:.0}",
        candidates.len(),
        candidates[0].0
    );
    Some(candidates[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense_polyline(vertices: &[[i32; 2]]) -> Vec<[i32; 2]> {
        let mut out = Vec::new();
        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            let steps = (b[0] - a[0]).abs().max((b[1] - a[1]).abs()).max(1);
            for s in 0..steps {
                let t = s as f64 / steps as f64;
                out.push([
                    (a[0] as f64 + (b[0] - a[0]) as f64 * t).round() as i32,
                    (a[1] as f64 + (b[1] - a[1]) as f64 * t).round() as i32,
                ]);
            }
        }
        out
    }

    fn rect_contour(x0: i32, y0: i32, x1: i32, y1: i32) -> Contour {
        Contour {
            points: dense_polyline(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1]]),
        }
    }

    const IMAGE_AREA: f64 = 800.0 * 600.0;

    #[test]
    fn clear_rectangle_is_selected() {
        let contours = vec![rect_contour(100, 100, 700, 400)];
        let quad = select_card_quad(&contours, IMAGE_AREA, &DetectorParams::default());
        assert!(quad.is_some());
    }

    #[test]
    fn area_ratio_bounds_reject_small_and_large() {
        // 100x100 = 10_000 px, below 5% of 480_000.
        let small = vec![rect_contour(10, 10, 110, 110)];
        assert!(select_card_quad(&small, IMAGE_AREA, &DetectorParams::default()).is_none());

        // 790x590 = 466_100 px, above 85% of 480_000.
        let large = vec![rect_contour(5, 5, 795, 595)];
        assert!(select_card_quad(&large, IMAGE_AREA, &DetectorParams::default()).is_none());
    }

    #[test]
    fn non_quadrilateral_shapes_are_rejected() {
        // Triangle within area bounds: 3 vertices after approximation.
        let tri = Contour {
            points: dense_polyline(&[[100, 100], [600, 100], [100, 500]]),
        };
        assert!(select_card_quad(&[tri], IMAGE_AREA, &DetectorParams::default()).is_none());

        // Convex hexagon within area bounds: 6 vertices after approximation.
        let hex = Contour {
            points: dense_polyline(&[
                [300, 100],
                [500, 100],
                [620, 280],
                [500, 450],
                [300, 450],
                [180, 280],
            ]),
        };
        assert!(select_card_quad(&[hex], IMAGE_AREA, &DetectorParams::default()).is_none());
    }

    #[test]
    fn concave_quadrilateral_is_rejected() {
        let dart = Contour {
            points: dense_polyline(&[[300, 100], [500, 400], [300, 300], [100, 400]]),
        };
        assert!(select_card_quad(&[dart], IMAGE_AREA, &DetectorParams::default()).is_none());
    }

    #[test]
    fn largest_candidate_wins() {
        let contours = vec![
            rect_contour(500, 300, 780, 500), // smaller
            rect_contour(100, 100, 700, 400), // larger
        ];
        let quad = select_card_quad(&contours, IMAGE_AREA, &DetectorParams::default()).unwrap();
        let min_x = quad.iter().map(|p| p[0]).fold(f32::INFINITY, f32::min);
        assert!(min_x < 150.0, "expected the larger rectangle, got {quad:?}");
    }
}
