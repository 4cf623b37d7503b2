mod common;

use card_detector::{CardDetector, DetectorParams, MAX_OCR_DIM};
use common::synthetic_image::{light_card_u8, uniform_u8};

#[test]
fn clear_card_is_detected_and_cropped() {
    let img = light_card_u8(800, 600, 100, 100, 700, 400);
    let detector = CardDetector::new(DetectorParams::default());
    let (card, outcome) = detector.detect_from_array_with_report(&img, false);

    let card = card.expect("expected a detection on a clean synthetic card");
    assert!(outcome.found);
    // A clean light card on a dark desk is the first strategy's home turf;
    // falling through to a later one means an upstream stage broke.
    assert_eq!(outcome.strategy, Some("bright_region"));
    assert!(
        card.w > 200 && card.w < 700,
        "unexpected width {}",
        card.w
    );
    assert!(
        card.h > 100 && card.h < 400,
        "unexpected height {}",
        card.h
    );
}

#[test]
fn detected_card_respects_minimum_output_size() {
    // Card close to the minimum accepted area: the crop must still satisfy
    // the 100x60 output floor.
    let img = light_card_u8(800, 600, 300, 250, 550, 370);
    let detector = CardDetector::new(DetectorParams::default());
    let card = detector
        .detect_from_array(&img, false)
        .expect("card should be detected");
    assert!(card.w >= 100);
    assert!(card.h >= 60);
}

#[test]
fn uniform_image_yields_no_detection() {
    let detector = CardDetector::new(DetectorParams::default());
    for size in [(64, 64), (640, 480)] {
        let img = uniform_u8(size.0, size.1, 127);
        assert!(
            detector.detect_from_array(&img, false).is_none(),
            "uniform {}x{} must not detect",
            size.0,
            size.1
        );
    }
}

#[test]
fn fallback_resize_applies_only_when_requested() {
    let img = uniform_u8(3000, 4000, 127);
    let detector = CardDetector::new(DetectorParams::default());

    assert!(detector.detect_from_array(&img, false).is_none());

    let (fallback, outcome) = detector.detect_from_array_with_report(&img, true);
    let fallback = fallback.expect("fallback must return a resized copy");
    assert!(outcome.fallback);
    assert!(!outcome.found);
    assert!(fallback.w.max(fallback.h) <= MAX_OCR_DIM);
}

#[test]
fn oversized_detection_is_clamped_to_ocr_bound() {
    let img = light_card_u8(5000, 4000, 500, 500, 4500, 3500);
    let detector = CardDetector::new(DetectorParams::default());
    let (card, outcome) = detector.detect_from_array_with_report(&img, false);

    let card = card.expect("large card should be detected");
    assert!(outcome.found);
    assert!(
        card.w.max(card.h) <= MAX_OCR_DIM,
        "output {}x{} exceeds the OCR bound",
        card.w,
        card.h
    );
    // The detected quad is reported in source coordinates.
    let quad = outcome.quad.expect("quad recorded on success");
    let max_x = quad.iter().map(|p| p[0]).fold(0.0f32, f32::max);
    assert!(max_x > 2000.0, "quad should span the source image: {quad:?}");
}

#[test]
fn rotated_card_is_detected() {
    // Mild rotation: paint a rotated rectangle by point-in-quad testing.
    let (w, h) = (800usize, 600usize);
    let mut img = uniform_u8(w, h, 45);
    let angle = 8.0f32.to_radians();
    let (cx, cy) = (400.0f32, 300.0f32);
    let (hw, hh) = (280.0f32, 160.0f32);
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let u = dx * angle.cos() + dy * angle.sin();
            let v = -dx * angle.sin() + dy * angle.cos();
            if u.abs() <= hw && v.abs() <= hh {
                img.set(x, y, [238, 236, 230]);
            }
        }
    }
    let detector = CardDetector::new(DetectorParams::default());
    let card = detector
        .detect_from_array(&img, false)
        .expect("rotated card should be detected");
    // Rectified size tracks the card's edge lengths, not its bounding box.
    assert!(card.w > 400 && card.w < 700, "width {}", card.w);
    assert!(card.h > 240 && card.h < 420, "height {}", card.h);
}
