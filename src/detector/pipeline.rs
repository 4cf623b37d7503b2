//! Detector pipeline driving detection and rectification end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use card_detector::{CardDetector, DetectorParams};
//! use card_detector::image::RgbU8;
//!
//! # fn example(photo: &RgbU8) {
//! let detector = CardDetector::new(DetectorParams::default());
//! if let Some(card) = detector.detect_from_array(photo, false) {
//!     println!("card: {}x{}", card.w, card.h);
//! }
//! # }
//! ```

use super::params::{DetectorParams, MAX_OCR_DIM, MAX_PROCESS_DIM};
use crate::contours::{select_card_quad, trace_external};
use crate::image::{io, resize::fit_dimensions, resize_area_rgb, RgbU8};
use crate::rectify::rectify_quad;
use crate::strategies::{default_strategies, RegionStrategy};
use crate::types::{DetectionOutcome, Quad};
use log::{debug, warn};
use std::borrow::Cow;
use std::path::Path;
use std::time::Instant;

/// Card detector: size governor, ordered region strategies, contour
/// selection, perspective rectification and the fallback policy.
///
/// Holds only immutable configuration, so one instance may service
/// concurrent calls from multiple threads.
pub struct CardDetector {
    params: DetectorParams,
    strategies: Vec<Box<dyn RegionStrategy>>,
}

impl Default for CardDetector {
    fn default() -> Self {
        Self::new(DetectorParams::default())
    }
}

impl CardDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self {
            params,
            strategies: default_strategies(),
        }
    }

    /// The configuration bound at construction.
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect and rectify a card from an image file.
    ///
    /// Returns `None` when the file cannot be decoded, or when no card is
    /// found and no fallback applies.
    pub fn detect(&self, path: &Path, fallback_resize: bool) -> Option<RgbU8> {
        match io::load_rgb_image(path) {
            Ok(img) => self.detect_from_array(&img, fallback_resize),
            Err(err) => {
                warn!("Failed to read image: {err}");
                None
            }
        }
    }

    /// Detect and rectify a card from an already decoded image.
    pub fn detect_from_array(&self, img: &RgbU8, fallback_resize: bool) -> Option<RgbU8> {
        self.detect_from_array_with_report(img, fallback_resize).0
    }

    /// Run the detector and return both the image and a detailed outcome.
    pub fn detect_from_array_with_report(
        &self,
        img: &RgbU8,
        fallback_resize: bool,
    ) -> (Option<RgbU8>, DetectionOutcome) {
        let total_start = Instant::now();
        let mut outcome = DetectionOutcome::default();

        if img.is_empty() {
            outcome.latency_ms = elapsed_ms(total_start);
            return (None, outcome);
        }

        let (orig_w, orig_h) = (img.w, img.h);
        debug!("CardDetector::detect start {}x{}", orig_w, orig_h);

        // Size governor: bound the analysis resolution, remember the scale.
        let (proc_w, proc_h) = fit_dimensions(orig_w, orig_h, MAX_PROCESS_DIM);
        let (work, scale): (Cow<'_, RgbU8>, f64) = if (proc_w, proc_h) != (orig_w, orig_h) {
            let scale = proc_w.max(proc_h) as f64 / orig_w.max(orig_h) as f64;
            debug!(
                "CardDetector::detect downscale {}x{} -> {}x{} (scale {:.4})",
                orig_w, orig_h, proc_w, proc_h, scale
            );
            (Cow::Owned(resize_area_rgb(img, proc_w, proc_h)), scale)
        } else {
            (Cow::Borrowed(img), 1.0)
        };

        let image_area = (work.w * work.h) as f64;
        for strategy in &self.strategies {
            let mask = strategy.mask(&work, &self.params);
            let contours = trace_external(&mask);
            if contours.is_empty() {
                debug!("CardDetector::detect {}: no contours", strategy.name());
                continue;
            }
            let Some(quad) = select_card_quad(&contours, image_area, &self.params) else {
                debug!(
                    "CardDetector::detect {}: {} contour(s), no quadrilateral",
                    strategy.name(),
                    contours.len()
                );
                continue;
            };

            // Map the quad back to source resolution before rectifying so
            // output quality is not limited by the analysis resolution.
            let quad_full: Quad = if scale != 1.0 {
                quad.map(|p| [(p[0] as f64 / scale) as f32, (p[1] as f64 / scale) as f32])
            } else {
                quad
            };

            let Some(mut card) = rectify_quad(img, &quad_full) else {
                debug!(
                    "CardDetector::detect {}: degenerate quad {:?}",
                    strategy.name(),
                    quad_full
                );
                continue;
            };

            let (out_w, out_h) = fit_dimensions(card.w, card.h, MAX_OCR_DIM);
            if (out_w, out_h) != (card.w, card.h) {
                debug!(
                    "CardDetector::detect output too large, resizing to {}x{}",
                    out_w, out_h
                );
                card = resize_area_rgb(&card, out_w, out_h);
            }

            debug!(
                "CardDetector::detect card found using strategy {}",
                strategy.name()
            );
            outcome.found = true;
            outcome.strategy = Some(strategy.name());
            outcome.quad = Some(quad_full);
            outcome.output_size = Some((card.w, card.h));
            outcome.latency_ms = elapsed_ms(total_start);
            return (Some(card), outcome);
        }

        debug!("CardDetector::detect no card contour found with any strategy");

        // Fallback applies only when the caller could not feed the original
        // to recognition as-is; smaller undetected inputs stay None.
        if fallback_resize && orig_w.max(orig_h) > MAX_OCR_DIM {
            let (fb_w, fb_h) = fit_dimensions(orig_w, orig_h, MAX_OCR_DIM);
            debug!("CardDetector::detect fallback resize to {}x{}", fb_w, fb_h);
            let resized = resize_area_rgb(img, fb_w, fb_h);
            outcome.fallback = true;
            outcome.output_size = Some((fb_w, fb_h));
            outcome.latency_ms = elapsed_ms(total_start);
            return (Some(resized), outcome);
        }

        outcome.latency_ms = elapsed_ms(total_start);
        (None, outcome)
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
