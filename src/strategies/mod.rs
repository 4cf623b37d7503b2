//! Region-candidate strategies: four independent pipelines turning a photo
//! into a binary edge/region mask.
//!
//! Strategies are tried in a fixed priority order and the first one whose
//! mask yields an accepted quadrilateral wins; they share no state and are
//! independently testable. Adding, removing or reordering strategies only
//! touches [`default_strategies`].

mod adaptive;
mod bright;
mod edge;
mod morph_gradient;

pub use self::adaptive::AdaptiveThreshold;
pub use self::bright::BrightRegion;
pub use self::edge::PlainEdges;
pub use self::morph_gradient::MorphGradient;

use crate::detector::DetectorParams;
use crate::image::{GrayU8, RgbU8};

/// A pure `Image -> Mask` detection pipeline.
pub trait RegionStrategy: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Build a binary mask highlighting candidate card boundaries.
    fn mask(&self, img: &RgbU8, params: &DetectorParams) -> GrayU8;
}

/// The fixed strategy order: bright-region first (cards are usually light),
/// then adaptive threshold, plain edge detection, and the morphological
/// gradient as the last resort.
pub fn default_strategies() -> Vec<Box<dyn RegionStrategy>> {
    vec![
        Box::new(BrightRegion),
        Box::new(AdaptiveThreshold),
        Box::new(PlainEdges),
        Box::new(MorphGradient),
    ]
}
