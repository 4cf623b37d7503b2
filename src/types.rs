use serde::Serialize;

/// Four corners of a detected card region, `[x, y]` in pixels.
pub type Quad = [[f32; 2]; 4];

/// Diagnostics describing one detection call.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DetectionOutcome {
    pub found: bool,
    /// Name of the winning strategy, if any.
    pub strategy: Option<&'static str>,
    /// Detected corners in source-image coordinates (unordered).
    pub quad: Option<Quad>,
    /// Dimensions of the returned image, if any.
    pub output_size: Option<(usize, usize)>,
    /// True when the returned image is the fallback resize, not a detection.
    pub fallback: bool,
    pub latency_ms: f64,
}
