//! Owned interleaved RGB image in row-major layout.
//!
//! The stride is counted in pixels; a row occupies `stride * 3` bytes.

#[derive(Clone, Debug)]
pub struct RgbU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Interleaved R, G, B bytes in row-major order
    pub data: Vec<u8>,
}

impl RgbU8 {
    /// Construct a black image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h * 3],
        }
    }

    /// Wrap an existing interleaved RGB buffer.
    ///
    /// Returns `None` when the buffer length does not match `w × h × 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h * 3).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Linear byte index of the pixel at (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.stride + x) * 3
    }

    #[inline]
    /// Get the [R, G, B] triple at (x, y).
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Set the [R, G, B] triple at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    #[inline]
    /// Borrow row `y` as an interleaved byte slice of `w * 3` bytes.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }

    /// True when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0 || self.data.is_empty()
    }
}
