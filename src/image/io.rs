//! I/O helpers bridging the `image` crate and the pipeline's buffers.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned [`RgbU8`].
//! - `save_rgb_image`: write an [`RgbU8`] to disk (format from extension).
//! - `save_gray_image`: write a [`GrayU8`], handy for mask debugging.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::{GrayU8, RgbU8};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbU8::from_raw(width, height, img.into_raw())
        .ok_or_else(|| format!("Decoded buffer size mismatch for {}", path.display()))
}

/// Save an RGB buffer to disk; the format is inferred from the extension.
pub fn save_rgb_image(img: &RgbU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out: RgbImage = RgbImage::from_raw(img.w as u32, img.h as u32, img.data.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a single-channel buffer to disk as a grayscale image.
pub fn save_gray_image(img: &GrayU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out: GrayImage = GrayImage::from_raw(img.w as u32, img.h as u32, img.data.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
