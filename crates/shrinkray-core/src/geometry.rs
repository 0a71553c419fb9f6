//! Output geometry: bound fitting and pixel resampling.
//!
//! `fit_dimensions` is the pure bound-fit computation; `resample` actually
//! renders the surface at the computed size. Both preserve aspect ratio and
//! neither ever upscales beyond the source.

use image::imageops::FilterType;

use crate::decode::DecodeError;
use crate::surface::PixelSurface;

/// Compute output dimensions that fit within the given bounds while
/// preserving the source aspect ratio.
///
/// A bound of 0 means that axis is unbounded; with both bounds 0 the source
/// dimensions are returned unchanged. The bounded axis is clamped with `min`
/// against the source, so the result never upscales. Derived dimensions
/// round to nearest and floor at 1 pixel.
pub fn fit_dimensions(
    max_width: u32,
    max_height: u32,
    source_width: u32,
    source_height: u32,
) -> (u32, u32) {
    if max_width == 0 && max_height == 0 {
        return (source_width, source_height);
    }
    if source_width == 0 || source_height == 0 {
        return (source_width, source_height);
    }

    let source_ratio = source_width as f64 / source_height as f64;

    if max_height == 0 {
        // Height unbounded: clamp width, derive height
        let width = source_width.min(max_width);
        let height = ((width as f64 / source_ratio).round() as u32).max(1);
        return (width, height);
    }
    if max_width == 0 {
        // Width unbounded: clamp height, derive width
        let height = source_height.min(max_height);
        let width = ((height as f64 * source_ratio).round() as u32).max(1);
        return (width, height);
    }

    let bounds_ratio = max_width as f64 / max_height as f64;
    if source_ratio > bounds_ratio {
        // Source is relatively wider: width is the binding constraint
        let width = source_width.min(max_width);
        let height = ((width as f64 / source_ratio).round() as u32).max(1);
        (width, height)
    } else {
        // Source is relatively taller (or same ratio): height binds
        let height = source_height.min(max_height);
        let width = ((height as f64 * source_ratio).round() as u32).max(1);
        (width, height)
    }
}

/// Render a surface at the given dimensions using bilinear interpolation.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for zero target dimensions, or
/// `DecodeError::CorruptedFile` if the surface's pixel buffer does not match
/// its declared dimensions.
pub fn resample(
    surface: &PixelSurface,
    width: u32,
    height: u32,
) -> Result<PixelSurface, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if surface.width == width && surface.height == height {
        return Ok(surface.clone());
    }

    let rgb_image = surface
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, FilterType::Triangle);

    Ok(PixelSurface::from_rgb_image(resized))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
