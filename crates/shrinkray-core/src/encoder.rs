//! The encoder seam the recompression search drives.
//!
//! The search is encoder-agnostic: anything that can turn a pixel surface
//! plus a quality scalar into bytes can sit behind [`Encoder`]. One
//! implementation ships: JPEG via the `image` crate's encoder.

use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::surface::PixelSurface;

/// Errors that can occur during an encode attempt.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec failed internally
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// An encoder parameterized by a quality scalar in [0, 1].
///
/// Implementations must be deterministic for fixed inputs and must not
/// mutate the surface. The search assumes output size is roughly monotonic
/// in quality, though nothing enforces that. Quality values outside [0, 1]
/// are clamped at the encode call; the search keeps its own unclamped value
/// for termination comparisons.
pub trait Encoder {
    /// Encode the surface at the given quality, returning the raw encoded
    /// payload bytes.
    fn encode(&self, surface: &PixelSurface, quality: f32) -> Result<Vec<u8>, EncodeError>;
}

/// JPEG encoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegEncoder;

impl JpegEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for JpegEncoder {
    fn encode(&self, surface: &PixelSurface, quality: f32) -> Result<Vec<u8>, EncodeError> {
        if surface.width == 0 || surface.height == 0 {
            return Err(EncodeError::InvalidDimensions {
                width: surface.width,
                height: surface.height,
            });
        }

        let expected_len = (surface.width as usize) * (surface.height as usize) * 3;
        if surface.pixels.len() != expected_len {
            return Err(EncodeError::InvalidPixelData {
                expected: expected_len,
                actual: surface.pixels.len(),
            });
        }

        let mut buffer = Cursor::new(Vec::new());
        let encoder = ImageJpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality));

        encoder
            .write_image(
                &surface.pixels,
                surface.width,
                surface.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

/// Map the [0, 1] quality scalar to the JPEG codec's 1-100 range.
///
/// Out-of-range scalars are clamped first; 0.0 maps to 1 because the codec
/// has no quality-0 notion.
fn jpeg_quality(quality: f32) -> u8 {
    let clamped = quality.clamp(0.0, 1.0);
    ((clamped * 100.0).round() as u8).clamp(1, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_surface(width: u32, height: u32) -> PixelSurface {
        PixelSurface::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    fn gradient_surface(width: u32, height: u32) -> PixelSurface {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width) as u8);
                pixels.push(((y * 255) / height) as u8);
                pixels.push(((x + y) * 127 / (width + height)) as u8);
            }
        }
        PixelSurface::new(width, height, pixels)
    }

    #[test]
    fn test_encode_produces_valid_jpeg() {
        let jpeg = JpegEncoder::new().encode(&gray_surface(100, 100), 0.9).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_quality_affects_size() {
        let surface = gradient_surface(64, 64);
        let encoder = JpegEncoder::new();

        let low = encoder.encode(&surface, 0.2).unwrap();
        let high = encoder.encode(&surface, 0.95).unwrap();

        assert!(high.len() > low.len());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let surface = gradient_surface(32, 32);
        let encoder = JpegEncoder::new();

        let a = encoder.encode(&surface, 0.8).unwrap();
        let b = encoder.encode(&surface, 0.8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_clamps_out_of_range_quality() {
        let surface = gray_surface(10, 10);
        let encoder = JpegEncoder::new();

        // Below-floor and above-ceiling scalars both encode fine
        assert!(encoder.encode(&surface, -0.3).is_ok());
        assert!(encoder.encode(&surface, 1.7).is_ok());
    }

    #[test]
    fn test_encode_invalid_pixel_data() {
        let surface = PixelSurface {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };
        let result = JpegEncoder::new().encode(&surface, 0.9);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_zero_dimensions() {
        let surface = PixelSurface {
            width: 0,
            height: 100,
            pixels: vec![],
        };
        let result = JpegEncoder::new().encode(&surface, 0.9);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_one_pixel_surface() {
        let surface = PixelSurface::new(1, 1, vec![255, 0, 0]);
        let jpeg = JpegEncoder::new().encode(&surface, 0.9).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(jpeg_quality(1.0), 100);
        assert_eq!(jpeg_quality(0.8), 80);
        assert_eq!(jpeg_quality(0.5), 50);
        // The codec has no quality 0; floor is 1
        assert_eq!(jpeg_quality(0.0), 1);
        // Out-of-range scalars clamp
        assert_eq!(jpeg_quality(-2.5), 1);
        assert_eq!(jpeg_quality(3.0), 100);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
