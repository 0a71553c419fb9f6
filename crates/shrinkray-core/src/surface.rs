//! The pixel surface type consumed by every encode attempt.

/// A decoded image held as an owned RGB pixel buffer at fixed dimensions.
///
/// Produced once by the decode/resample stages and read many times by the
/// recompression search; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl PixelSurface {
    /// Create a new PixelSurface with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelSurface from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for resampling.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid surface.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let surface = PixelSurface::new(100, 50, pixels);

        assert_eq!(surface.width, 100);
        assert_eq!(surface.height, 50);
        assert_eq!(surface.byte_size(), 15000);
        assert!(!surface.is_empty());
    }

    #[test]
    fn test_surface_empty() {
        let surface = PixelSurface::new(0, 0, vec![]);
        assert!(surface.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Pixel buffer size mismatch")]
    fn test_size_check_survives_large_dimensions() {
        // 40000 * 40000 * 3 overflows u32; the size check must still report
        // the mismatch rather than trip on its own arithmetic
        PixelSurface::new(40_000, 40_000, vec![0u8; 3]);
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let pixels = vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
        ];
        let surface = PixelSurface::new(2, 1, pixels.clone());

        let img = surface.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 1));

        let back = PixelSurface::from_rgb_image(img);
        assert_eq!(back.pixels, pixels);
    }

    #[test]
    fn test_to_rgb_image_rejects_bad_buffer() {
        let surface = PixelSurface {
            width: 10,
            height: 10,
            pixels: vec![0u8; 5],
        };
        assert!(surface.to_rgb_image().is_none());
    }
}
