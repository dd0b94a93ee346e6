//! Texture handle and CPU-side pixel data types.

use serde::{Deserialize, Serialize};

/// Opaque reference to a texture owned by a
/// [`TextureRegistry`](crate::TextureRegistry).
///
/// Handles are cheap `Copy` ids, valid for the registry's whole lifetime.
/// A handle stays stable when its backing resource is replaced (e.g. a
/// render target recreated on resize).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub(crate) u16);

impl TextureHandle {
    /// The raw registry index, for debug display.
    pub fn index(self) -> u16 {
        self.0
    }
}

/// Decoded RGBA8 pixel data for one texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureData {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Tightly packed RGBA8 pixels, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Wrap a decoded image buffer.
    pub fn from_image(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_image_preserves_dimensions() {
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([1, 2, 3, 4]));
        let data = TextureData::from_image(img);
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.byte_len(), 4 * 2 * 4);
    }

    #[test]
    fn test_handle_is_copy_and_comparable() {
        let a = TextureHandle(3);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(a.index(), 3);
    }
}
