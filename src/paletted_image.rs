use image::RgbaImage;

use crate::{
    color_palette::Palette,
    texture::{Texture, TextureRef},
    utils::pixel::RGBA,
};

/// Dithering result: one palette index per pixel plus the palette itself.
///
/// Every index is either [crate::color_palette::WHITE_INDEX] or
/// [crate::color_palette::BLACK_INDEX]. Read-only once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PalettedImage {
    indices: Texture<u8>,
    palette: Palette,
}

impl PalettedImage {
    pub(crate) fn new(indices: Texture<u8>, palette: Palette) -> Self {
        debug_assert!(indices.as_ref().iter().all(|i| (*i as usize) < palette.colors().len()));
        Self { indices, palette }
    }

    pub fn width(&self) -> u32 {
        self.indices.width()
    }

    pub fn height(&self) -> u32 {
        self.indices.height()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Row-major palette indices
    pub fn indices(&self) -> &[u8] {
        self.indices.as_ref()
    }

    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        self.indices.get(x, y).copied()
    }

    pub fn color_at(&self, x: u32, y: u32) -> Option<RGBA> {
        self.index_at(x, y).map(|index| self.palette.color(index))
    }

    /// Number of pixels using palette entry `index`
    pub fn count(&self, index: u8) -> usize {
        self.indices().iter().filter(|i| **i == index).count()
    }

    /// Expand indices to their palette colors, for encoders that don't take
    /// indexed images.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let raw = self
            .indices()
            .iter()
            .flat_map(|index| self.palette.color(*index).to_u8_array())
            .collect::<Vec<u8>>();
        RgbaImage::from_raw(self.width(), self.height(), raw)
            .expect("index buffer matches image size")
    }
}
