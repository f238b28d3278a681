use crate::utils::pixel::RGBA;

pub const WHITE_INDEX: u8 = 0;
pub const BLACK_INDEX: u8 = 1;

/// Fixed two entry color table, `[white, black]`.
///
/// The index is the only representation of color kept in a dithered image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [RGBA; 2],
    // luminance of each entry, cached for quantization
    luma: [f32; 2],
}

pub const BLACK_AND_WHITE: Palette = Palette {
    colors: [RGBA::WHITE, RGBA::BLACK],
    luma: [1.0, 0.0],
};

impl Default for Palette {
    fn default() -> Self {
        BLACK_AND_WHITE
    }
}

impl Palette {
    #[inline]
    pub fn colors(&self) -> &[RGBA; 2] {
        &self.colors
    }

    #[inline]
    pub fn color(&self, index: u8) -> RGBA {
        self.colors[index as usize]
    }

    #[inline]
    pub fn luma(&self, index: u8) -> f32 {
        self.luma[index as usize]
    }

    /// Index of the entry whose luminance is closest to `value`.
    ///
    /// Entries are scanned in order and a later one only wins when strictly
    /// closer, so an exact midpoint resolves to white (index 0).
    #[inline]
    pub fn nearest(&self, value: f32) -> u8 {
        let to_white = (value - self.luma[WHITE_INDEX as usize]).abs();
        let to_black = (value - self.luma[BLACK_INDEX as usize]).abs();
        if to_black < to_white {
            BLACK_INDEX
        } else {
            WHITE_INDEX
        }
    }

    /// Red, green, blue triplets as stored in a PNG `PLTE` chunk
    pub fn to_plte(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }
}
