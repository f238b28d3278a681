use std::fmt::{Debug, Display};

/// ITU-R BT.709 luma coefficients in integral form, they sum to [LUMA_SCALE].
///
/// The same weights the `image` crate uses for its luma conversions:
/// floats:      [0.2126, 0.7152, 0.0722]
/// integral:    [2126, 7152, 722]
pub const LUMA_WEIGHTS: [u32; 3] = [2126, 7152, 722];
pub const LUMA_SCALE: u32 = 10_000;

// 8 bit channels, straight (non premultiplied) alpha
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub struct RGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RGBA {
    pub const WHITE: RGBA = RGBA::from_u8(255, 255, 255, 255);
    pub const BLACK: RGBA = RGBA::from_u8(0, 0, 0, 255);

    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> RGBA {
        RGBA { r, g, b, a }
    }

    pub const fn from_u8_array(value: &[u8; 4]) -> RGBA {
        RGBA::from_u8(value[0], value[1], value[2], value[3])
    }

    pub const fn to_u8_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Opaque gray of the given level
    pub const fn gray(level: u8) -> RGBA {
        RGBA::from_u8(level, level, level, 255)
    }

    /// Weighted luma sum, premultiplied by alpha.
    ///
    /// Integral so the reduction is exact: ranges over `0..=255 * 255 * LUMA_SCALE`.
    #[inline]
    pub const fn luma_premultiplied(&self) -> u32 {
        let luma = self.r as u32 * LUMA_WEIGHTS[0]
            + self.g as u32 * LUMA_WEIGHTS[1]
            + self.b as u32 * LUMA_WEIGHTS[2];
        luma * self.a as u32
    }

    /// Luminance in `[0.0, 1.0]`.
    ///
    /// Alpha is premultiplied: a fully transparent pixel has the luminance of black.
    #[inline]
    pub fn luma(&self) -> f32 {
        const MAX: f64 = (255 * 255 * LUMA_SCALE) as f64;
        (self.luma_premultiplied() as f64 / MAX) as f32
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<image::Rgba<u8>> for RGBA {
    fn from(value: image::Rgba<u8>) -> Self {
        RGBA::from_u8_array(&value.0)
    }
}

impl From<RGBA> for image::Rgba<u8> {
    fn from(value: RGBA) -> Self {
        image::Rgba(value.to_u8_array())
    }
}

impl Display for RGBA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
