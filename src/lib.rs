//! Two-color Floyd-Steinberg dithering.
//!
//! The pipeline turns a decoded RGBA raster into a black and white paletted
//! raster:
//!
//! ```text
//! raw image -> nearest-neighbor rescale (only if scale != 1.0)
//!           -> BT.709 luma -> Floyd-Steinberg -> PalettedImage
//! ```
//!
//! [process] is a pure function of its inputs, no global state is involved.

use tracing::info;

use crate::{
    error::Result,
    paletted_image::PalettedImage,
    texture::{Texture, TextureRef},
    transform::prelude::*,
    utils::pixel::RGBA,
};

pub mod color_palette;
pub mod config;
pub mod dithering;
pub mod error;
pub mod paletted_image;
pub mod texture;
pub mod transform;
pub mod utils;


/// Rescale `image` by `scale` with nearest-neighbor sampling, then dither it
/// to black and white.
///
/// A scale of exactly 1.0 skips the rescale step. Invalid scales fail with
/// [error::FlsError::InvalidArgument] before anything is computed.
pub fn process(image: &Texture<RGBA>, scale: f32) -> Result<PalettedImage> {
    check_scale(scale)?;

    let luma = if scale != 1.0 {
        info!(scale, "resizing");
        grayscale(&rescale(image, scale)?)?
    } else {
        grayscale(image)?
    };

    info!("applying Floyd-Steinberg dithering...");
    dithering::dither_luma(&luma)
}

/// Nearest-neighbor rescale to [scaled_shape].
pub fn rescale(image: &Texture<RGBA>, scale: f32) -> Result<Texture<RGBA>> {
    let (width, height) = scaled_shape(image.width(), image.height(), scale)?;
    let mut output = Texture::new(width, height)?;
    NearestNeighbor::new(scale)?.once(image.as_texture_slice(), output.as_texture_mut_slice());
    Ok(output)
}

/// BT.709 luminance of every pixel, alpha premultiplied.
pub fn grayscale(image: &Texture<RGBA>) -> Result<Texture<f32>> {
    let mut luma = Texture::new(image.width(), image.height())?;
    GrayscaleTransform::auto(image.shape())
        .once(image.as_texture_slice(), luma.as_texture_mut_slice());
    Ok(luma)
}

pub mod prelude {
    pub use crate::color_palette::{BLACK_INDEX, Palette, WHITE_INDEX};
    pub use crate::config::ProcessConfig;
    pub use crate::dithering::dither_luma;
    pub use crate::error::{FlsError, Result};
    pub use crate::paletted_image::PalettedImage;
    pub use crate::texture::prelude::*;
    pub use crate::transform::prelude::*;
    pub use crate::utils::prelude::*;
    pub use crate::{grayscale, process, rescale};
}
