use tracing::debug;

use crate::{
    color_palette::Palette,
    dithering::error_diffusion::FloydSteinberg,
    error::{FlsError, Result},
    paletted_image::PalettedImage,
    texture::{Texture, TextureRef},
    transform::traits::TextureTransform,
};

pub mod error_diffusion;

/// Dither a luminance texture (values in `[0.0, 1.0]`) to the black and white palette.
///
/// Fails with [FlsError::InvalidArgument] when a luminance value is NaN or
/// infinite; nothing is produced in that case.
pub fn dither_luma(luma: &Texture<f32>) -> Result<PalettedImage> {
    if let Some(idx) = luma.as_ref().iter().position(|v| !v.is_finite()) {
        return Err(FlsError::invalid(format!(
            "luminance at ({}, {}) is not finite",
            idx % luma.width() as usize,
            idx / luma.width() as usize
        )));
    }

    debug!(
        width = luma.width(),
        height = luma.height(),
        "floyd-steinberg pass"
    );
    let palette = Palette::default();
    let mut indices = Texture::<u8>::new(luma.width(), luma.height())?;
    FloydSteinberg::new(palette).once(luma.as_texture_slice(), indices.as_texture_mut_slice());
    Ok(PalettedImage::new(indices, palette))
}
