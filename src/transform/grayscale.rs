use fls_macros::simd_targets;

use crate::{
    texture::{Shape, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
    utils::pixel::RGBA,
};

/// Reduces RGBA pixels to BT.709 luminance in `[0.0, 1.0]`, alpha premultiplied.
///
/// Every pixel is independent, so unlike dithering this step may run row-parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleTransform {
    Seq,
    Par,
}

impl GrayscaleTransform {
    /// Pick a strategy from the expected texture shape, small textures
    /// don't pay back the rayon overhead.
    pub fn auto(shape_hint: Shape) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        if width < 450 || count < 202500 {
            return GrayscaleTransform::Seq;
        }
        GrayscaleTransform::Par
    }
}

impl TextureTransform for GrayscaleTransform {
    type Input = RGBA;
    type Output = f32;

    fn apply(&mut self, input: TextureSlice<'_, RGBA>, mut output: TextureMutSlice<'_, f32>) {
        debug_assert_eq!(input.shape(), output.shape());
        match self {
            GrayscaleTransform::Seq => scalar_impl(input.as_ref(), output.as_mut()),
            GrayscaleTransform::Par => {
                scalar_par_impl(input.as_ref(), output.as_mut(), input.width() as usize)
            }
        }
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

#[simd_targets]
fn scalar_impl(in_buf: &[RGBA], out_buf: &mut [f32]) {
    out_buf
        .iter_mut()
        .zip(in_buf.iter())
        .for_each(|(out_pixel, in_pixel)| *out_pixel = in_pixel.luma());
}

#[simd_targets]
fn scalar_par_impl(in_buf: &[RGBA], out_buf: &mut [f32], width: usize) {
    use rayon::prelude::*;

    out_buf
        .par_chunks_exact_mut(width)
        .zip(in_buf.par_chunks_exact(width))
        .for_each(|(out_row, in_row)| {
            out_row
                .iter_mut()
                .zip(in_row.iter())
                .for_each(|(out_pixel, in_pixel)| *out_pixel = in_pixel.luma());
        });
}
