use crate::{
    color_palette::Palette,
    texture::{Shape, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
    utils::iterator::GridIterator,
};
use matrices::{DiffusionWeight, FLOYD_STEINBERG};

pub mod matrices;

/// Floyd-Steinberg error diffusion from luminance to palette indices.
///
/// Pixels are quantized strictly in raster-scan order: every pixel's
/// effective value depends on the error pushed forward by the pixels
/// before it, so a single image can't be split across threads.
///
/// For each pixel:
/// 1. effective value = luminance + accumulated error, clamped to `[0, 1]`
/// 2. pick the nearest palette entry ([Palette::nearest], ties go to white)
/// 3. push `effective - entry luminance` to the unvisited neighbors,
///    7/16 right, 3/16 below-left, 5/16 below, 1/16 below-right
///
/// Neighbors outside the raster are skipped, that part of the error is lost.
#[derive(Debug, Clone, Default)]
pub struct FloydSteinberg {
    palette: Palette,
}

impl FloydSteinberg {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl TextureTransform for FloydSteinberg {
    type Input = f32;
    type Output = u8;

    fn apply(&mut self, input: TextureSlice<'_, f32>, mut output: TextureMutSlice<'_, u8>) {
        assert_eq!(input.shape(), output.shape(), "textures don't match shapes");
        let (width, height) = input.shape();
        let luma = input.as_ref();
        let indices = output.as_mut();

        let mut errors = ErrorAccumulator::new(width, height);
        for (x, y, idx) in GridIterator::new(width, height) {
            let value = (luma[idx] + errors.get(idx)).clamp(0.0, 1.0);
            let index = self.palette.nearest(value);
            let error = value - self.palette.luma(index);
            if error != 0.0 {
                errors.diffuse(x, y, error, &FLOYD_STEINBERG);
            }
            indices[idx] = index;
        }
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

/// Per pixel quantization error, indexed by `y * width + x`.
///
/// Lives for a single pass over one image.
struct ErrorAccumulator {
    width: usize,
    height: usize,
    buffer: Vec<f32>,
}

impl ErrorAccumulator {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0.0; width * height],
        }
    }

    #[inline]
    fn get(&self, idx: usize) -> f32 {
        self.buffer[idx]
    }

    /// Spread `error` from `(x, y)` over the kernel, skipping targets outside the raster.
    #[inline]
    fn diffuse(&mut self, x: usize, y: usize, error: f32, kernel: &[DiffusionWeight]) {
        for target in kernel {
            let Some(tx) = x.checked_add_signed(target.dx) else {
                continue;
            };
            let ty = y + target.dy;
            if tx >= self.width || ty >= self.height {
                continue;
            }
            self.buffer[ty * self.width + tx] += error * target.weight;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    fn run(width: u32, height: u32, luma: Vec<f32>) -> Vec<u8> {
        let input = Texture::from_vec(width, height, luma).unwrap();
        let mut output = Texture::<u8>::new(width, height).unwrap();
        FloydSteinberg::default().once(input.as_texture_slice(), output.as_texture_mut_slice());
        output.into_vec()
    }

    #[test]
    fn test_kernel_weights_sum_to_one() {
        let sum: f32 = FLOYD_STEINBERG.iter().map(|w| w.weight).sum();
        assert_eq!(sum, 1.0);
        assert!(
            FLOYD_STEINBERG
                .iter()
                .all(|w| w.dy > 0 || w.dx > 0),
            "kernel must only reach unvisited pixels"
        );
    }

    #[test]
    fn test_diffuse_spreads_to_neighbors() {
        let mut errors = ErrorAccumulator::new(3, 2);
        errors.diffuse(1, 0, 16.0, &FLOYD_STEINBERG);
        assert_eq!(errors.buffer, vec![0.0, 0.0, 7.0, 3.0, 5.0, 1.0]);
    }

    #[test]
    fn test_diffuse_skips_out_of_bounds() {
        // left column: no below-left target
        let mut errors = ErrorAccumulator::new(2, 2);
        errors.diffuse(0, 0, 16.0, &FLOYD_STEINBERG);
        assert_eq!(errors.buffer, vec![0.0, 7.0, 5.0, 1.0]);

        // right column: nothing wraps onto the next row
        let mut errors = ErrorAccumulator::new(2, 2);
        errors.diffuse(1, 0, 16.0, &FLOYD_STEINBERG);
        assert_eq!(errors.buffer, vec![0.0, 0.0, 3.0, 5.0]);

        // last row: everything but the right neighbor is lost
        let mut errors = ErrorAccumulator::new(2, 2);
        errors.diffuse(0, 1, 16.0, &FLOYD_STEINBERG);
        assert_eq!(errors.buffer, vec![0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn test_single_white_pixel() {
        assert_eq!(run(1, 1, vec![1.0]), vec![0]);
    }

    #[test]
    fn test_single_black_pixel() {
        assert_eq!(run(1, 1, vec![0.0]), vec![1]);
    }

    #[test]
    fn test_extremes_are_not_flipped() {
        assert_eq!(run(2, 1, vec![1.0, 0.0]), vec![0, 1]);
        assert_eq!(run(2, 1, vec![0.0, 1.0]), vec![1, 0]);
    }

    #[test]
    fn test_midpoint_is_white() {
        assert_eq!(run(1, 1, vec![0.5]), vec![0]);
    }

    #[test]
    fn test_error_carries_to_right_neighbor() {
        // 0.6 -> white, error -0.4; 0.6 - 7/16 * 0.4 = 0.425 -> black
        assert_eq!(run(2, 1, vec![0.6, 0.6]), vec![0, 1]);
    }

    #[test]
    fn test_out_of_range_luma_is_clamped() {
        // 1.5 clamps to 1.0 so no positive error pushes the neighbor to white
        assert_eq!(run(2, 1, vec![1.5, 0.4]), vec![0, 1]);
        assert_eq!(run(2, 1, vec![-3.0, 0.6]), vec![1, 0]);
    }
}
