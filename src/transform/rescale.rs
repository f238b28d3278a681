//! Nearest-neighbor rescaling.
//!
//! Destination pixel `(xd, yd)` copies source pixel
//! `(floor(xd / s), floor(yd / s))`, clamped to the source bounds.
//! No blending, every output color exists in the input.

use crate::{
    error::{FlsError, Result},
    texture::{Shape, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
    utils::pixel::RGBA,
};

/// Rejects scale factors that are not strictly positive and finite.
pub fn check_scale(scale: f32) -> Result {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(FlsError::invalid(format!(
            "scale must be a positive finite number, got {}",
            scale
        )));
    }
    Ok(())
}

/// Output size for a uniform `scale`: `floor(width * scale)` by
/// `floor(height * scale)`, each clamped to at least 1.
pub fn scaled_shape(width: u32, height: u32, scale: f32) -> Result<(u32, u32)> {
    check_scale(scale)?;
    if width == 0 || height == 0 {
        return Err(FlsError::invalid(format!(
            "cannot rescale a {}x{} raster",
            width, height
        )));
    }
    Ok((scaled_dim(width, scale)?, scaled_dim(height, scale)?))
}

fn scaled_dim(dim: u32, scale: f32) -> Result<u32> {
    // multiply in f32: 10 * 0.7 floors to 7, in f64 it would floor to 6
    let scaled = (dim as f32 * scale).floor();
    if scaled > u32::MAX as f32 {
        return Err(FlsError::invalid(format!(
            "scaling {} by {} overflows the raster size",
            dim, scale
        )));
    }
    Ok((scaled as u32).max(1))
}

/// Source coordinate sampled by each destination coordinate along one axis.
fn source_map(dst_len: usize, src_len: usize, scale: f32) -> Vec<usize> {
    let last = src_len - 1;
    (0..dst_len)
        .map(|dst| ((dst as f32 / scale).floor() as usize).min(last))
        .collect()
}

/// Nearest-neighbor rescale by a uniform factor.
///
/// The per axis coordinate lookups are computed in [TextureTransform::prepare],
/// so the output texture must already have the [scaled_shape] of the input.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    scale: f32,
    x_map: Vec<usize>,
    y_map: Vec<usize>,
}

impl NearestNeighbor {
    pub fn new(scale: f32) -> Result<Self> {
        check_scale(scale)?;
        Ok(Self {
            scale,
            x_map: Vec::new(),
            y_map: Vec::new(),
        })
    }
}

impl TextureTransform for NearestNeighbor {
    type Input = RGBA;
    type Output = RGBA;

    fn apply(&mut self, input: TextureSlice<'_, RGBA>, mut output: TextureMutSlice<'_, RGBA>) {
        let (src_width, _) = input.shape();
        let (dst_width, dst_height) = output.shape();
        assert!(
            self.x_map.len() == dst_width && self.y_map.len() == dst_height,
            "NearestNeighbor::prepare was not called for this shape"
        );

        let src = input.as_ref();
        output
            .as_mut()
            .chunks_exact_mut(dst_width)
            .zip(self.y_map.iter())
            .for_each(|(dst_row, &src_y)| {
                let src_row = &src[src_y * src_width..(src_y + 1) * src_width];
                dst_row
                    .iter_mut()
                    .zip(self.x_map.iter())
                    .for_each(|(dst_pixel, &src_x)| *dst_pixel = src_row[src_x]);
            });
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        let (src_width, src_height) = in_shape;
        let (dst_width, dst_height) = out_shape;
        self.x_map = source_map(dst_width, src_width, self.scale);
        self.y_map = source_map(dst_height, src_height, self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    fn rescale(input: &Texture<RGBA>, scale: f32) -> Texture<RGBA> {
        let (width, height) = scaled_shape(input.width(), input.height(), scale).unwrap();
        let mut output = Texture::new(width, height).unwrap();
        NearestNeighbor::new(scale)
            .unwrap()
            .once(input.as_texture_slice(), output.as_texture_mut_slice());
        output
    }

    fn numbered(width: u32, height: u32) -> Texture<RGBA> {
        let pixels = (0..width * height).map(|i| RGBA::gray(i as u8)).collect();
        Texture::from_vec(width, height, pixels).unwrap()
    }

    #[test]
    fn test_scaled_shape_floors() {
        assert_eq!(scaled_shape(10, 7, 0.5).unwrap(), (5, 3));
        assert_eq!(scaled_shape(10, 7, 1.0).unwrap(), (10, 7));
        assert_eq!(scaled_shape(3, 3, 2.5).unwrap(), (7, 7));
    }

    #[test]
    fn test_scaled_shape_decimal_scales() {
        let cases = [
            (10, 0.7, 7),
            (10, 0.9, 9),
            (10, 0.29, 2),
            (100, 0.7, 70),
            (100, 0.9, 90),
            (100, 0.29, 29),
            (1000, 0.7, 700),
            (1000, 0.9, 900),
            (1000, 0.29, 290),
        ];
        for (dim, scale, expected) in cases {
            assert_eq!(
                scaled_shape(dim, dim, scale).unwrap(),
                (expected, expected),
                "{} * {}",
                dim,
                scale
            );
        }
    }

    #[test]
    fn test_decimal_scale_samples_stay_in_bounds() {
        let input = numbered(10, 10);
        let output = rescale(&input, 0.7);
        assert_eq!(output.shape(), (7, 7));
        // last destination column reads floor(6 / 0.7) = 8
        assert_eq!(output.get(6, 0), Some(&RGBA::gray(8)));
        assert_eq!(output.get(6, 6), Some(&RGBA::gray(88)));
    }

    #[test]
    fn test_scaled_shape_clamps_to_one() {
        assert_eq!(scaled_shape(3, 2, 0.25).unwrap(), (1, 1));
        assert_eq!(scaled_shape(400, 2, 0.25).unwrap(), (100, 1));
        assert_eq!(scaled_shape(1, 1, 0.001).unwrap(), (1, 1));
    }

    #[test]
    fn test_invalid_scale() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                scaled_shape(4, 4, scale),
                Err(FlsError::InvalidArgument(_))
            ));
            assert!(matches!(
                NearestNeighbor::new(scale),
                Err(FlsError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_scaled_shape_overflow() {
        assert!(matches!(
            scaled_shape(u32::MAX, 1, 2.0),
            Err(FlsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_downscale_samples_floor() {
        // 4x4 -> 2x2 picks source (0,0) (2,0) (0,2) (2,2)
        let output = rescale(&numbered(4, 4), 0.5);
        assert_eq!(output.shape(), (2, 2));
        assert_eq!(
            output.as_ref(),
            &[RGBA::gray(0), RGBA::gray(2), RGBA::gray(8), RGBA::gray(10)]
        );
    }

    #[test]
    fn test_upscale_duplicates() {
        let output = rescale(&numbered(2, 1), 2.0);
        assert_eq!(output.shape(), (4, 2));
        assert_eq!(
            output.as_ref(),
            &[
                RGBA::gray(0),
                RGBA::gray(0),
                RGBA::gray(1),
                RGBA::gray(1),
                RGBA::gray(0),
                RGBA::gray(0),
                RGBA::gray(1),
                RGBA::gray(1),
            ]
        );
    }

    #[test]
    fn test_tiny_result_samples_origin() {
        let output = rescale(&numbered(5, 5), 0.1);
        assert_eq!(output.as_ref(), &[RGBA::gray(0)]);
    }

    #[test]
    fn test_colors_are_copied_unchanged() {
        let input = numbered(7, 5);
        let output = rescale(&input, 1.7);
        assert!(output.as_ref().iter().all(|p| input.as_ref().contains(p)));
    }
}
