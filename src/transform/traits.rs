use crate::texture::{Shape, TextureMutSlice, TextureRef, TextureSlice};

/// Core trait for applying a transform from one texture into another.
///
/// Uses associated types for Input/Output to ensure type safety when chaining.
/// Both textures are sized by the caller; [TextureTransform::prepare] sees the
/// shapes before the first [TextureTransform::apply].
pub trait TextureTransform: Sized {
    type Input;
    type Output;

    /// Apply the transform from input texture to output texture
    fn apply(
        &mut self,
        input: TextureSlice<'_, Self::Input>,
        output: TextureMutSlice<'_, Self::Output>,
    );

    /// Preparation step that can inspect data shape before transformation
    fn prepare(&mut self, in_shape: Shape, out_shape: Shape);

    /// Apply once. Alias for [TextureTransform::prepare] followed by [TextureTransform::apply].
    fn once(
        mut self,
        input: TextureSlice<'_, Self::Input>,
        output: TextureMutSlice<'_, Self::Output>,
    ) {
        self.prepare(input.shape(), output.shape());
        self.apply(input, output)
    }
}
