use crate::error::{FlsError, Result};

/// (width, height)
pub type Shape = (usize, usize);

/// Trait defining ops available on Textures with
/// lendable inner buffer
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    #[inline]
    fn shape(&self) -> Shape {
        (self.width() as usize, self.height() as usize)
    }

    /// Row-major index of `(x, y)`. Callers keep `x < width` and `y < height`.
    #[inline]
    fn index_of(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width() && y < self.height());
        y as usize * self.width() as usize + x as usize
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Option<&Self::Inner> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.as_ref().get(self.index_of(x, y))
    }
}

/// Trait defining ops available on mutable
/// Textures
pub trait TextureMut: TextureRef + AsMut<[Self::Inner]> {}

/// Row-major raster with an owned buffer.
///
/// The buffer always holds exactly `width * height` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> TextureMut for Texture<T> {}

impl<T> Texture<T> {
    /// Wrap an existing buffer.
    ///
    /// Fails with [FlsError::InvalidArgument] on zero dimensions or when the
    /// buffer length is not `width * height`.
    pub fn from_vec(width: u32, height: u32, buffer: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        if buffer.len() != width as usize * height as usize {
            return Err(FlsError::invalid(format!(
                "buffer of {} pixels does not match a {}x{} raster",
                buffer.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buffer
    }

    pub fn as_texture_slice(&self) -> TextureSlice<'_, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice(&mut self) -> TextureMutSlice<'_, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            buffer: &mut self.buffer,
        }
    }
}

impl<T: Clone> Texture<T> {
    /// Texture of the given size with every element set to `value`
    pub fn filled(width: u32, height: u32, value: T) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            buffer: vec![value; width as usize * height as usize],
        })
    }
}

impl<T: Default + Clone> Texture<T> {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, T::default())
    }
}

/// Rejects rasters with a zero dimension.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result {
    if width == 0 || height == 0 {
        return Err(FlsError::invalid(format!(
            "raster dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    buffer: &'a mut [T],
}

impl<T> AsRef<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> AsMut<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> TextureMut for TextureMutSlice<'_, T> {}

pub mod prelude {
    pub use super::{Shape, Texture, TextureMut, TextureMutSlice, TextureRef, TextureSlice};
}
