pub mod grayscale;
pub mod rescale;
pub mod traits;

pub mod prelude {
    pub use super::grayscale::GrayscaleTransform;
    pub use super::rescale::{NearestNeighbor, check_scale, scaled_shape};
    pub use super::traits::TextureTransform;
}
