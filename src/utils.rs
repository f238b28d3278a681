pub mod image;
pub mod iterator;
pub mod pixel;

pub mod prelude {
    pub use super::image::{read_image, write_paletted_png};
    pub use super::pixel::RGBA;
}
