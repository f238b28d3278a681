use fls::{texture::Texture, utils::pixel::RGBA};
use rand::Rng;

pub const BENCH_IMAGE_SIZES: [u32; 3] = [128, 512, 1024];

pub fn gen_random_image(size: u32) -> Texture<RGBA> {
    let mut rng = rand::rng();
    let pixels = (0..size * size)
        .map(|_| RGBA::from_u8(rng.random(), rng.random(), rng.random(), 255))
        .collect();
    Texture::from_vec(size, size, pixels).expect("bench image size is non-zero")
}
