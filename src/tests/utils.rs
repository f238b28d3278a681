use rand::Rng;

use crate::{texture::Texture, utils::pixel::RGBA};

pub fn rand_rgba(rng: &mut rand::rngs::ThreadRng) -> RGBA {
    RGBA::from_u8(
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>(),
    )
}

pub fn gen_random_image(width: u32, height: u32) -> Texture<RGBA> {
    let mut rng = rand::rng();
    let pixels = (0..width * height).map(|_| rand_rgba(&mut rng)).collect();
    Texture::from_vec(width, height, pixels).unwrap()
}

pub fn uniform_image(width: u32, height: u32, color: RGBA) -> Texture<RGBA> {
    Texture::filled(width, height, color).unwrap()
}

/// Left to right ramp from black to white, same on every row
pub fn horizontal_gradient(width: u32, height: u32) -> Texture<RGBA> {
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(|x| RGBA::gray((x * 255 / (width - 1).max(1)) as u8)))
        .collect();
    Texture::from_vec(width, height, pixels).unwrap()
}
