use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::{
    error::{FlsError, Result},
    paletted_image::PalettedImage,
    texture::Texture,
    utils::pixel::RGBA,
};

/// Decoder for `path`, picked from its extension.
///
/// Only `.png`, `.jpg` and `.jpeg` (any case) are accepted.
pub fn format_from_path(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        _ => Err(FlsError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Read and decode a PNG or JPEG file into an RGBA texture.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Texture<RGBA>> {
    let path = path.as_ref();
    let format = format_from_path(path)?;
    let reader = ImageReader::with_format(BufReader::new(File::open(path)?), format);
    let image = reader.decode()?.to_rgba8();
    debug!(
        width = image.width(),
        height = image.height(),
        ?format,
        "decoded image"
    );
    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|pixel| RGBA::from(*pixel)).collect();
    Texture::from_vec(width, height, pixels)
}

/// Write a 1-bit indexed PNG whose `PLTE` is the image palette.
pub fn write_paletted_png<P: AsRef<Path>>(image: &PalettedImage, path: P) -> Result {
    let file = BufWriter::new(File::create(path)?);
    encode_paletted_png(image, file)
}

/// Encode `image` as a 1-bit indexed PNG into `writer`.
pub fn encode_paletted_png<W: Write>(image: &PalettedImage, writer: W) -> Result {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::One);
    encoder.set_palette(image.palette().to_plte());
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pack_1bit(image.indices(), image.width() as usize))?;
    writer.finish()?;
    Ok(())
}

/// Pack indices at 1 bit per pixel, most significant bit first, each row
/// padded to a whole byte.
fn pack_1bit(indices: &[u8], width: usize) -> Vec<u8> {
    let row_bytes = width.div_ceil(8);
    let mut packed = Vec::with_capacity(row_bytes * indices.len() / width.max(1));
    for row in indices.chunks_exact(width) {
        for byte_pixels in row.chunks(8) {
            let byte = byte_pixels
                .iter()
                .enumerate()
                .fold(0u8, |acc, (bit, index)| acc | ((index & 1) << (7 - bit)));
            packed.push(byte);
        }
    }
    packed
}
