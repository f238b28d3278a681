use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the fls crate
#[derive(Debug, Error)]
pub enum FlsError {
    /// Caller contract violation: bad scale factor, empty raster, mismatched buffer.
    /// Raised before any processing starts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file extension is not one of the supported formats
    #[error("image type {extension:?} not supported for {path:?}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Error occurred while reading or decoding an image
    #[error("image decode error: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Error occurred while writing or encoding an image
    #[error("image encode error: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// Error occurred while writing the paletted PNG
    #[error("png encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    /// Error occurred during I/O operations (file read/write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed or serialized
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl FlsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FlsError::InvalidArgument(msg.into())
    }
}

impl From<image::ImageError> for FlsError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match err {
            e @ image::ImageError::Encoding(_) => FlsError::ImageEncode(e),
            image::ImageError::IoError(io) => FlsError::Io(io),
            e => FlsError::ImageDecode(e),
        }
    }
}

// Convenience type alias for Results using FlsError
pub type Result<T = ()> = std::result::Result<T, FlsError>;
