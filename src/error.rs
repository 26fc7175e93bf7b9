//! Error type shared by every part of the crate.

use ::qrcode::types::QrError;

/// Errors produced while encoding, rendering, configuring or saving QR codes.
///
/// The rendering entry points only ever return [`Error::Encoding`]; rendering
/// itself accepts every border and output size.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The encoder could not represent the input at the requested error correction level.
    #[error("failed to encode QR symbol: {0}")]
    Encoding(#[from] QrError),

    /// A module grid handed to [`Symbol::from_modules`](crate::qrcode::Symbol::from_modules)
    /// was not a fully populated square.
    #[error("malformed module grid: size {size} needs {} modules, got {len}", expected_len(.size))]
    MalformedGrid { size: i32, len: usize },

    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    #[error("failed to parse render options: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

fn expected_len(size: &i32) -> i64 {
    i64::from(*size) * i64::from(*size)
}

pub type Result<T> = std::result::Result<T, Error>;
