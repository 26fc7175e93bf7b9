#![forbid(unsafe_code)]
//! QR symbol acquisition.
//!
//! This module wraps the external encoder. It turns text or bytes plus an error correction level
//! into a [`Symbol`], a plain square grid of dark and light modules that the renderers read. Data
//! encoding, error correction coding and mask selection all happen inside the encoder; nothing here
//! interprets them.
use core::fmt;
use core::str::FromStr;

use ::qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A QR symbol, representing a square grid of dark and light modules.
///
/// Instances are immutable after creation and are built fresh for every render.
///
/// # Creation
///
/// - From text: [`Symbol::encode_text`].
/// - From bytes: [`Symbol::encode_binary`].
/// - From an existing grid: [`Symbol::from_modules`].
///
/// # Example
///
/// ```rust
/// use qrpaint::qrcode::{QrCodeEcc, Symbol};
///
/// let qr = Symbol::encode_text("Hello, World!", QrCodeEcc::Low).unwrap();
/// assert_eq!(qr.size(), 21);
/// assert!(qr.get_module(0, 0));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Symbol {
    /// The width and height of this symbol, measured in modules. Always at least 1.
    size: i32,

    /// The modules of this symbol in row-major order (`true` = dark).
    /// Accessed through get_module().
    modules: Vec<bool>,
}

impl Symbol {
    /// Encodes a text string into a QR symbol.
    ///
    /// The UTF-8 bytes of `text` are handed to the encoder, which picks the smallest version that
    /// holds them at the requested error correction level. An empty string encodes to the smallest
    /// (21×21) symbol.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to encode.
    /// * `ecl` - Error correction level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the text does not fit in any symbol version at `ecl`.
    pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<Self> {
        Self::encode_binary(text.as_bytes(), ecl)
    }

    /// Encodes binary data into a QR symbol.
    ///
    /// Similar to [`Symbol::encode_text`], but for arbitrary byte data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the data does not fit in any symbol version at `ecl`.
    pub fn encode_binary(data: &[u8], ecl: QrCodeEcc) -> Result<Self> {
        let code = QrCode::with_error_correction_level(data, ecl.into())?;
        // The encoder caps symbols at 177 modules per side.
        let size = code.width() as i32;
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Self::from_modules(size, modules)
    }

    /// Builds a symbol from a row-major module grid (`true` = dark).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedGrid`] unless `size >= 1` and `modules` holds exactly
    /// `size * size` entries.
    pub fn from_modules(size: i32, modules: Vec<bool>) -> Result<Self> {
        let expected = usize::try_from(size).ok().filter(|&n| n >= 1).map(|n| n * n);
        if expected != Some(modules.len()) {
            return Err(Error::MalformedGrid { size, len: modules.len() });
        }
        Ok(Self { size, modules })
    }

    /// Returns this symbol's size, the number of modules along each side.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules. Coordinates outside the
    /// symbol's bounds return `false`.
    ///
    /// # Arguments
    ///
    /// * `x` - X-coordinate (0 is left).
    /// * `y` - Y-coordinate (0 is top).
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size;
        range.contains(&x) && range.contains(&y) && self.get_module_bounded(x, y)
    }

    /// Returns the number of dark modules.
    pub fn dark_module_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }

    fn get_module_bounded(&self, x: i32, y: i32) -> bool {
        let index = (y as usize) * (self.size as usize) + (x as usize);
        self.modules[index]
    }
}

/// Error correction level for a QR symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl QrCodeEcc {
    /// Returns the lowercase name of this level.
    pub fn as_str(self) -> &'static str {
        use QrCodeEcc::*;
        match self {
            Low => "low",
            Medium => "medium",
            Quartile => "quartile",
            High => "high",
        }
    }
}

impl From<QrCodeEcc> for EcLevel {
    fn from(ecl: QrCodeEcc) -> Self {
        match ecl {
            QrCodeEcc::Low => EcLevel::L,
            QrCodeEcc::Medium => EcLevel::M,
            QrCodeEcc::Quartile => EcLevel::Q,
            QrCodeEcc::High => EcLevel::H,
        }
    }
}

impl fmt::Display for QrCodeEcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrCodeEcc {
    type Err = String;

    /// Parses `low`, `medium`, `quartile`, `high` or their first letter, ignoring case.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        use QrCodeEcc::*;
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Low),
            "m" | "medium" => Ok(Medium),
            "q" | "quartile" => Ok(Quartile),
            "h" | "high" => Ok(High),
            _ => Err(format!("unknown error correction level `{s}` (expected low, medium, quartile or high)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text_size() {
        let qr = Symbol::encode_text("HELLO", QrCodeEcc::Medium).unwrap();
        assert_eq!(qr.size(), 21);
        assert!(qr.dark_module_count() > 0);
    }

    #[test]
    fn test_empty_text_is_minimal_symbol() {
        let qr = Symbol::encode_text("", QrCodeEcc::Low).unwrap();
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn test_too_long_fails() {
        let text = "x".repeat(4000);
        let err = Symbol::encode_text(&text, QrCodeEcc::High).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_finder_pattern_corners() {
        let qr = Symbol::encode_text("https://example.com", QrCodeEcc::Quartile).unwrap();
        let n = qr.size();
        for (x, y) in [(0, 0), (n - 1, 0), (0, n - 1)] {
            assert!(qr.get_module(x, y), "finder corner ({x}, {y}) should be dark");
        }
        // Separator next to the top-left finder.
        assert!(!qr.get_module(7, 0));
    }

    #[test]
    fn test_get_module_out_of_bounds() {
        let qr = Symbol::from_modules(1, vec![true]).unwrap();
        assert!(qr.get_module(0, 0));
        assert!(!qr.get_module(-1, 0));
        assert!(!qr.get_module(0, 1));
        assert!(!qr.get_module(1, 1));
    }

    #[test]
    fn test_from_modules_rejects_bad_grids() {
        assert!(matches!(
            Symbol::from_modules(0, vec![]),
            Err(Error::MalformedGrid { size: 0, len: 0 })
        ));
        assert!(matches!(
            Symbol::from_modules(2, vec![true; 3]),
            Err(Error::MalformedGrid { size: 2, len: 3 })
        ));
        assert!(Symbol::from_modules(-3, vec![true; 9]).is_err());
    }

    #[test]
    fn test_ecc_from_str() {
        assert_eq!("LOW".parse::<QrCodeEcc>(), Ok(QrCodeEcc::Low));
        assert_eq!("m".parse::<QrCodeEcc>(), Ok(QrCodeEcc::Medium));
        assert_eq!("Quartile".parse::<QrCodeEcc>(), Ok(QrCodeEcc::Quartile));
        assert_eq!("h".parse::<QrCodeEcc>(), Ok(QrCodeEcc::High));
        assert!("extreme".parse::<QrCodeEcc>().is_err());
    }

    #[test]
    fn test_ecc_order_and_default() {
        assert!(QrCodeEcc::Low < QrCodeEcc::High);
        assert_eq!(QrCodeEcc::default(), QrCodeEcc::Medium);
        assert_eq!(QrCodeEcc::Quartile.to_string(), "quartile");
    }
}
