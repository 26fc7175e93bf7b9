//! Render options and their TOML representation.
//!
//! ```toml
//! size = 500
//! border = 1
//! ecc = "medium"
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::qrcode::QrCodeEcc;

/// Layout parameters shared by every output form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width and height of raster or painted output, in pixels. Ignored by SVG output.
    pub size: u32,
    /// Light margin around the symbol, in modules.
    pub border: u32,
    pub ecc: QrCodeEcc,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 500,
            border: 1,
            ecc: QrCodeEcc::Medium,
        }
    }
}

impl RenderOptions {
    /// Parses options from TOML. Missing keys take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a TOML file, falling back to the defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no render options at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes options to TOML.
    pub fn to_toml_string(&self) -> String {
        // Plain integers and a unit enum always serialize.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Rejects options that cannot produce a visible image.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidOptions("size must be at least 1 pixel".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options = RenderOptions::from_toml_str("border = 4\necc = \"high\"\n").unwrap();
        assert_eq!(options, RenderOptions { size: 500, border: 4, ecc: QrCodeEcc::High });
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = RenderOptions::from_toml_str("size = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = RenderOptions::from_toml_str("ecc = \"extreme\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let options = RenderOptions { size: 300, border: 4, ecc: QrCodeEcc::Quartile };
        let text = options.to_toml_string();
        assert!(text.contains("ecc = \"quartile\""));
        assert_eq!(RenderOptions::from_toml_str(&text).unwrap(), options);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = RenderOptions::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.toml");
        std::fs::write(&path, "size = 256\n").unwrap();
        assert_eq!(RenderOptions::load(&path).unwrap().size, 256);
    }
}
