use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageFormat, RgbaImage};
use log::info;

use crate::error::Result;
use crate::qrcode::Symbol;

/*---- Utilities ----*/

const DEFAULT_DIRECTORY: &str = "generated";

/// Returns console art for the given symbol, two characters per module, with `border` light
/// modules on every side. Lines end with `\n`.
pub fn to_text_art(qr: &Symbol, border: u32) -> String {
    let border = i32::try_from(border).unwrap_or(i32::MAX / 4);
    let mut result = String::new();
    for y in -border..qr.size() + border {
        for x in -border..qr.size() + border {
            result += if qr.get_module(x, y) { "██" } else { "  " };
        }
        result.push('\n');
    }
    result
}

/// Saves an image as PNG and returns the path written.
///
/// # Arguments
///
/// * `image` - The image to save.
/// * `directory` - Optional. Where to save the image. Defaults to `generated`, created if missing.
/// * `filename` - Optional. The file name; `.png` is appended when missing. Defaults to a timestamp.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the directory cannot be created, or
/// [`Error::Image`](crate::Error::Image) if the image cannot be written.
///
/// # Example
///
/// ```rust,no_run
/// use qrpaint::helper::save_png;
/// use qrpaint::qrcode::QrCodeEcc;
/// use qrpaint::render::generate_image_buffer;
///
/// let img = generate_image_buffer("Hello, World!", 500, 1, QrCodeEcc::Medium).unwrap();
/// let path = save_png(&img, None, Some("qr_code")).unwrap();
/// println!("saved {}", path.display());
/// ```
pub fn save_png(image: &RgbaImage, directory: Option<&Path>, filename: Option<&str>) -> Result<PathBuf> {
    let path = output_path(directory, filename, "png")?;
    image.save_with_format(&path, ImageFormat::Png)?;
    info!("wrote {}", path.display());
    Ok(path)
}

/// Saves an SVG document and returns the path written.
///
/// Directory and file name defaults follow [`save_png`], with a `.svg` extension.
pub fn save_svg(svg: &str, directory: Option<&Path>, filename: Option<&str>) -> Result<PathBuf> {
    let path = output_path(directory, filename, "svg")?;
    fs::write(&path, svg)?;
    info!("wrote {}", path.display());
    Ok(path)
}

fn output_path(directory: Option<&Path>, filename: Option<&str>, extension: &str) -> Result<PathBuf> {
    let directory = directory.unwrap_or_else(|| Path::new(DEFAULT_DIRECTORY));
    // Check if the directory exists, create it if it doesn't
    if !directory.exists() {
        fs::create_dir_all(directory)?;
    }
    let mut name = match filename {
        Some(name) => name.to_string(),
        None => timestamp_name(),
    };
    if Path::new(&name).extension().map_or(true, |ext| ext != extension) {
        name = format!("{name}.{extension}");
    }
    Ok(directory.join(name))
}

fn timestamp_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("qr-{millis}")
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::symbol_to_image;

    #[test]
    fn test_text_art() {
        let qr = Symbol::from_modules(2, vec![true, false, false, true]).unwrap();
        assert_eq!(to_text_art(&qr, 0), "██  \n  ██\n");
        let framed = to_text_art(&qr, 1);
        assert_eq!(framed.lines().count(), 4);
        assert_eq!(framed.lines().nth(1), Some("  ██    "));
    }

    #[test]
    fn test_save_png_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let qr = Symbol::from_modules(1, vec![true]).unwrap();
        let image = symbol_to_image(&qr, 1, 30);
        let path = save_png(&image, Some(dir.path()), Some("single")).unwrap();
        assert_eq!(path, dir.path().join("single.png"));
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_save_svg_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("svg");
        let path = save_svg("<svg/>", Some(&nested), Some("code.svg")).unwrap();
        assert_eq!(path, nested.join("code.svg"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_default_name_is_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_svg("<svg/>", Some(dir.path()), None).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("qr-") && name.ends_with(".svg"), "{name}");
    }
}
