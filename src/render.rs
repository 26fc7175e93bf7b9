//! Symbol to output projections.
//!
//! Every entry point has the same two phases: encode the text into a [`Symbol`], then project the
//! symbol onto one output form. The raster and paint projections share their geometry: the symbol
//! plus its border is scaled to fill `size` device units, and each dark module becomes one filled
//! square. The SVG projection emits exact unit squares in module coordinates.

use std::fmt::Write as _;

use image::RgbaImage;
use log::debug;

use crate::canvas::{Canvas, ImageCanvas, WHITE};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::qrcode::{QrCodeEcc, Symbol};

/// Shift applied to the module grid origin, in module units, so that inflated modules stay centred.
const SEAM_OFFSET: f64 = 0.02;

/// Side length of a painted module, in module units. The overlap hides hairline seams between
/// neighbouring modules when the surface anti-aliases.
const MODULE_EXTENT: f64 = 1.0 + 2.0 * SEAM_OFFSET;

/// Returns a string of SVG code for an image depicting the given symbol, with the given number of
/// border modules.
///
/// The document has a white background and one black path made of a `M{x},{y}h1v1h-1z` square per
/// dark module, in row-major order. The string always uses Unix newlines (`\n`).
///
/// # Example
///
/// ```rust
/// use qrpaint::qrcode::Symbol;
/// use qrpaint::render::to_svg_string;
///
/// let qr = Symbol::from_modules(1, vec![true]).unwrap();
/// let svg = to_svg_string(&qr, 1);
/// assert!(svg.contains(r#"viewBox="0 0 3 3""#));
/// assert!(svg.contains(r##"<path d="M1,1h1v1h-1z" fill="#000000"/>"##));
/// ```
pub fn to_svg_string(qr: &Symbol, border: u32) -> String {
    let border = i64::from(border);
    let dimension = i64::from(qr.size()) + border * 2;
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    // Writing into a String cannot fail.
    let _ = writeln!(
        result,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">",
        dimension
    );
    result += "<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "<path d=\"";
    let mut first = true;
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if qr.get_module(x, y) {
                if !first {
                    result.push(' ');
                }
                first = false;
                let _ = write!(result, "M{},{}h1v1h-1z", i64::from(x) + border, i64::from(y) + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// Paints the given symbol onto a canvas.
///
/// The canvas is scaled so that the symbol plus `border` modules on every side spans `size` units,
/// then translated past the border. Each dark module is filled as a slightly inflated square using
/// the canvas's current fill color. The canvas transform is left modified.
///
/// # Arguments
///
/// * `canvas` - The drawing context to paint on.
/// * `qr` - The symbol to paint.
/// * `border` - Border width in modules.
/// * `size` - Width and height of the painted area in canvas units.
pub fn paint_symbol<C: Canvas + ?Sized>(canvas: &mut C, qr: &Symbol, border: u32, size: u32) {
    let border = f64::from(border);
    let scale = f64::from(size) / (f64::from(qr.size()) + 2.0 * border);
    canvas.scale(scale, scale);
    canvas.translate(border - SEAM_OFFSET, border - SEAM_OFFSET);

    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if qr.get_module(x, y) {
                canvas.fill_rect(f64::from(x), f64::from(y), MODULE_EXTENT, MODULE_EXTENT);
            }
        }
    }
}

/// Converts a symbol to a `size × size` RGBA image with a white background and black modules.
///
/// Modules are filled without anti-aliasing, so the image only ever holds the two colors.
pub fn symbol_to_image(qr: &Symbol, border: u32, size: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size, size, WHITE);
    let mut canvas = ImageCanvas::new(&mut image);
    paint_symbol(&mut canvas, qr, border, size);
    image
}

/// Generates a QR code image from a text string.
///
/// # Arguments
///
/// * `text` - The text to encode.
/// * `size` - Width and height of the image in pixels.
/// * `border` - Border width in modules.
/// * `ecl` - Error correction level.
///
/// # Errors
///
/// Returns [`Error::Encoding`](crate::Error::Encoding) if the text cannot be encoded at `ecl`.
///
/// # Example
///
/// ```rust
/// use qrpaint::qrcode::QrCodeEcc;
/// use qrpaint::render::generate_image_buffer;
///
/// let img = generate_image_buffer("HELLO", 300, 4, QrCodeEcc::Medium).unwrap();
/// assert_eq!(img.dimensions(), (300, 300));
/// ```
pub fn generate_image_buffer(text: &str, size: u32, border: u32, ecl: QrCodeEcc) -> Result<RgbaImage> {
    let qr = Symbol::encode_text(text, ecl)?;
    debug!("rendering {0}x{0} symbol to {1}x{1} image, border {2}", qr.size(), size, border);
    Ok(symbol_to_image(&qr, border, size))
}

/// Encodes a text string and paints the resulting QR code onto `canvas`.
///
/// The canvas transform is modified as described in [`paint_symbol`]. Nothing is painted if
/// encoding fails.
///
/// # Errors
///
/// Returns [`Error::Encoding`](crate::Error::Encoding) if the text cannot be encoded at `ecl`.
pub fn paint_qr<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    size: u32,
    border: u32,
    ecl: QrCodeEcc,
) -> Result<()> {
    let qr = Symbol::encode_text(text, ecl)?;
    debug!("painting {0}x{0} symbol at {1} units, border {2}", qr.size(), size, border);
    paint_symbol(canvas, &qr, border, size);
    Ok(())
}

/// Generates an SVG document depicting the QR code for a text string.
///
/// # Errors
///
/// Returns [`Error::Encoding`](crate::Error::Encoding) if the text cannot be encoded at `ecl`.
pub fn generate_svg_string(text: &str, border: u32, ecl: QrCodeEcc) -> Result<String> {
    let qr = Symbol::encode_text(text, ecl)?;
    debug!("rendering {0}x{0} symbol to SVG, border {1}", qr.size(), border);
    Ok(to_svg_string(&qr, border))
}

/// A piece of text together with the options used to render it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub options: RenderOptions,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, options: RenderOptions) -> Self {
        Self { text: text.into(), options }
    }

    /// See [`generate_image_buffer`].
    pub fn to_image(&self) -> Result<RgbaImage> {
        let RenderOptions { size, border, ecc } = self.options;
        generate_image_buffer(&self.text, size, border, ecc)
    }

    /// See [`generate_svg_string`]. The output size is not used.
    pub fn to_svg(&self) -> Result<String> {
        generate_svg_string(&self.text, self.options.border, self.options.ecc)
    }

    /// See [`paint_qr`].
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        let RenderOptions { size, border, ecc } = self.options;
        paint_qr(canvas, &self.text, size, border, ecc)
    }
}
