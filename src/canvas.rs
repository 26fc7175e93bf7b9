//! Drawing surfaces the paint projection can target.
//!
//! A [`Canvas`] only needs three capabilities: uniform scaling, translation and solid rectangle
//! fills. [`ImageCanvas`] provides them over an in-memory [`RgbaImage`], which is how raster output
//! is produced; GUI toolkits can implement the trait over their own painters.

use image::{Rgba, RgbaImage};

/// Opaque black.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Opaque white.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A mutable 2D drawing context.
///
/// Transform calls compose in local coordinates: after `scale(s, s)` a `translate(d, d)` moves the
/// origin by `s * d` device units. Painting through a canvas changes its transform, so a canvas
/// handed to [`paint_symbol`](crate::render::paint_symbol) should not be reused afterwards without
/// resetting it.
pub trait Canvas {
    /// Scales subsequent drawing by `sx` horizontally and `sy` vertically.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Moves the origin of subsequent drawing by `(dx, dy)` in current units.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Fills the rectangle at `(x, y)` with size `w × h` using the canvas's fill color, no stroke.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn scale(&mut self, sx: f64, sy: f64) {
        (**self).scale(sx, sy);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).fill_rect(x, y, w, h);
    }
}

/// Axis-aligned affine transform: `device = scale * local + offset` per axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform2D {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 };

    /// Appends a scale in local coordinates.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx *= sx;
        self.sy *= sy;
    }

    /// Appends a translation in local coordinates.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += self.sx * dx;
        self.ty += self.sy * dy;
    }

    /// Maps a local point to device coordinates.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.sx * x + self.tx, self.sy * y + self.ty)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A [`Canvas`] that rasterizes into a borrowed [`RgbaImage`].
///
/// Fills are aliased: a pixel is painted when its centre falls inside the transformed rectangle
/// (left and top edges inclusive, right and bottom exclusive). Anything outside the image is
/// clipped.
pub struct ImageCanvas<'a> {
    image: &'a mut RgbaImage,
    transform: Transform2D,
    fill: Rgba<u8>,
}

impl<'a> ImageCanvas<'a> {
    /// Wraps `image` with an identity transform and a black fill.
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self { image, transform: Transform2D::IDENTITY, fill: BLACK }
    }

    /// Sets the color used by subsequent fills.
    pub fn set_fill(&mut self, fill: Rgba<u8>) {
        self.fill = fill;
    }

    /// Returns the current transform.
    pub fn transform(&self) -> Transform2D {
        self.transform
    }
}

impl Canvas for ImageCanvas<'_> {
    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform.scale(sx, sy);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let (x0, y0) = self.transform.apply(x, y);
        let (x1, y1) = self.transform.apply(x + w, y + h);
        let (xs, xe) = pixel_span(x0.min(x1), x0.max(x1), self.image.width());
        let (ys, ye) = pixel_span(y0.min(y1), y0.max(y1), self.image.height());
        for py in ys..ye {
            for px in xs..xe {
                self.image.put_pixel(px, py, self.fill);
            }
        }
    }
}

/// Returns the half-open range of pixel indices whose centres lie in `[start, end)`.
fn pixel_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let clamp = |v: f64| -> u32 {
        if v.is_nan() || v <= 0.0 {
            0
        } else {
            v.min(f64::from(limit)) as u32
        }
    };
    let first = clamp((start - 0.5).ceil());
    let last = clamp((end - 0.5).ceil());
    (first, last.max(first))
}
