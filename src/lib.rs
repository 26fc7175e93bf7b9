//! # qrpaint
//!
//! A Rust library for rendering QR codes to raster images, SVG documents, or any 2D drawing
//! surface.
//!
//! `qrpaint` hands the text to the [`qrcode`](https://docs.rs/qrcode) encoder and maps the resulting
//! module grid onto the requested output. It supports all four error correction levels and a
//! configurable border and output size.
//!
//! ## Features
//!
//! - Render QR codes as RGBA image buffers with a white background and black modules.
//! - Render QR codes as self-contained SVG documents.
//! - Paint QR codes directly onto any surface implementing [`Canvas`].
//! - Save PNG and SVG output, or print QR codes to the console.
//! - Load render options from TOML.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrpaint = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Generate an in-memory image buffer:
//!
//! ```rust
//! use qrpaint::{generate_image_buffer, QrCodeEcc};
//!
//! let img = generate_image_buffer("Hello, World!", 500, 1, QrCodeEcc::Medium).unwrap();
//! assert_eq!(img.dimensions(), (500, 500));
//! ```
//!
//! Generate an SVG document:
//!
//! ```rust
//! use qrpaint::{generate_svg_string, QrCodeEcc};
//!
//! let svg = generate_svg_string("Hello, World!", 4, QrCodeEcc::Low).unwrap();
//! assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: Symbol acquisition from the encoder.
//! - [`render`]: Raster, SVG and paint projections.
//! - [`canvas`]: The drawing-context trait and an image-backed implementation.
//! - [`helper`]: Saving output and console rendering.
//! - [`config`]: Render options.

pub mod canvas;
pub mod config;
pub mod error;
pub mod helper;
pub mod qrcode;
pub mod render;

pub use crate::canvas::{Canvas, ImageCanvas};
pub use crate::config::RenderOptions;
pub use crate::error::{Error, Result};
pub use crate::qrcode::{QrCodeEcc, Symbol};
pub use crate::render::{
    generate_image_buffer, generate_svg_string, paint_qr, paint_symbol, symbol_to_image,
    to_svg_string, RenderRequest,
};
