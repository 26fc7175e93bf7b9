use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use qrpaint::helper::{save_png, save_svg, to_text_art};
use qrpaint::{QrCodeEcc, RenderOptions, RenderRequest, Symbol};

/// Render text as a QR code image, SVG document, or console art
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Text to encode
    text: String,

    /// TOML file with default render options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width and height in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Border width in modules
    #[arg(short, long)]
    border: Option<u32>,

    /// Error correction level: low, medium, quartile or high
    #[arg(short, long)]
    ecc: Option<QrCodeEcc>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Directory to write into (defaults to ./generated)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File name without extension (defaults to a timestamp)
    #[arg(short, long)]
    name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Text,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut options = match &args.config {
        Some(path) => RenderOptions::load(path)
            .with_context(|| format!("failed to load render options from {}", path.display()))?,
        None => RenderOptions::default(),
    };
    if let Some(size) = args.size {
        options.size = size;
    }
    if let Some(border) = args.border {
        options.border = border;
    }
    if let Some(ecc) = args.ecc {
        options.ecc = ecc;
    }
    options.validate()?;
    debug!("render options: {:?}", options);

    let request = RenderRequest::new(args.text, options);
    let directory = args.output.as_deref();
    let name = args.name.as_deref();
    match args.format {
        Format::Png => {
            let image = request.to_image().context("failed to render QR code")?;
            let path = save_png(&image, directory, name)?;
            info!("{}x{} PNG saved to {}", image.width(), image.height(), path.display());
        }
        Format::Svg => {
            let svg = request.to_svg().context("failed to render QR code")?;
            let path = save_svg(&svg, directory, name)?;
            info!("SVG saved to {}", path.display());
        }
        Format::Text => {
            let qr = Symbol::encode_text(&request.text, options.ecc).context("failed to encode QR code")?;
            print!("{}", to_text_art(&qr, options.border));
        }
    }
    Ok(())
}
