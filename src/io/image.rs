//! Source image preparation and PNG export

use color_quant::NeuQuant;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};
use log::debug;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::io::configuration::{
    OUTPUT_EXTENSION, QUANTIZE_SAMPLE_FACTOR, SOURCE_PALETTE_COLORS, SOURCE_THUMBNAIL_SIZE,
};
use crate::io::error::{RemixError, Result};

/// Load a source image and prepare it for tokenizing
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path_buf = path.as_ref().to_path_buf();
    let image = image::open(&path_buf).map_err(|e| RemixError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;
    debug!(
        "Loaded '{}' ({}x{})",
        path_buf.display(),
        image.width(),
        image.height()
    );
    Ok(prepare_source(&image))
}

/// Shrink to thumbnail size and reduce to a bounded palette
///
/// Images larger than [`SOURCE_THUMBNAIL_SIZE`] in either dimension are
/// shrunk to fit, keeping their aspect ratio. Smaller images are never
/// enlarged.
pub fn prepare_source(image: &DynamicImage) -> RgbImage {
    let fitted = if image.width() > SOURCE_THUMBNAIL_SIZE || image.height() > SOURCE_THUMBNAIL_SIZE
    {
        image.resize(
            SOURCE_THUMBNAIL_SIZE,
            SOURCE_THUMBNAIL_SIZE,
            FilterType::Lanczos3,
        )
    } else {
        image.clone()
    };
    quantize(&fitted.to_rgba8(), SOURCE_PALETTE_COLORS)
}

/// Reduce an image to at most `colors` distinct colours
///
/// Images already within the palette size are only converted to RGB, so
/// their colours come through unchanged.
pub fn quantize(image: &RgbaImage, colors: usize) -> RgbImage {
    let distinct: HashSet<[u8; 4]> = image.pixels().map(|pixel| pixel.0).collect();
    if distinct.len() <= colors {
        return DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    }

    let quantizer = NeuQuant::new(QUANTIZE_SAMPLE_FACTOR, colors, image.as_raw());
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let index = quantizer.index_of(&image.get_pixel(x, y).0);
        let [r, g, b, _] = quantizer.lookup(index).unwrap_or([0, 0, 0, 0]);
        Rgb([r, g, b])
    })
}

/// Path of a new output file in `dir`, named after the current Unix time
pub fn timestamped_output_path(dir: &Path) -> PathBuf {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    dir.join(format!("{seconds}.{OUTPUT_EXTENSION}"))
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_output(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RemixError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| RemixError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Encode an image as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| RemixError::ImageExport {
            path: PathBuf::from("<stdout>"),
            source: e,
        })?;
    Ok(bytes.into_inner())
}
