//! Tests for source preparation and PNG export

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use remixel::RemixError;
    use remixel::io::image::{
        encode_png, load_source, prepare_source, quantize, save_output, timestamped_output_path,
    };
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn distinct_colors(image: &RgbImage) -> usize {
        image.pixels().map(|pixel| pixel.0).collect::<HashSet<_>>().len()
    }

    // Tests large sources shrink to fit the thumbnail box keeping aspect ratio
    // Verified by resizing to an exact square
    #[test]
    fn test_large_source_shrinks_to_fit() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(250, 100, Rgb([1, 2, 3])));

        let prepared = prepare_source(&image);
        assert_eq!(prepared.dimensions(), (125, 50));
    }

    // Tests small sources keep their size and colours
    // Verified by always resizing to the thumbnail size
    #[test]
    fn test_small_source_unchanged() {
        let original = RgbImage::from_fn(40, 30, |x, _| {
            if x < 20 { Rgb([10, 20, 30]) } else { Rgb([200, 100, 0]) }
        });

        let prepared = prepare_source(&DynamicImage::ImageRgb8(original.clone()));
        assert_eq!(prepared, original);
    }

    // Tests images with many colours are reduced to the palette size
    // Verified by skipping quantization
    #[test]
    fn test_quantize_bounds_palette() {
        let image = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255])
        });

        let quantized = quantize(&image, 256);
        assert_eq!(quantized.dimensions(), (64, 64));
        assert!(distinct_colors(&quantized) <= 256);
        assert!(distinct_colors(&quantized) > 16);
    }

    // Tests images within the palette pass through unchanged
    // Verified by always running the quantizer
    #[test]
    fn test_quantize_keeps_small_palettes() {
        let image = RgbaImage::from_fn(8, 8, |x, _| Rgba([x as u8 * 30, 7, 9, 255]));

        let quantized = quantize(&image, 256);
        assert_eq!(distinct_colors(&quantized), 8);
        assert_eq!(*quantized.get_pixel(3, 5), Rgb([90, 7, 9]));
    }

    // Tests saving creates missing directories and writes a PNG
    // Verified by removing the directory creation
    #[test]
    fn test_save_output_creates_directories() -> remixel::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("deeper").join("out.png");
        let image = RgbImage::from_pixel(6, 4, Rgb([5, 6, 7]));

        save_output(&image, &path)?;
        let reloaded = image::open(&path)?.to_rgb8();
        assert_eq!(reloaded, image);
        Ok(())
    }

    // Tests PNG bytes decode back to the same image
    // Verified by encoding as BMP
    #[test]
    fn test_encode_png() -> remixel::Result<()> {
        let image = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8, y as u8, 50]));

        let bytes = encode_png(&image)?;
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        let decoded = image::load_from_memory(&bytes)?.to_rgb8();
        assert_eq!(decoded, image);
        Ok(())
    }

    // Tests output files are named after the current Unix time
    // Verified by naming files with milliseconds
    #[test]
    fn test_timestamped_output_path() {
        let dir = std::path::Path::new("renders");
        let path = timestamped_output_path(dir);

        assert_eq!(path.parent(), Some(dir));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let seconds: u64 = stem.parse().unwrap_or(0);
        assert!(seconds > 1_600_000_000, "stem {stem} is not a Unix time");
    }

    // Tests missing sources report the path that failed
    // Verified by dropping the path from the error
    #[test]
    fn test_load_missing_source() {
        let result = load_source("does/not/exist.png");

        match result {
            Err(RemixError::ImageLoad { path, .. }) => {
                assert_eq!(path, std::path::PathBuf::from("does/not/exist.png"));
            }
            other => panic!("expected ImageLoad, got {other:?}"),
        }
    }

    // Tests loading runs the source through preparation
    // Verified by returning the decoded image directly
    #[test]
    fn test_load_prepares_source() -> remixel::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("big.png");
        RgbImage::from_pixel(375, 150, Rgb([9, 9, 9])).save(&path)?;

        let loaded = load_source(&path)?;
        assert_eq!(loaded.dimensions(), (125, 50));
        Ok(())
    }
}
