//! Remix orchestration: tokenize, train, fill an oversized canvas, shrink and crop

use image::RgbImage;
use image::imageops::{self, FilterType};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::fill::{FillReport, fill};
use crate::analysis::tokenizer::{ColorToken, token_count, tokenize_all};
use crate::io::configuration::{
    CROP_BORDER, DEFAULT_NGRAM_SIZE, FILL_SCALE, MIN_OUTPUT_DIMENSION, WORK_CANVAS_FACTOR,
};
use crate::io::error::{RemixError, Result, invalid_parameter};
use crate::io::progress::ProgressReporter;
use crate::model::{ModelBuilder, TokenModel};
use crate::spatial::geometry::FillGeometry;

/// Parameters of a single remix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RemixConfig {
    /// Markov n-gram size (context length plus one)
    pub ngram_size: usize,
    /// Width of the final image in pixels
    pub output_width: u32,
    /// Height of the final image in pixels
    pub output_height: u32,
    /// Grid cells per working-canvas pixel
    pub fill_scale: f64,
}

impl RemixConfig {
    /// Configuration with default n-gram size and fill scale
    pub const fn new(output_width: u32, output_height: u32) -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            output_width,
            output_height,
            fill_scale: FILL_SCALE,
        }
    }

    /// Working canvas dimensions (width, height)
    ///
    /// # Errors
    ///
    /// Returns an error if either output dimension is too large to scale up
    /// to the working canvas.
    pub fn work_dimensions(&self) -> Result<(u32, u32)> {
        let scale_up = |parameter: &'static str, value: u32| {
            value.checked_mul(WORK_CANVAS_FACTOR).ok_or_else(|| {
                invalid_parameter(
                    parameter,
                    &value,
                    &format!("too large, must be at most {}", u32::MAX / WORK_CANVAS_FACTOR),
                )
            })
        };
        Ok((
            scale_up("output_width", self.output_width)?,
            scale_up("output_height", self.output_height)?,
        ))
    }

    /// Dimensions of the final image after the border crop
    pub const fn cropped_dimensions(&self) -> (u32, u32) {
        (
            self.output_width.saturating_sub(2 * CROP_BORDER),
            self.output_height.saturating_sub(2 * CROP_BORDER),
        )
    }

    /// Check every parameter and derive the fill geometry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `ngram_size` is zero
    /// - Either output dimension is below [`MIN_OUTPUT_DIMENSION`] or too
    ///   large for the working canvas
    /// - `fill_scale` is outside `(0, 1]` or yields an empty grid
    pub fn validate(&self) -> Result<FillGeometry> {
        if self.ngram_size == 0 {
            return Err(invalid_parameter(
                "ngram_size",
                &self.ngram_size,
                &"must be at least 1",
            ));
        }
        for (parameter, value) in [
            ("output_width", self.output_width),
            ("output_height", self.output_height),
        ] {
            if value < MIN_OUTPUT_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be at least {MIN_OUTPUT_DIMENSION} pixels"),
                ));
            }
        }

        let (work_width, work_height) = self.work_dimensions()?;
        FillGeometry::new(work_width, work_height, self.fill_scale)
    }
}

impl Default for RemixConfig {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Outcome of a remix: the image plus statistics about how it was made
#[derive(Debug)]
pub struct Remix {
    /// Final cropped image
    pub image: RgbImage,
    /// Distinct contexts in the trained model
    pub model_size: usize,
    /// Fill statistics
    pub fill: FillReport,
}

/// Remix source images into a new image
///
/// Every source is tokenized and the combined stream trains one model. A
/// chain sampled from that model paints a canvas twice the requested size,
/// which is then shrunk with an antialiasing filter and cropped by
/// [`CROP_BORDER`] on every side to drop fill and resampling edge artifacts.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid or `sources` is empty
/// - No source has interior pixels to tokenize
/// - The model builder or chain sampler fails
pub fn remix<B, R>(
    sources: &[RgbImage],
    config: &RemixConfig,
    builder: &B,
    rng: &mut R,
    progress: &ProgressReporter,
) -> Result<Remix>
where
    B: ModelBuilder<ColorToken>,
    R: Rng,
{
    let geometry = config.validate()?;
    if sources.is_empty() {
        return Err(invalid_parameter(
            "sources",
            &0,
            &"at least one source image is required",
        ));
    }
    if sources
        .iter()
        .all(|source| token_count(source.width(), source.height()) == 0)
    {
        return Err(RemixError::NoTrainingData);
    }

    let pixel_count: u64 = sources
        .iter()
        .map(|source| u64::from(source.width()) * u64::from(source.height()))
        .sum();
    info!("{} image(s), {pixel_count} pixels", sources.len());

    let training = progress.start_training();
    let model = builder.build(tokenize_all(sources), config.ngram_size)?;
    training.finish_and_clear();
    info!("Model size: {}", model.len());

    let (work_width, work_height) = config.work_dimensions()?;
    let mut canvas = RgbImage::new(work_width, work_height);

    let mut pixels = model.chain(None, StdRng::seed_from_u64(rng.random()))?;
    let painting = progress.start_painting(geometry.cell_count());
    let report = fill(&geometry, &mut canvas, &mut pixels, rng, &painting)?;
    painting.finish_and_clear();
    info!(
        "Painted {} cells on a {}x{} grid ({} reorderings)",
        report.cells_painted, report.grid_dimensions.0, report.grid_dimensions.1, report.reorderings
    );

    let shrunk = imageops::resize(
        &canvas,
        config.output_width,
        config.output_height,
        FilterType::Lanczos3,
    );
    let (crop_width, crop_height) = config.cropped_dimensions();
    let image = imageops::crop_imm(&shrunk, CROP_BORDER, CROP_BORDER, crop_width, crop_height)
        .to_image();

    Ok(Remix {
        image,
        model_size: model.len(),
        fill: report,
    })
}
