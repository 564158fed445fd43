//! Command-line interface for remixing one or more images

use crate::algorithm::remix::{RemixConfig, remix};
use crate::io::configuration::{DEFAULT_NGRAM_SIZE, FILL_SCALE};
use crate::io::error::{RemixError, Result};
use crate::io::image::{encode_png, load_source, save_output, timestamped_output_path};
use crate::io::progress::ProgressReporter;
use crate::model::ngram::NGramBuilder;
use clap::Parser;
use image::RgbImage;
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "remixel")]
#[command(
    author,
    version,
    about = "Remix images with Markov chains over pixel neighbourhoods"
)]
/// Command-line arguments for the remix tool
pub struct Cli {
    /// Input image(s)
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,

    /// Markov n-gram size
    #[arg(short, long, default_value_t = DEFAULT_NGRAM_SIZE)]
    pub ngram_size: usize,

    /// Output image width
    #[arg(long)]
    pub width: u32,

    /// Output image height
    #[arg(long)]
    pub height: u32,

    /// Directory to write the result to, named after the current time
    ///
    /// Without it the PNG is written to stdout.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Open the result in the system image viewer
    #[arg(long)]
    pub show: bool,

    /// Random seed for reproducible output (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grid cells per working-canvas pixel
    #[arg(long, default_value_t = FILL_SCALE)]
    pub scale: f64,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Remix parameters described by these arguments
    pub const fn remix_config(&self) -> RemixConfig {
        RemixConfig {
            ngram_size: self.ngram_size,
            output_width: self.width,
            output_height: self.height,
            fill_scale: self.scale,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default `env_logger` filter for these arguments
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Runs one remix from parsed arguments and delivers the result
pub struct RemixRunner {
    cli: Cli,
    progress: ProgressReporter,
}

impl RemixRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        Self { cli, progress }
    }

    /// Load sources, remix them and write or show the result
    ///
    /// Returns the path of the written file, or `None` when the image went to
    /// stdout only.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arguments are invalid (checked before any image is loaded)
    /// - A source image cannot be loaded
    /// - The remix fails
    /// - The result cannot be written or shown
    pub fn run(&self) -> Result<Option<PathBuf>> {
        let config = self.cli.remix_config();
        config.validate()?;

        let sources = self
            .cli
            .sources
            .iter()
            .map(load_source)
            .collect::<Result<Vec<_>>>()?;

        let seed = self.seed();
        info!("Seed: {seed}");
        let mut rng = StdRng::seed_from_u64(seed);

        let result = remix(&sources, &config, &NGramBuilder, &mut rng, &self.progress)?;
        self.deliver(&result.image)
    }

    /// Seed from the arguments, or a fresh random one
    pub fn seed(&self) -> u64 {
        self.cli.seed.unwrap_or_else(|| rand::rng().random())
    }

    fn deliver(&self, image: &RgbImage) -> Result<Option<PathBuf>> {
        let written = match (&self.cli.output_dir, self.cli.show) {
            (Some(dir), _) => Some(Self::write_file(image, dir)?),
            (None, true) => Some(Self::write_file(image, &std::env::temp_dir())?),
            (None, false) => None,
        };

        if self.cli.output_dir.is_none() {
            Self::write_stdout(image)?;
        }

        if let (true, Some(path)) = (self.cli.show, &written) {
            opener::open(path).map_err(|e| RemixError::ViewerLaunch {
                path: path.clone(),
                source: e,
            })?;
        }

        Ok(written)
    }

    fn write_file(image: &RgbImage, dir: &Path) -> Result<PathBuf> {
        let path = timestamped_output_path(dir);
        save_output(image, &path)?;
        let shown = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
        info!("{}", shown.display());
        Ok(path)
    }

    fn write_stdout(image: &RgbImage) -> Result<()> {
        let bytes = encode_png(image)?;
        std::io::stdout()
            .lock()
            .write_all(&bytes)
            .map_err(|e| RemixError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write",
                source: e,
            })
    }
}
