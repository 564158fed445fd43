//! Terminal progress display for model training and canvas painting

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static PAINT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Hands out progress bars for each remix stage
///
/// A hidden reporter hands out hidden bars, so callers never need to check
/// whether progress is enabled.
#[derive(Clone, Debug)]
pub struct ProgressReporter {
    visible: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a reporter that draws to stderr
    pub const fn new() -> Self {
        Self { visible: true }
    }

    /// Create a reporter whose bars never draw
    pub const fn hidden() -> Self {
        Self { visible: false }
    }

    /// Check if bars are drawn
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Spinner shown while the model consumes the token stream
    pub fn start_training(&self) -> ProgressBar {
        let spinner = self.bar(ProgressBar::new_spinner());
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message("Training model");
        if self.visible {
            spinner.enable_steady_tick(Duration::from_millis(100));
        }
        spinner
    }

    /// Bar advanced by one for each painted cell
    pub fn start_painting(&self, cells: usize) -> ProgressBar {
        let bar = self.bar(ProgressBar::new(cells as u64));
        bar.set_style(PAINT_STYLE.clone());
        bar.set_message("Painting");
        bar
    }

    fn bar(&self, bar: ProgressBar) -> ProgressBar {
        if !self.visible {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar
    }
}
