//! Error types for loading, remixing and exporting images

use std::fmt;
use std::path::PathBuf;

/// Every failure a remix run can report
#[derive(Debug)]
pub enum RemixError {
    /// A source image could not be opened or decoded
    ImageLoad {
        /// Source that failed
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// Configuration value rejected before any work started
    InvalidParameter {
        /// Parameter name as the user knows it
        parameter: &'static str,
        /// Rejected value, rendered as text
        value: String,
        /// Accepted range or rule that was broken
        reason: String,
    },

    /// The combined token stream of all sources was empty
    ///
    /// Happens when every source is too small to have interior pixels
    /// (width or height of 2 or less).
    NoTrainingData,

    /// The pixel stream ended while the fill still had cells to paint
    ///
    /// Chain samplers are infinite, so this means a broken collaborator.
    PixelStreamExhausted {
        /// Cells painted before the stream ran dry
        painted: usize,
        /// Cells in the logical grid
        expected: usize,
    },

    /// The result could not be encoded or written
    ImageExport {
        /// Destination of the write
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// A directory or stream operation failed
    FileSystem {
        /// Directory or stream involved
        path: PathBuf,
        /// What was being attempted, e.g. "create directory"
        operation: &'static str,
        /// I/O error from the OS
        source: std::io::Error,
    },

    /// The system image viewer could not be launched
    ViewerLaunch {
        /// Image that was to be shown
        path: PathBuf,
        /// Launcher error
        source: opener::OpenError,
    },
}

impl fmt::Display for RemixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot read source '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid {parameter} '{value}': {reason}"),
            Self::NoTrainingData => write!(
                f,
                "No training data: source images produced no tokens \
                 (images must be larger than 2x2)"
            ),
            Self::PixelStreamExhausted { painted, expected } => write!(
                f,
                "Pixel stream exhausted after {painted} of {expected} cells"
            ),
            Self::ImageExport { path, source } => {
                write!(f, "Cannot write image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "Cannot {operation} '{}': {source}", path.display()),
            Self::ViewerLaunch { path, source } => {
                write!(f, "Cannot open viewer for '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RemixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ViewerLaunch { source, .. } => Some(source),
            Self::InvalidParameter { .. }
            | Self::NoTrainingData
            | Self::PixelStreamExhausted { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RemixError>;

impl From<image::ImageError> for RemixError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::new(),
            source: error,
        }
    }
}

impl From<std::io::Error> for RemixError {
    fn from(error: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "access",
            source: error,
        }
    }
}

/// Build an [`RemixError::InvalidParameter`] from displayable parts
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RemixError {
    RemixError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
