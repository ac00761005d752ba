//! Error types for engine and I/O operations

use std::fmt;
use std::path::PathBuf;

use crate::geometry::color::ColorParseError;

/// Main error type for all engine and I/O operations
#[derive(Debug)]
pub enum EngineError {
    /// Generation was requested with no usable images
    EmptyInput,

    /// A hex color string could not be parsed
    InvalidColor {
        /// The offending input string
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Export was requested before any generation completed
    NotReady,

    /// A single image could not be drawn; the run continues without it
    InvalidImage {
        /// Position of the image in the input sequence
        index: usize,
        /// Description of what is wrong with the image
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the finished surface as PNG
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "No images to place: generation requires at least one image")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::NotReady => {
                write!(f, "No wallpaper has been generated since the surface was last cleared")
            }
            Self::InvalidImage { index, reason } => {
                write!(f, "Image {index} cannot be drawn: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode wallpaper: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageEncode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ColorParseError> for EngineError {
    fn from(error: ColorParseError) -> Self {
        Self::InvalidColor {
            value: error.value,
            reason: error.reason.to_string(),
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a per-image draw error
pub fn invalid_image(index: usize, reason: &impl ToString) -> EngineError {
    EngineError::InvalidImage {
        index,
        reason: reason.to_string(),
    }
}
