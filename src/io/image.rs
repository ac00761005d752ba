//! Image decoding into engine-ready raster handles and PNG output

use std::fmt;
use std::path::Path;

use image::RgbaImage;

use crate::io::error::{EngineError, Result};
use crate::layout::ImageDims;

/// Decoded raster handle borrowed by the engine during generation
///
/// Immutable once decoded; the engine reads pixels and dimensions only.
pub struct SourceImage {
    data: RgbaImage,
}

impl SourceImage {
    /// Decode an image file into RGBA pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a decodable
    /// image in a compiled-in format.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| EngineError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            data: decoded.to_rgba8(),
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.data.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Dimensions in the layout module's terms
    pub fn dims(&self) -> ImageDims {
        ImageDims {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Borrow the decoded pixel data
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }
}

impl From<RgbaImage> for SourceImage {
    fn from(data: RgbaImage) -> Self {
        Self { data }
    }
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Write encoded PNG bytes to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_png(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| EngineError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    std::fs::write(path, bytes).map_err(|source| EngineError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
