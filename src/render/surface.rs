//! Ownership and lifecycle of the output raster
//!
//! The surface manager owns the raster between runs. Resizing reallocates
//! the buffer, which by definition discards prior pixels, and read access is
//! gated until a generation run completes so a blank or stale raster can
//! never escape.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::io::error::{EngineError, Result};

/// Owner of the output raster surface
pub struct SurfaceManager {
    surface: RgbaImage,
    generated: bool,
}

impl Default for SurfaceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceManager {
    /// Create a manager with an empty, not-yet-generated surface
    pub fn new() -> Self {
        Self {
            surface: RgbaImage::new(0, 0),
            generated: false,
        }
    }

    /// Reallocate the surface to the target resolution, discarding all pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = RgbaImage::new(width, height);
        self.generated = false;
    }

    /// Current surface dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }

    /// Mutable raster access for the drawing phase of a run
    ///
    /// Drawing on the raster does not make it exportable; the run must end
    /// with [`Self::mark_generated`].
    pub fn raster_mut(&mut self) -> &mut RgbaImage {
        &mut self.surface
    }

    /// Record that a generation run completed on the current surface
    pub fn mark_generated(&mut self) {
        self.generated = true;
    }

    /// The finished surface, or `None` if no run has completed since the
    /// last resize
    pub fn surface(&self) -> Option<&RgbaImage> {
        self.generated.then_some(&self.surface)
    }

    /// Encode the finished surface as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] if no generation has completed since
    /// the last resize, or an encoding error from the PNG writer.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        if !self.generated {
            return Err(EngineError::NotReady);
        }

        let mut bytes = Cursor::new(Vec::new());
        self.surface
            .write_to(&mut bytes, ImageFormat::Png)
            .map_err(|source| EngineError::ImageEncode { source })?;
        Ok(bytes.into_inner())
    }
}
