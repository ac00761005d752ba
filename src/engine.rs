//! One-call orchestration of background, layout, and cell compositing
//!
//! A run executes synchronously to completion: validate input, resize the
//! surface, paint the background, compute placements under the selected
//! strategy, and composite every cell. The surface only becomes exportable
//! once the run finishes.

use image::RgbaImage;
use rand::{SeedableRng, rngs::StdRng};

use crate::config::WallpaperConfig;
use crate::io::error::{EngineError, Result, invalid_parameter};
use crate::io::image::SourceImage;
use crate::layout::{compute_layout, strategy_padding};
use crate::render::background::draw_background;
use crate::render::cell::{CellStyle, draw_cell};
use crate::render::painter::Painter;
use crate::render::surface::SurfaceManager;

/// Summary of one completed generation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Images composited onto the surface
    pub placed: usize,
    /// Images excluded because they could not be drawn
    pub skipped: usize,
    /// Images the scatter strategy failed to place
    pub dropped: usize,
}

/// End-to-end wallpaper generation over borrowed source images
pub struct WallpaperEngine {
    surface: SurfaceManager,
}

impl Default for WallpaperEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WallpaperEngine {
    /// Create an engine with an empty surface
    pub fn new() -> Self {
        Self {
            surface: SurfaceManager::new(),
        }
    }

    /// Compose a wallpaper from the images under the given configuration
    ///
    /// Runs are reproducible: the same images, configuration, and seed yield
    /// a byte-identical surface. Undrawable images are logged and skipped;
    /// the scatter strategy may additionally drop images it cannot separate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyInput`] when no drawable image exists (the
    /// surface is left untouched), or an invalid-parameter error for a frame
    /// opacity outside [0, 1].
    pub fn generate(
        &mut self,
        images: &[SourceImage],
        config: &WallpaperConfig<'_>,
    ) -> Result<GenerationReport> {
        if images.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        if !(0.0..=1.0).contains(&config.frame.opacity) {
            return Err(invalid_parameter(
                "frame opacity",
                &config.frame.opacity,
                &"must be within [0, 1]",
            ));
        }

        // Exclude undrawable images up front so placement indices stay dense
        let mut dims = Vec::with_capacity(images.len());
        let mut source_indices = Vec::with_capacity(images.len());
        let mut skipped = 0usize;
        for (index, image) in images.iter().enumerate() {
            if image.width() == 0 || image.height() == 0 {
                log::warn!("image {index} has a zero dimension, excluding it from the layout");
                skipped += 1;
                continue;
            }
            source_indices.push(index);
            dims.push(image.dims());
        }
        if dims.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let (width, height) = config.layout.resolution.dimensions();
        let device = config.layout.resolution.device_class();
        self.surface.resize(width, height);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let rects = compute_layout(
            config.layout.strategy,
            &dims,
            width as f32,
            height as f32,
            device,
            &mut rng,
        );
        let dropped = dims.len() - rects.len();

        let padding = strategy_padding(config.layout.strategy, device);
        let style = CellStyle::new(&config.frame, padding);

        let mut placed = 0usize;
        {
            let mut painter = Painter::new(self.surface.raster_mut());
            draw_background(&mut painter, &config.background);

            for rect in &rects {
                let Some(&source_index) = source_indices.get(rect.image_index) else {
                    continue;
                };
                let Some(image) = images.get(source_index) else {
                    continue;
                };
                match draw_cell(&mut painter, image, rect, &style) {
                    Ok(()) => placed += 1,
                    Err(error) => {
                        log::warn!("skipping image {source_index}: {error}");
                        skipped += 1;
                    }
                }
            }
        }

        self.surface.mark_generated();
        Ok(GenerationReport {
            placed,
            skipped,
            dropped,
        })
    }

    /// The finished surface, or `None` before the first completed run
    pub fn surface(&self) -> Option<&RgbaImage> {
        self.surface.surface()
    }

    /// Encode the finished surface as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] before the first completed run, or
    /// an encoding error from the PNG writer.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        self.surface.encode_png()
    }
}
