//! Command-line interface assembling a wallpaper run from image files

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{
    BackgroundConfig, BackgroundMode, FrameConfig, FrameStyle, LayoutConfig, Resolution,
    WallpaperConfig,
};
use crate::engine::WallpaperEngine;
use crate::geometry::color::Rgb;
use crate::io::configuration::{
    DEFAULT_BORDER_WIDTH, DEFAULT_COLOR_HEX, DEFAULT_FRAME_OPACITY, DEFAULT_OUTPUT, DEFAULT_SEED,
};
use crate::io::error::{EngineError, Result};
use crate::io::image::{SourceImage, save_png};
use crate::io::progress::ProgressManager;
use crate::layout::Strategy;

#[derive(Parser)]
#[command(name = "montage")]
#[command(
    author,
    version,
    about = "Compose a wallpaper collage from a set of images"
)]
/// Command-line arguments for the wallpaper compositor
pub struct Cli {
    /// Input image files or directories of images
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<PathBuf>,

    /// Output path for the finished PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Placement strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Grid)]
    pub layout: Strategy,

    /// Target resolution preset
    #[arg(short, long, value_enum, default_value_t = Resolution::Desktop)]
    pub resolution: Resolution,

    /// Frame color as a 6-digit hex string
    #[arg(long, default_value = DEFAULT_COLOR_HEX)]
    pub frame_color: String,

    /// Frame fill style
    #[arg(long, value_enum, default_value_t = FrameStyle::Solid)]
    pub frame_style: FrameStyle,

    /// Frame opacity between 0 and 1
    #[arg(long, default_value_t = DEFAULT_FRAME_OPACITY)]
    pub frame_opacity: f32,

    /// Border width around each image in pixels
    #[arg(short, long, default_value_t = DEFAULT_BORDER_WIDTH)]
    pub border_width: u32,

    /// Background color as a 6-digit hex string
    #[arg(long, default_value = DEFAULT_COLOR_HEX)]
    pub background_color: String,

    /// Optional background image drawn beneath the collage
    #[arg(long)]
    pub background_image: Option<PathBuf>,

    /// How a background image fills the canvas
    #[arg(long, value_enum, default_value_t = BackgroundMode::Cover)]
    pub background_mode: BackgroundMode,

    /// Random seed for reproducible jitter and scatter
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Decodes inputs, runs the engine, and writes the finished wallpaper
pub struct WallpaperProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl WallpaperProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Run one complete generation and write the output file
    ///
    /// # Errors
    ///
    /// Returns an error when no input images are found, a file cannot be
    /// decoded, a color or parameter is invalid, or the output cannot be
    /// written.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let images = self.decode_images(&files)?;
        let background = match &self.cli.background_image {
            Some(path) => Some(SourceImage::open(path)?),
            None => None,
        };

        let config = WallpaperConfig {
            layout: LayoutConfig {
                strategy: self.cli.layout,
                resolution: self.cli.resolution,
            },
            frame: FrameConfig {
                color: Rgb::parse_hex(&self.cli.frame_color)?,
                opacity: self.cli.frame_opacity,
                style: self.cli.frame_style,
                border_width: self.cli.border_width,
            },
            background: BackgroundConfig {
                color: Rgb::parse_hex(&self.cli.background_color)?,
                image: background.as_ref(),
                mode: self.cli.background_mode,
            },
            seed: self.cli.seed,
        };

        let mut engine = WallpaperEngine::new();
        let report = engine.generate(&images, &config)?;
        let bytes = engine.export_png()?;
        save_png(&bytes, &self.cli.output)?;

        if report.dropped > 0 {
            log::warn!(
                "{} image(s) could not be placed by the scatter layout",
                report.dropped
            );
        }
        log::info!(
            "wrote {} ({} image(s) placed)",
            self.cli.output.display(),
            report.placed
        );
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for target in &self.cli.targets {
            if target.is_dir() {
                let entries =
                    std::fs::read_dir(target).map_err(|source| EngineError::FileSystem {
                        path: target.clone(),
                        operation: "read directory",
                        source,
                    })?;
                for entry in entries {
                    let path = entry
                        .map_err(|source| EngineError::FileSystem {
                            path: target.clone(),
                            operation: "read directory entry",
                            source,
                        })?
                        .path();
                    if is_supported(&path) {
                        files.push(path);
                    }
                }
            } else {
                files.push(target.clone());
            }
        }
        files.sort();
        Ok(files)
    }

    fn decode_images(&mut self, files: &[PathBuf]) -> Result<Vec<SourceImage>> {
        if let Some(progress) = &mut self.progress {
            progress.start(files.len(), "Decoding");
        }

        let mut images = Vec::with_capacity(files.len());
        for path in files {
            images.push(SourceImage::open(path)?);
            if let Some(progress) = &self.progress {
                progress.advance();
            }
        }

        if let Some(progress) = &mut self.progress {
            progress.finish();
        }
        Ok(images)
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            matches!(
                extension.to_ascii_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "webp"
            )
        })
}
