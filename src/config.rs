//! Run configuration records with documented defaults
//!
//! A generation run is a pure function of the image list and one
//! [`WallpaperConfig`], including its seed. Every field has a default, so
//! the engine is fully specified even from a minimal configuration.

use clap::ValueEnum;

use crate::geometry::color::Rgb;
use crate::io::configuration::{DEFAULT_BORDER_WIDTH, DEFAULT_FRAME_OPACITY, DEFAULT_SEED};
use crate::io::image::SourceImage;
use crate::layout::{DeviceClass, Strategy};

/// Named output resolution presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Resolution {
    /// 3840x2160 landscape canvas
    Desktop,
    /// 1080x1920 portrait canvas
    Mobile,
}

impl Resolution {
    /// Pixel dimensions of the preset
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Desktop => (3840, 2160),
            Self::Mobile => (1080, 1920),
        }
    }

    /// Device class steering the per-device layout tables
    pub const fn device_class(self) -> DeviceClass {
        match self {
            Self::Desktop => DeviceClass::Desktop,
            Self::Mobile => DeviceClass::Mobile,
        }
    }
}

/// Frame fill styles for the cell renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FrameStyle {
    /// Uniform frame color
    Solid,
    /// Top-to-bottom gradient around the frame color
    Gradient,
}

/// How a background image fills the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackgroundMode {
    /// One centered cover-fit draw
    Cover,
    /// Repeating 1:1 tiles under a diagonal shade
    Tiled,
}

/// Frame drawn around every placed image
#[derive(Clone, Copy, Debug)]
pub struct FrameConfig {
    /// Frame color
    pub color: Rgb,
    /// Frame fill opacity in [0, 1]
    pub opacity: f32,
    /// Solid or gradient fill
    pub style: FrameStyle,
    /// Border width in pixels; zero disables the border stroke
    pub border_width: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            opacity: DEFAULT_FRAME_OPACITY,
            style: FrameStyle::Solid,
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

/// Background layer painted beneath the collage
#[derive(Clone, Copy, Debug)]
pub struct BackgroundConfig<'a> {
    /// Solid fill color, always painted first
    pub color: Rgb,
    /// Optional image drawn over the fill at a fixed subtle opacity
    pub image: Option<&'a SourceImage>,
    /// Cover-fit or tiled compositing for the image
    pub mode: BackgroundMode,
}

impl Default for BackgroundConfig<'_> {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            image: None,
            mode: BackgroundMode::Cover,
        }
    }
}

/// Strategy and resolution selection for one run
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Placement strategy
    pub strategy: Strategy,
    /// Output resolution preset
    pub resolution: Resolution,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Grid,
            resolution: Resolution::Desktop,
        }
    }
}

/// Complete configuration for one generation run
#[derive(Clone, Copy, Debug)]
pub struct WallpaperConfig<'a> {
    /// Strategy and resolution
    pub layout: LayoutConfig,
    /// Frame treatment around each image
    pub frame: FrameConfig,
    /// Background layer beneath the collage
    pub background: BackgroundConfig<'a>,
    /// Seed for jitter, rotation, and scatter randomness
    pub seed: u64,
}

impl Default for WallpaperConfig<'_> {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            frame: FrameConfig::default(),
            background: BackgroundConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}
