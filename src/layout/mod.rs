//! Placement strategies mapping an ordered image sequence to canvas rectangles
//!
//! Each strategy consumes the image dimensions, the canvas size, and a device
//! class, and emits one rectangle per image in drawing order. Randomness is
//! injected as a seeded generator so layouts are reproducible under test.

use clap::ValueEnum;
use rand::rngs::StdRng;

use crate::io::configuration::{
    GRID_PADDING_DESKTOP, GRID_PADDING_MOBILE, MASONRY_PADDING_DESKTOP, MASONRY_PADDING_MOBILE,
    SCATTER_PADDING_DESKTOP, SCATTER_PADDING_MOBILE,
};

/// Grid strategy with per-cell jitter and draw-order sorting
pub mod grid;
/// Greedy shortest-column masonry strategy
pub mod masonry;
/// Rejection-sampled random scatter strategy
pub mod scatter;

/// Device class steering the density of the built-in layout tables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Wide landscape canvases
    Desktop,
    /// Narrow portrait canvases
    Mobile,
}

/// Pixel dimensions of one decoded source image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDims {
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
}

impl ImageDims {
    /// Height-over-width ratio; callers must filter zero-width images first
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }
}

/// One image placement computed by a strategy
///
/// `image_index` refers to the strategy's input sequence; list order is the
/// drawing order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRect {
    /// Left edge on the canvas
    pub x: f32,
    /// Top edge on the canvas
    pub y: f32,
    /// Placed width
    pub width: f32,
    /// Placed height
    pub height: f32,
    /// Rotation about the rectangle center, in degrees
    pub rotation_deg: f32,
    /// Index of the source image in the strategy input
    pub image_index: usize,
}

/// Placement strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Regular rows and columns with organic jitter
    Grid,
    /// Column-balanced packing at fixed column width
    Masonry,
    /// Non-overlapping random placement with size variation
    Random,
}

/// Compute placements for every image under the selected strategy
///
/// Grid and Masonry emit exactly one rectangle per input image; Random may
/// drop images that cannot be separated from earlier placements.
pub fn compute_layout(
    strategy: Strategy,
    dims: &[ImageDims],
    canvas_w: f32,
    canvas_h: f32,
    device: DeviceClass,
    rng: &mut StdRng,
) -> Vec<PlacedRect> {
    match strategy {
        Strategy::Grid => grid::place(dims, canvas_w, canvas_h, device, rng),
        Strategy::Masonry => masonry::place(dims, canvas_w, device),
        Strategy::Random => scatter::place(dims, canvas_w, canvas_h, device, rng),
    }
}

/// Base padding of a strategy, which also scales the cell shadow blur
pub const fn strategy_padding(strategy: Strategy, device: DeviceClass) -> f32 {
    match (strategy, device) {
        (Strategy::Grid, DeviceClass::Desktop) => GRID_PADDING_DESKTOP,
        (Strategy::Grid, DeviceClass::Mobile) => GRID_PADDING_MOBILE,
        (Strategy::Masonry, DeviceClass::Desktop) => MASONRY_PADDING_DESKTOP,
        (Strategy::Masonry, DeviceClass::Mobile) => MASONRY_PADDING_MOBILE,
        (Strategy::Random, DeviceClass::Desktop) => SCATTER_PADDING_DESKTOP,
        (Strategy::Random, DeviceClass::Mobile) => SCATTER_PADDING_MOBILE,
    }
}
