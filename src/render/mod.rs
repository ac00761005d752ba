//! Compositing over the output raster surface
//!
//! All drawing state is explicit: primitives take a transform and a paint
//! record per call, so there is no ambient fill style, clip, or shadow to
//! save and restore.

/// Background layer: solid fill plus optional cover-fit or tiled image
pub mod background;
/// Per-cell pipeline: shadow, frame, clipped image, vignette, border
pub mod cell;
/// Pixel-level primitives over an RGBA surface
pub mod painter;
/// Ownership and lifecycle of the output raster
pub mod surface;
