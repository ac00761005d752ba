//! Per-cell compositing: shadow, frame, clipped image, vignette, border
//!
//! The steps run in a fixed order because each one composites over the
//! surface state the previous step left behind: the shadow sits under the
//! frame, the frame under the clipped image, the vignette over it, and the
//! border over everything.

use crate::config::{FrameConfig, FrameStyle};
use crate::geometry::color::Rgb;
use crate::geometry::fit::{FitMode, fit_aspect};
use crate::geometry::path::RoundedRect;
use crate::io::configuration::{
    CELL_CORNER_FRACTION, FRAME_GRADIENT_DELTA, SHADOW_ALPHA, SHADOW_BLUR_FRACTION,
    SHADOW_OFFSET_FRACTION, VIGNETTE_EDGE_ALPHA, VIGNETTE_RADIUS_FRACTION,
};
use crate::io::error::{Result, invalid_image};
use crate::io::image::SourceImage;
use crate::layout::PlacedRect;
use crate::render::painter::{Paint, Painter, Transform};

/// Draw parameters shared by every cell of one generation run
#[derive(Clone, Copy, Debug)]
pub struct CellStyle {
    /// Frame color
    pub frame_color: Rgb,
    /// Frame fill opacity
    pub frame_opacity: f32,
    /// Solid or gradient frame fill
    pub frame_style: FrameStyle,
    /// Border width in pixels
    pub border_width: f32,
    /// Strategy padding, which scales the shadow blur
    pub padding: f32,
}

impl CellStyle {
    /// Derive the per-cell style from the frame configuration
    pub fn new(frame: &FrameConfig, padding: f32) -> Self {
        Self {
            frame_color: frame.color,
            frame_opacity: frame.opacity,
            frame_style: frame.style,
            border_width: frame.border_width as f32,
            padding,
        }
    }
}

/// Composite one image into its placed rectangle
///
/// # Errors
///
/// Returns an error if the image has a zero dimension; the caller logs it
/// and continues with the remaining cells.
pub fn draw_cell(
    painter: &mut Painter<'_>,
    image: &SourceImage,
    rect: &PlacedRect,
    style: &CellStyle,
) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_image(rect.image_index, &"zero-dimension raster"));
    }

    let corner = rect.width.min(rect.height) * CELL_CORNER_FRACTION;
    let cell = RoundedRect::new(rect.x, rect.y, rect.width, rect.height, corner);

    let transform = if rect.rotation_deg == 0.0 {
        Transform::IDENTITY
    } else {
        let (cx, cy) = cell.center();
        Transform::rotation_about(rect.rotation_deg, cx, cy)
    };

    // The frame extends past the cell; the cell itself is the clip region
    let frame = cell.expand(style.border_width);
    let blur = style.padding * SHADOW_BLUR_FRACTION;
    painter.shadow_rounded_rect(
        &frame,
        blur,
        blur * SHADOW_OFFSET_FRACTION,
        SHADOW_ALPHA,
        &transform,
    );

    let paint = match style.frame_style {
        FrameStyle::Solid => Paint::solid(style.frame_color.with_alpha(style.frame_opacity)),
        FrameStyle::Gradient => Paint::vertical_gradient(
            style
                .frame_color
                .brightened(FRAME_GRADIENT_DELTA)
                .with_alpha(style.frame_opacity),
            style
                .frame_color
                .brightened(-FRAME_GRADIENT_DELTA)
                .with_alpha(style.frame_opacity),
        ),
    };
    painter.fill_rounded_rect(&frame, &paint, &transform);

    let fit = fit_aspect(
        image.width() as f32,
        image.height() as f32,
        cell.w,
        cell.h,
        FitMode::Contain,
    );
    painter.draw_image(image.data(), &fit, (cell.x, cell.y), &cell, 1.0, &transform);

    painter.vignette(
        &cell,
        cell.w * VIGNETTE_RADIUS_FRACTION,
        VIGNETTE_EDGE_ALPHA,
        &transform,
    );

    if style.border_width > 0.0 {
        painter.stroke_rounded_rect(
            &cell,
            style.border_width,
            style.frame_color.with_alpha(1.0),
            &transform,
        );
    }

    Ok(())
}
